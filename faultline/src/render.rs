use std::fmt::{self, Write};

use faultline_core::{HttpError, KindError, Registry};

/// One line per kind: name, parent and default status
pub fn list(registry: &Registry) -> String {
    let mut output = String::new();
    // Writing into a `String` cannot fail
    write_list(&mut output, registry).ok();
    output
}

/// Every field of a constructed error
pub fn show(error: &KindError) -> String {
    let mut output = String::new();
    write_show(&mut output, error).ok();
    output
}

fn write_list(output: &mut impl Write, registry: &Registry) -> fmt::Result {
    let width = registry.iter().map(|(name, _)| name.len()).max().unwrap_or(0);

    for (name, kind) in registry.iter() {
        let parent = kind.parent().map_or("-", |parent| parent.name());
        let status = kind
            .default_status()
            .map_or_else(|| "-".to_owned(), |status| status.to_string());

        writeln!(output, "{name:<width$}  {parent:<width$}  {status}")?;
    }

    Ok(())
}

fn write_show(output: &mut impl Write, error: &KindError) -> fmt::Result {
    writeln!(output, "name:         {}", error.name())?;
    writeln!(output, "type:         {}", error.error_type())?;
    writeln!(output, "status:       {}", error.status_code().as_u16())?;
    writeln!(output, "message:      {}", error.message())?;
    writeln!(output, "user message: {}", error.user_message())?;

    if !error.attributes().is_empty() {
        writeln!(output, "attributes:")?;
        for (key, value) in error.attributes() {
            writeln!(output, "  {key} = {value}")?;
        }
    }

    Ok(())
}
