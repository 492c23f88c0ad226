#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;
mod render;

use args::{Args, Command};
use clap::Parser;
use faultline_config::Catalog;
use faultline_core::{ErrorParams, Registry};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_tracing(&args.log_filter);

    let mut registry = Registry::with_builtins();

    if let Some(path) = &args.catalog {
        let catalog = Catalog::load(path)?;
        let installed = catalog.install(&mut registry)?;

        tracing::info!(
            catalog_path = %path.display(),
            kinds = installed.len(),
            "installed catalog"
        );
    }

    match args.command {
        Command::List => print!("{}", render::list(&registry)),
        Command::Show { kind, params } => {
            let kind = registry
                .get(&kind)
                .ok_or_else(|| anyhow::anyhow!("unknown error kind: {kind}"))?;

            let error = kind.with(params.into_iter().collect::<ErrorParams>());
            print!("{}", render::show(&error));
        }
    }

    Ok(())
}

/// Install a stderr `tracing` subscriber filtered by `log_filter`
fn init_tracing(log_filter: &str) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_new(log_filter).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
