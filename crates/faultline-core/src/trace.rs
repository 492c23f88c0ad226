use std::backtrace::{Backtrace, BacktraceStatus};
use std::fmt;

/// Symbol prefixes of frames that belong to error construction itself
const INTERNAL_FRAMES: &[&str] = &[
    "std::backtrace",
    "faultline_core::trace::OriginTrace::",
    "faultline_core::trace::capture_backtrace",
    "faultline_core::error::KindError::",
    "faultline_core::kind::ErrorKind::",
    "faultline_core::builtin::FixedKind::",
    "faultline_core::builtin::ServerError::",
];

/// A single call-stack frame outside the construction machinery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Demangled symbol name
    pub symbol: String,
    /// Source location (`file:line:column`), when debug info is available
    pub location: Option<String>,
}

/// Call stack captured where an error was constructed
///
/// The head is always `"<name>: <message>"`. Frames are only present when
/// backtraces are enabled through `RUST_BACKTRACE` / `RUST_LIB_BACKTRACE`.
#[derive(Debug)]
pub struct OriginTrace {
    head: String,
    backtrace: Backtrace,
}

impl OriginTrace {
    pub(crate) fn capture(head: String) -> Self {
        Self {
            head,
            backtrace: capture_backtrace(),
        }
    }

    /// First line of the trace
    pub fn head(&self) -> &str {
        &self.head
    }

    /// Whether frames were actually captured
    pub fn status(&self) -> BacktraceStatus {
        self.backtrace.status()
    }

    /// Captured frames, innermost first, with construction frames removed
    pub fn frames(&self) -> Vec<Frame> {
        if self.backtrace.status() != BacktraceStatus::Captured {
            return Vec::new();
        }

        parse_frames(&self.backtrace.to_string())
            .into_iter()
            .filter(|frame| !is_internal(&frame.symbol))
            .collect()
    }
}

impl fmt::Display for OriginTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.head)?;

        for frame in self.frames() {
            match &frame.location {
                Some(location) => write!(f, "\n    at {} ({location})", frame.symbol)?,
                None => write!(f, "\n    at {}", frame.symbol)?,
            }
        }

        Ok(())
    }
}

#[cfg(not(test))]
fn capture_backtrace() -> Backtrace {
    Backtrace::capture()
}

// Unit tests inspect frames regardless of `RUST_BACKTRACE`
#[cfg(test)]
fn capture_backtrace() -> Backtrace {
    Backtrace::force_capture()
}

fn is_internal(symbol: &str) -> bool {
    let symbol = symbol.trim_start_matches('<');
    INTERNAL_FRAMES.iter().any(|prefix| symbol.starts_with(prefix))
}

/// Split a rendered backtrace into frames
///
/// Frame lines look like `  12: some::symbol`, optionally followed by
/// `at path:line:col` lines.
fn parse_frames(rendered: &str) -> Vec<Frame> {
    let mut frames: Vec<Frame> = Vec::new();

    for line in rendered.lines() {
        let trimmed = line.trim_start();

        if let Some((index, symbol)) = trimmed.split_once(": ")
            && !index.is_empty()
            && index.chars().all(|c| c.is_ascii_digit())
        {
            frames.push(Frame {
                symbol: symbol.trim().to_owned(),
                location: None,
            });
        } else if let Some(location) = trimmed.strip_prefix("at ")
            && let Some(frame) = frames.last_mut()
            && frame.location.is_none()
        {
            frame.location = Some(location.trim().to_owned());
        }
    }

    frames
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;
    use crate::{ErrorParams, FixedKind, KindDefinition, KindError, Registry, ServerError, UrlNotFoundError};

    /// First remaining frame must be the calling test, never faultline internals
    fn assert_anchored_at(error: &KindError, caller: &str) {
        if error.trace().status() != BacktraceStatus::Captured {
            return;
        }

        let frames = error.trace().frames();
        let first = frames.first().map(|frame| frame.symbol.as_str()).unwrap_or_default();

        assert!(first.contains(caller), "first frame should be {caller}, got {first}");
        assert!(
            first.starts_with("faultline_core::trace::tests::"),
            "first frame leaked construction machinery: {first}"
        );
    }

    #[test]
    fn parses_rendered_frames() {
        let rendered = indoc! {"
               0: std::backtrace_rs::backtrace::libunwind::trace
                         at /rustc/library/std/src/../../backtrace/src/backtrace/libunwind.rs:116:5
               1: std::backtrace::Backtrace::create
               2: faultline_core::error::KindError::new
                         at ./src/error.rs:40:21
               3: app::handler
                         at ./src/main.rs:10:5
        "};

        let frames = parse_frames(rendered);
        assert_eq!(frames.len(), 4);
        assert_eq!(frames[1].symbol, "std::backtrace::Backtrace::create");
        assert_eq!(frames[1].location, None);
        assert_eq!(frames[3].symbol, "app::handler");
        assert_eq!(frames[3].location.as_deref(), Some("./src/main.rs:10:5"));
    }

    #[test]
    fn construction_frames_are_internal() {
        assert!(is_internal("std::backtrace_rs::backtrace::trace"));
        assert!(is_internal("faultline_core::kind::ErrorKind::with"));
        assert!(is_internal("<faultline_core::builtin::FixedKind::with"));
        assert!(!is_internal("faultline_core::trace::tests::something"));
        assert!(!is_internal("app::handler"));
    }

    #[test]
    fn display_starts_with_head() {
        let trace = OriginTrace::capture("NotFoundError: Entity is not found".to_owned());
        assert_eq!(trace.head(), "NotFoundError: Entity is not found");
        assert!(trace.to_string().starts_with("NotFoundError: Entity is not found"));
    }

    #[test]
    fn forced_capture_skips_machinery() {
        let trace = OriginTrace {
            head: "X: y".to_owned(),
            backtrace: Backtrace::force_capture(),
        };

        if trace.status() != BacktraceStatus::Captured {
            return;
        }

        let frames = trace.frames();
        assert!(frames.iter().all(|frame| !frame.symbol.starts_with("std::backtrace")));
    }

    #[test]
    fn trace_starts_at_kind_construction() {
        let error = KindError::new(UrlNotFoundError::kind(), ErrorParams::new());
        assert_anchored_at(&error, "trace_starts_at_kind_construction");

        let error = UrlNotFoundError::kind().with(ErrorParams::new().attribute("url", "/a"));
        assert_anchored_at(&error, "trace_starts_at_kind_construction");
    }

    #[test]
    fn trace_starts_at_fixed_kind_construction() {
        let error = UrlNotFoundError::with(ErrorParams::new().attribute("url", "/a"));
        assert_anchored_at(&error, "trace_starts_at_fixed_kind_construction");

        let error = ServerError::from_message("boom");
        assert_anchored_at(&error, "trace_starts_at_fixed_kind_construction");
        assert!(error.trace().to_string().starts_with("ServerError: boom\n    at "));
    }

    #[test]
    fn trace_starts_at_defined_kind_construction() {
        let mut registry = Registry::new();
        registry.define(KindDefinition::new("DefinedError").message("defined"));

        let error = registry["DefinedError"].new_error();
        assert_anchored_at(&error, "trace_starts_at_defined_kind_construction");
        assert_eq!(error.trace().head(), "DefinedError: defined");
    }
}
