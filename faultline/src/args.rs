use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::Value;

/// Faultline error kind inspector
#[derive(Debug, Parser)]
#[command(name = "faultline", about = "Inspect built-in and catalog-defined error kinds")]
pub struct Args {
    /// Catalog of additional kinds to install on top of the built-ins
    #[arg(short, long, env = "FAULTLINE_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Log filter directive
    #[arg(long, default_value = "info", env = "FAULTLINE_LOG")]
    pub log_filter: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List registered kinds with their parent and default status
    List,
    /// Construct an instance of a kind and print its fields
    Show {
        /// Kind name
        kind: String,
        /// Construction parameter (`key=value`, value parsed as JSON when possible)
        #[arg(short, long = "param", value_parser = parse_param)]
        params: Vec<(String, Value)>,
    },
}

fn parse_param(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got `{raw}`"))?;

    if key.is_empty() {
        return Err(format!("missing key in `{raw}`"));
    }

    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_owned()));
    Ok((key.to_owned(), value))
}
