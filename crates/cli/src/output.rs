//! Rendering command results to stdout.

use clap::ValueEnum;
use serde::Serialize;

use crate::commands::CommandError;

/// Output format for structured results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Json,
    Yaml,
}

/// Serialize `value` in `format`.
pub fn render<T: Serialize>(value: &T, format: Format) -> Result<String, CommandError> {
    match format {
        Format::Json => Ok(serde_json::to_string_pretty(value)?),
        Format::Yaml => Ok(serde_yaml::to_string(value)?),
    }
}

/// Print `value` in `format`.
pub fn emit<T: Serialize>(value: &T, format: Format) -> Result<(), CommandError> {
    let text = render(value, format)?;
    print_text(text.trim_end());
    Ok(())
}

#[allow(clippy::print_stdout)]
pub fn print_text(text: &str) {
    println!("{text}");
}
