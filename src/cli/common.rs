//! Shared CLI plumbing: error type, exit codes and session-building options.

use clap::Args;
use serde::Serialize;
use std::fmt;

use crate::models::{find_preset, ColorKey, PRESETS};
use crate::session::DesignSession;

/// Process exit codes used by every subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Bad input: unknown key, preset, malformed option
    Validation = 1,
    /// Filesystem or serialization failure
    Io = 2,
    /// A message could not be handed off
    Dispatch = 3,
}

impl ExitCode {
    /// Numeric process exit status.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }
}

/// Error returned by CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code the process should terminate with
    pub code: ExitCode,
    /// Human-readable message printed to stderr
    pub message: String,
}

impl CliError {
    /// Invalid user input.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::Validation,
            message: message.into(),
        }
    }

    /// I/O or serialization failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::Io,
            message: message.into(),
        }
    }

    /// Message hand-off failure.
    pub fn dispatch(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::Dispatch,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result alias for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Prints `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize output to JSON: {}", e)))?;
    println!("{}", json);
    Ok(())
}

/// Options describing the session a headless command works on.
///
/// Applied in order: preset, each `--set`, then design.
#[derive(Args, Debug, Clone, Default)]
pub struct SessionArgs {
    /// Design identifier (sunflowers, roses, abstract, geometric)
    #[arg(long, value_name = "ID")]
    pub design: Option<String>,

    /// Preset name to start from (case-insensitive)
    #[arg(long, value_name = "NAME")]
    pub preset: Option<String>,

    /// Override one color, e.g. `--set sun=#FF0000` (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub colors: Vec<String>,
}

impl SessionArgs {
    /// Builds the session these options describe.
    pub fn build_session(&self) -> CliResult<DesignSession> {
        let mut session = DesignSession::new();

        if let Some(name) = &self.preset {
            let preset = find_preset(name).ok_or_else(|| {
                let names: Vec<&str> = PRESETS.iter().map(|p| p.name).collect();
                CliError::validation(format!(
                    "Unknown preset: '{}'. Available presets: {}",
                    name,
                    names.join(", ")
                ))
            })?;
            session.apply_preset(preset);
        }

        for assignment in &self.colors {
            let (key, value) = parse_assignment(assignment)?;
            session.set_color(key, value);
        }

        if let Some(design) = &self.design {
            session.select_design(design.trim());
        }

        Ok(session)
    }
}

/// Parses `key=value`. The key must name a palette slot; the value is kept verbatim.
pub fn parse_assignment(assignment: &str) -> CliResult<(ColorKey, String)> {
    let (key, value) = assignment.split_once('=').ok_or_else(|| {
        CliError::validation(format!(
            "Invalid color assignment '{}': expected KEY=VALUE",
            assignment
        ))
    })?;
    let key = key
        .trim()
        .parse::<ColorKey>()
        .map_err(|e| CliError::validation(e.to_string()))?;
    Ok((key, value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_assignment() {
        let (key, value) = parse_assignment("sunflowerCenter=#000000").unwrap();
        assert_eq!(key, ColorKey::SunflowerCenter);
        assert_eq!(value, "#000000");
    }

    #[test]
    fn test_parse_assignment_keeps_value_verbatim() {
        let (_, value) = parse_assignment("fringe=not a color").unwrap();
        assert_eq!(value, "not a color");
    }

    #[test]
    fn test_parse_assignment_errors() {
        assert_eq!(
            parse_assignment("sun").unwrap_err().code,
            ExitCode::Validation
        );
        assert_eq!(
            parse_assignment("moon=#FFFFFF").unwrap_err().code,
            ExitCode::Validation
        );
    }

    #[test]
    fn test_build_session_order() {
        let args = SessionArgs {
            design: Some("geometric".to_string()),
            preset: Some("bosque sereno".to_string()),
            colors: vec!["sun=#123456".to_string()],
        };
        let session = args.build_session().unwrap();
        assert_eq!(session.selected_design(), "geometric");
        // Preset applied first, then the override
        assert_eq!(session.colors().get(ColorKey::Sun), "#123456");
        assert_eq!(session.colors().get(ColorKey::Leaves), "#2E7D32");
    }

    #[test]
    fn test_build_session_unknown_preset() {
        let args = SessionArgs {
            preset: Some("Invierno".to_string()),
            ..SessionArgs::default()
        };
        let err = args.build_session().unwrap_err();
        assert_eq!(err.code, ExitCode::Validation);
        assert!(err.message.contains("Atardecer Cálido"));
    }

    #[test]
    fn test_build_session_defaults() {
        let session = SessionArgs::default().build_session().unwrap();
        assert_eq!(session.selected_design(), "sunflowers");
        assert_eq!(session.colors(), &crate::models::ColorMapping::default());
    }
}
