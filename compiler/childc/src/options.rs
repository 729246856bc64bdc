//! Command-line options shared by `run`, `check` and `demo`.
//!
//! Options may appear anywhere on the command line; whatever is not an
//! option is returned in order for command dispatch.

use child_diagnostic::emitter::ColorMode;
use child_eval::DEFAULT_MAX_CALL_DEPTH;
use thiserror::Error;

/// How diagnostics are written.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub color: ColorMode,
    pub format: OutputFormat,
    /// Active procedure calls allowed; `None` for no limit.
    pub max_depth: Option<usize>,
    /// Force interpreter tracing on stderr.
    pub trace: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            color: ColorMode::Auto,
            format: OutputFormat::Text,
            max_depth: Some(DEFAULT_MAX_CALL_DEPTH),
            trace: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum OptionError {
    #[error("invalid value '{value}' for --color (expected auto, always or never)")]
    Color { value: String },
    #[error("invalid value '{value}' for --format (expected text or json)")]
    Format { value: String },
    #[error("invalid value '{value}' for --max-depth (expected a whole number, 0 for no limit)")]
    MaxDepth { value: String },
    #[error("unknown option '{option}'")]
    Unknown { option: String },
}

/// Flags that name a command rather than set an option.
const COMMAND_FLAGS: [&str; 5] = ["--help", "--version", "--explain", "-h", "-V"];

/// Split `args` (without the program name) into options and the rest.
pub fn parse_options(args: &[String]) -> Result<(Options, Vec<String>), OptionError> {
    let mut options = Options::default();
    let mut rest = Vec::new();

    for arg in args {
        if let Some(value) = arg.strip_prefix("--color=") {
            options.color = parse_color(value)?;
        } else if let Some(value) = arg.strip_prefix("--format=") {
            options.format = match value {
                "text" => OutputFormat::Text,
                "json" => OutputFormat::Json,
                _ => {
                    return Err(OptionError::Format {
                        value: value.to_string(),
                    })
                }
            };
        } else if let Some(value) = arg.strip_prefix("--max-depth=") {
            let depth: usize = value.parse().map_err(|_| OptionError::MaxDepth {
                value: value.to_string(),
            })?;
            options.max_depth = (depth > 0).then_some(depth);
        } else if arg == "--trace" {
            options.trace = true;
        } else if arg.starts_with("--") && !COMMAND_FLAGS.contains(&arg.as_str()) {
            return Err(OptionError::Unknown {
                option: arg.clone(),
            });
        } else {
            rest.push(arg.clone());
        }
    }

    Ok((options, rest))
}

fn parse_color(value: &str) -> Result<ColorMode, OptionError> {
    match value {
        "auto" => Ok(ColorMode::Auto),
        "always" => Ok(ColorMode::Always),
        "never" => Ok(ColorMode::Never),
        _ => Err(OptionError::Color {
            value: value.to_string(),
        }),
    }
}
