//! Scripted table interactions.
//!
//! One step per line: `sort <column>`, `check <row>`, `uncheck <row>`,
//! `all` or `none`. Blank lines and lines starting with `#` are skipped.

use gridkit::table::TableEvent;
use thiserror::Error;

pub const DEFAULT_SCRIPT: &str = "\
# sort by name, pick two rows, then flip the sort
sort name
check 0
check 3
sort name
sort score
all
uncheck 1
sort score
sort score
none
";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: unknown step '{step}'")]
    UnknownStep { line: usize, step: String },
    #[error("line {line}: '{step}' needs an argument")]
    MissingArgument { line: usize, step: String },
    #[error("line {line}: '{value}' is not a row number")]
    BadRow { line: usize, value: String },
}

/// Parse a script into events, keeping the source line for display.
pub fn parse(script: &str) -> Result<Vec<(String, TableEvent)>, ScriptError> {
    let mut steps = Vec::new();

    for (i, raw) in script.lines().enumerate() {
        let line = i + 1;
        let text = raw.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }

        let mut parts = text.split_whitespace();
        let step = parts.next().unwrap_or_default();
        let arg = parts.next();

        let event = match step {
            "sort" => TableEvent::HeaderActivated(require(arg, line, step)?.to_string()),
            "check" | "uncheck" => {
                let value = require(arg, line, step)?;
                let index = value.parse().map_err(|_| ScriptError::BadRow {
                    line,
                    value: value.to_string(),
                })?;
                TableEvent::RowToggled {
                    index,
                    checked: step == "check",
                }
            }
            "all" => TableEvent::AllToggled(true),
            "none" => TableEvent::AllToggled(false),
            _ => {
                return Err(ScriptError::UnknownStep {
                    line,
                    step: step.to_string(),
                });
            }
        };
        steps.push((text.to_string(), event));
    }

    Ok(steps)
}

fn require<'a>(arg: Option<&'a str>, line: usize, step: &str) -> Result<&'a str, ScriptError> {
    arg.ok_or_else(|| ScriptError::MissingArgument {
        line,
        step: step.to_string(),
    })
}
