//! Decoding shell input into commands.
//!
//! The first whitespace-separated token selects the command by exact match;
//! the second, when the command takes one, is its argument. Further tokens
//! are ignored.

use std::str::FromStr;

use crate::output::OutputMethod;

pub const CMD_CHARS: &str = "chars";
pub const CMD_ADD: &str = "add";
pub const CMD_REMOVE: &str = "remove";
pub const CMD_RES: &str = "res";
pub const CMD_REVERSE: &str = "reverse";
pub const CMD_OUTPUT: &str = "output";
pub const CMD_ASCII_ART: &str = "asciiArt";
pub const CMD_EXIT: &str = "exit";

const ARG_ALL: &str = "all";
const ARG_SPACE: &str = "space";
const ARG_UP: &str = "up";
const ARG_DOWN: &str = "down";

/// First and last printable ASCII characters, the `all` range.
pub const PRINTABLE_ASCII: std::ops::RangeInclusive<char> = ' '..='~';

/// Errors produced while decoding a command line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
    #[error("'{command}' needs an argument")]
    MissingArgument { command: &'static str },
    #[error("'{command}' got malformed argument '{argument}'")]
    MalformedArgument {
        command: &'static str,
        argument: String,
    },
}

impl CommandError {
    /// Name of the command the error belongs to, if it was recognised.
    pub fn command(&self) -> Option<&'static str> {
        match self {
            CommandError::UnknownCommand(_) => None,
            CommandError::MissingArgument { command }
            | CommandError::MalformedArgument { command, .. } => Some(*command),
        }
    }
}

/// Direction of a `res` change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionChange {
    /// Double the tiles per row
    Up,
    /// Halve the tiles per row
    Down,
}

/// A decoded shell command with its validated argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List the charset
    Chars,
    /// Register characters
    Add(Vec<char>),
    /// Unregister characters
    Remove(Vec<char>),
    /// Show (`None`) or change the resolution
    Res(Option<ResolutionChange>),
    /// Toggle reverse mode
    Reverse,
    /// Select the output writer
    Output(OutputMethod),
    /// Render with the current settings
    AsciiArt,
    /// Leave the shell
    Exit,
}

impl Command {
    /// Decode one input line. Blank lines decode to `None`.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let mut parts = line.split_whitespace();
        let Some(name) = parts.next() else {
            return Ok(None);
        };
        let arg = parts.next();

        let command = match name {
            CMD_CHARS => Command::Chars,
            CMD_ADD => Command::Add(char_spec_arg(CMD_ADD, arg)?),
            CMD_REMOVE => Command::Remove(char_spec_arg(CMD_REMOVE, arg)?),
            CMD_RES => Command::Res(match arg {
                None => None,
                Some(ARG_UP) => Some(ResolutionChange::Up),
                Some(ARG_DOWN) => Some(ResolutionChange::Down),
                Some(other) => {
                    return Err(CommandError::MalformedArgument {
                        command: CMD_RES,
                        argument: other.to_string(),
                    })
                }
            }),
            CMD_REVERSE => Command::Reverse,
            CMD_OUTPUT => {
                let arg = arg.ok_or(CommandError::MissingArgument {
                    command: CMD_OUTPUT,
                })?;
                let method = OutputMethod::from_str(arg).map_err(|_| {
                    CommandError::MalformedArgument {
                        command: CMD_OUTPUT,
                        argument: arg.to_string(),
                    }
                })?;
                Command::Output(method)
            }
            CMD_ASCII_ART => Command::AsciiArt,
            CMD_EXIT => Command::Exit,
            other => return Err(CommandError::UnknownCommand(other.to_string())),
        };
        Ok(Some(command))
    }
}

fn char_spec_arg(command: &'static str, arg: Option<&str>) -> Result<Vec<char>, CommandError> {
    let arg = arg.ok_or(CommandError::MissingArgument { command })?;
    parse_char_spec(arg).ok_or_else(|| CommandError::MalformedArgument {
        command,
        argument: arg.to_string(),
    })
}

/// Expand a character specification.
///
/// Accepted forms:
/// - `all` - every printable ASCII character
/// - `space` - the space character
/// - `a-z` - an inclusive range, in either direction
/// - `x` - a single character
///
/// Returns the characters in ascending order, or `None` if `spec` matches
/// none of the forms.
pub fn parse_char_spec(spec: &str) -> Option<Vec<char>> {
    match spec {
        ARG_ALL => return Some(PRINTABLE_ASCII.collect()),
        ARG_SPACE => return Some(vec![' ']),
        _ => {}
    }

    let chars: Vec<char> = spec.chars().collect();
    match chars.as_slice() {
        [c] => Some(vec![*c]),
        [start, '-', end] => {
            let (lo, hi) = if start <= end {
                (*start, *end)
            } else {
                (*end, *start)
            };
            Some((lo..=hi).collect())
        }
        _ => None,
    }
}
