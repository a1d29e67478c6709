//! Interactive command shell around an [`AsciiArt`] session.

mod command;

pub use command::{
    parse_char_spec, Command, CommandError, ResolutionChange, CMD_ADD, CMD_ASCII_ART, CMD_CHARS,
    CMD_EXIT, CMD_OUTPUT, CMD_REMOVE, CMD_RES, CMD_REVERSE, PRINTABLE_ASCII,
};

use std::io::{self, BufRead, Write};

use crate::output::{AsciiOutput, ConsoleOutput, HtmlOutput, OutputMethod};
use crate::pipeline::RenderError;
use crate::session::AsciiArt;

pub const PROMPT: &str = ">>> ";

pub const MSG_CHARS_ADDED: &str = "Characters added successfully";
pub const MSG_CHARS_REMOVED: &str = "Characters removed successfully";
pub const MSG_RESOLUTION_SET: &str = "Resolution set to";
pub const MSG_ADD_FORMAT: &str = "Did not add due to incorrect format.";
pub const MSG_REMOVE_FORMAT: &str = "Did not remove due to incorrect format.";
pub const MSG_RESOLUTION_BOUNDS: &str = "Did not change resolution due to exceeding boundaries.";
pub const MSG_RESOLUTION_FORMAT: &str = "Did not change resolution due to incorrect format.";
pub const MSG_OUTPUT_FORMAT: &str = "Did not change output method due to incorrect format.";
pub const MSG_INSUFFICIENT_CHARS: &str = "Did not execute. Charset is too small.";
pub const MSG_INCORRECT_COMMAND: &str = "Did not execute due to incorrect command.";

/// What the shell does after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print a line and continue
    Message(String),
    /// Continue without printing
    Silent,
    /// Leave the loop
    Exit,
}

/// Read-eval-print loop over a line source and a writer.
pub struct Shell<R: BufRead, W: Write> {
    session: AsciiArt,
    method: OutputMethod,
    html: HtmlOutput,
    input: R,
    writer: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(
        session: AsciiArt,
        method: OutputMethod,
        html: HtmlOutput,
        input: R,
        writer: W,
    ) -> Self {
        Self {
            session,
            method,
            html,
            input,
            writer,
        }
    }

    pub fn session(&self) -> &AsciiArt {
        &self.session
    }

    pub fn output_method(&self) -> OutputMethod {
        self.method
    }

    /// Give back the writer, consuming the shell.
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Prompt, read and execute commands until `exit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        let mut line = String::new();
        loop {
            write!(self.writer, "{}", PROMPT)?;
            self.writer.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.writer)?;
                break;
            }

            match self.handle_line(&line)? {
                Reply::Message(msg) => writeln!(self.writer, "{}", msg)?,
                Reply::Silent => {}
                Reply::Exit => break,
            }
        }
        log::info!("Shell finished");
        Ok(())
    }

    /// Decode and execute a single input line.
    pub fn handle_line(&mut self, line: &str) -> io::Result<Reply> {
        match Command::parse(line) {
            Ok(Some(command)) => self.execute(command),
            Ok(None) => Ok(Reply::Silent),
            Err(err) => {
                log::debug!("Rejected {:?}: {}", line.trim(), err);
                Ok(Reply::Message(rejection_message(&err)))
            }
        }
    }

    /// Execute an already decoded command.
    pub fn execute(&mut self, command: Command) -> io::Result<Reply> {
        let reply = match command {
            Command::Chars => {
                let chars: Vec<String> = self
                    .session
                    .charset()
                    .into_iter()
                    .map(String::from)
                    .collect();
                Reply::Message(chars.join(" "))
            }
            Command::Add(chars) => {
                let added = self.session.add_chars(chars);
                log::debug!("Added {} new chars", added);
                Reply::Message(MSG_CHARS_ADDED.to_string())
            }
            Command::Remove(chars) => {
                let removed = self.session.remove_chars(chars);
                log::debug!("Removed {} chars", removed);
                Reply::Message(MSG_CHARS_REMOVED.to_string())
            }
            Command::Res(change) => self.change_resolution(change),
            Command::Reverse => {
                let reversed = self.session.toggle_reverse();
                log::debug!("Reverse mode: {}", reversed);
                Reply::Silent
            }
            Command::Output(method) => {
                self.method = method;
                log::debug!("Output method: {}", method);
                Reply::Silent
            }
            Command::AsciiArt => self.render()?,
            Command::Exit => Reply::Exit,
        };
        Ok(reply)
    }

    fn change_resolution(&mut self, change: Option<ResolutionChange>) -> Reply {
        let current = self.session.resolution();
        let target = match change {
            None => return resolution_message(current),
            Some(ResolutionChange::Up) => current.saturating_mul(2),
            Some(ResolutionChange::Down) => current / 2,
        };
        match self.session.set_resolution(target) {
            Ok(()) => resolution_message(self.session.resolution()),
            Err(err) => {
                log::debug!("{}", err);
                Reply::Message(MSG_RESOLUTION_BOUNDS.to_string())
            }
        }
    }

    fn render(&mut self) -> io::Result<Reply> {
        let grid = match self.session.render() {
            Ok(grid) => grid,
            Err(RenderError::InsufficientCharset { .. }) => {
                return Ok(Reply::Message(MSG_INSUFFICIENT_CHARS.to_string()))
            }
            Err(err) => return Ok(Reply::Message(format!("Did not execute. {}", err))),
        };

        let written = match self.method {
            OutputMethod::Console => ConsoleOutput::new(&mut self.writer).out(&grid),
            OutputMethod::Html => self.html.out(&grid),
        };
        match written {
            Ok(()) => Ok(Reply::Silent),
            Err(err) => {
                log::warn!("{}", err);
                Ok(Reply::Message(format!("Did not execute. {}", err)))
            }
        }
    }
}

fn resolution_message(resolution: usize) -> Reply {
    Reply::Message(format!("{} {}", MSG_RESOLUTION_SET, resolution))
}

/// Text printed when a line can't be decoded.
fn rejection_message(err: &CommandError) -> String {
    let msg = match err.command() {
        Some(CMD_ADD) => MSG_ADD_FORMAT,
        Some(CMD_REMOVE) => MSG_REMOVE_FORMAT,
        Some(CMD_RES) => MSG_RESOLUTION_FORMAT,
        Some(CMD_OUTPUT) => MSG_OUTPUT_FORMAT,
        Some(_) | None => MSG_INCORRECT_COMMAND,
    };
    msg.to_string()
}
