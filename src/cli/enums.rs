//! CLI enum types.

use clap::ValueEnum;

use crate::output::OutputMethod;

/// Output writer selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputKind {
    #[default]
    Console,
    Html,
}

impl From<OutputKind> for OutputMethod {
    fn from(k: OutputKind) -> Self {
        match k {
            OutputKind::Console => OutputMethod::Console,
            OutputKind::Html => OutputMethod::Html,
        }
    }
}
