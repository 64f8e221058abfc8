use crate::error::{Error, Result};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug, PartialEq, Eq)]
#[command(
    name = "citemap",
    about = "Render a world map of citation counts per country",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Args {
    /// Text file of `Country,Count` lines
    pub input: PathBuf,
    /// Output document (.svg)
    pub output: PathBuf,
}

impl Args {
    /// Exactly two arguments after the program name, taken verbatim.
    /// Any other count is a usage error.
    pub fn try_from_iter<I, T>(argv: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
        let program = argv
            .first()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_else(|| "citemap".to_string());

        if argv.len() != 3 {
            return Err(Error::Usage(usage(&program)));
        }

        // Everything after the escape is positional, including `-x` and `--`
        argv.insert(1, OsString::from("--"));
        Args::try_parse_from(argv).map_err(|_| Error::Usage(usage(&program)))
    }
}

pub fn usage(program: &str) -> String {
    format!("Usage: {} txtinputfile svgoutputfile", program)
}
