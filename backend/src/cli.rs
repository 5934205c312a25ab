//! Minimal CLI parsing for one-off commands.

use std::path::PathBuf;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliOptions {
    /// Print the schema SDL and exit; `Some(None)` prints to stdout
    pub print_schema: Option<Option<PathBuf>>,
    /// Seed demo data before serving
    pub seed: bool,
}

impl CliOptions {
    pub fn from_args() -> Self {
        Self::parse(std::env::args().skip(1))
    }

    pub fn parse(args: impl IntoIterator<Item = String>) -> Self {
        let mut options = CliOptions::default();
        let mut args = args.into_iter().peekable();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => options.seed = true,
                "--print-schema" => {
                    let path = args.next_if(|next| !next.starts_with("--"));
                    options.print_schema = Some(path.map(PathBuf::from));
                }
                _ if arg.starts_with("--print-schema=") => {
                    if let Some(value) = arg.split_once('=').map(|(_, v)| v) {
                        options.print_schema = Some(Some(PathBuf::from(value)));
                    }
                }
                _ => {}
            }
        }
        options
    }
}
