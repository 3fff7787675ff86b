//! Minimal CLI parsing for one-shot commands.

use std::env;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliOptions {
    /// Print the GraphQL SDL and exit instead of serving
    pub print_schema: bool,
}

impl CliOptions {
    pub fn from_args() -> Self {
        Self::parse(env::args().skip(1))
    }

    pub fn parse(args: impl IntoIterator<Item = String>) -> Self {
        let mut options = CliOptions::default();
        for arg in args {
            match arg.as_str() {
                "--print-schema" | "--sdl" => options.print_schema = true,
                _ => tracing::debug!(arg = %arg, "Ignoring unknown argument"),
            }
        }
        options
    }
}
