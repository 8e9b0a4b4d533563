//! pxs - Command-line tool for shading sprite scenes and rendering them to PNG

use std::process::ExitCode;

use pxshade::cli;

fn main() -> ExitCode {
    cli::run()
}
