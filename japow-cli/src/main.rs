//! Entry point for the `japow` command-line interface.
#![forbid(unsafe_code)]

use japow_cli::CliError;

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr"
)]
fn main() {
    match japow_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("japow: {err}");
            std::process::exit(1);
        }
    }
}
