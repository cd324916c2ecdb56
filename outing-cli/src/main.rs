//! Entry point for the `outing` command-line interface.
#![forbid(unsafe_code)]

#[expect(
    clippy::print_stderr,
    reason = "the binary entry point reports fatal errors on stderr"
)]
fn main() {
    if let Err(err) = outing_cli::run() {
        eprintln!("outing: {err}");
        std::process::exit(1);
    }
}
