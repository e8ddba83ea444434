//! # Minitran
//!
//! Runs a Minitran program from a file.
//!

fn main() -> std::process::ExitCode {
    minitran::term::main()
}
