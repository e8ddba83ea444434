/*!
## Rust Machine Module

This Rust module loads Minitran programs and runs them.

*/

/// Most retained lines a program may have.
pub const MAX_LINES: usize = 100;
/// Longest line, in characters, not counting the terminator.
pub const MAX_LINE_LEN: usize = 255;

mod listing;
mod operation;
mod runtime;
mod var;

pub use listing::Limits;
pub use listing::Listing;
pub use operation::Operation;
pub use runtime::Event;
pub use runtime::Runtime;
pub use var::Var;

#[cfg(test)]
mod tests;
