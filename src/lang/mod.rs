/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of Minitran.
Every source line is lexed into tokens then classified into exactly
one `Statement`.

*/

#[macro_use]
mod error;
mod ident;
mod lex;
mod line;
mod parse;

pub mod ast;
pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use ident::Ident;
pub use lex::lex;
pub use line::Line;
pub use parse::parse;
pub use parse::parse_term;

/// 1-based line number in the source file, if known.
pub type LineNumber = Option<usize>;

#[cfg(test)]
mod tests;
