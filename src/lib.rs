//! # Minitran
//!
//! A tiny line-oriented language with 26 integer variables,
//! addition, and a `WRITE` statement.
//!
//! ```
//! use minitran::lang::Ident;
//! use minitran::mach::{Event, Runtime};
//!
//! let mut runtime = Runtime::default();
//! runtime.enter("A = 5\nB = A + 10\nWRITE B\n").unwrap();
//! assert_eq!(runtime.execute(100), Event::Print("15\n".to_string()));
//! assert_eq!(runtime.var(Ident::B), 15);
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

pub mod lang;
pub mod mach;
pub mod term;
