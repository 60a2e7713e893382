//! # Parsnip - Parser Combinator Engine
//!
//! A small library of composable building blocks for assembling
//! recursive-descent parsers: primitive matchers (literal text, regex
//! patterns, quoted strings, numbers, end-of-input) combined through an
//! algebra of choice, repetition, optionality and sequencing. The library
//! emphasizes:
//!
//! - **Mismatch as data**: a failed match is a routine `Err` value used for
//!   backtracking, never a panic
//! - **Assemble once, run anywhere**: grammars are immutable `Send + Sync`
//!   values, safe to invoke concurrently against independent inputs
//! - **Automatic whitespace handling**: every parser skips trailing
//!   whitespace by default, so grammars stay free of lexing noise
//!
//! ```
//! use parsnip::{integer, literal, separated_list};
//!
//! let csv = separated_list(integer(), literal(","));
//! assert_eq!(csv.parse("1, 2, 3").unwrap(), vec![1, 2, 3]);
//! assert!(csv.parse("oops").is_err());
//! ```

pub mod and;
pub mod between;
pub mod chain;
pub mod cursor;
pub mod eof;
pub mod error;
pub mod literal;
pub mod many;
pub mod number;
pub mod optional;
pub mod or;
pub mod parser;
pub mod pattern;
pub mod quoted;
pub mod separated_list;
pub mod some;

pub use and::and;
pub use between::between;
pub use chain::chain;
pub use cursor::Cursor;
pub use eof::eof;
pub use error::{Mismatch, ParseError};
pub use literal::literal;
pub use many::{many, repeat};
pub use number::{float, integer};
pub use optional::optional;
pub use or::choice;
pub use parser::{MatchResult, Parser};
pub use pattern::{alpha, pattern, space, word};
pub use quoted::{double_quoted_string, quoted_string, single_quoted_string};
pub use separated_list::separated_list;
pub use some::some;
