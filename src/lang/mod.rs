/*!
# Rust Language Module

Turns one line of BASIC text into tokens and then into a statement tree.
Syntax errors carry the line number and the columns they were found at.

*/

pub type LineNumber = u32;
pub type Column = std::ops::Range<usize>;

#[macro_use]
mod error;
mod ident;
mod lex;
mod line;
mod parse;

pub use error::Error;
pub use error::ErrorCode;
pub use error::ErrorKind;
pub use ident::Ident;
pub use ident::Slot;
pub use lex::lex;
pub use line::Line;
pub use parse::parse;

pub mod ast;
pub mod token;
