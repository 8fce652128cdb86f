/*!
## Rust Machine Module

This Rust module holds the stored program and variable memory,
and executes statements against them.

*/

pub type Address = usize;

mod eval;
mod limits;
pub mod listing;
mod number;
mod runtime;
mod stack;
mod var;

#[cfg(test)]
mod tests;

pub use eval::Eval;
pub use limits::Limits;
pub use listing::load_file;
pub use listing::save_file;
pub use listing::Listing;
pub use number::format_number;
pub use runtime::Event;
pub use runtime::Halt;
pub use runtime::Runtime;
pub use runtime::Transcript;
pub use stack::Stack;
pub use var::Var;
