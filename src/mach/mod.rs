/*!
## Rust Machine Module

This Rust module holds the values, the arithmetic on them and the
runtime that executes the lesson.

*/

mod operation;
mod program;
mod runtime;
mod val;
mod var;

pub use operation::Operation;
pub use program::Expression;
pub use program::Program;
pub use program::Statement;
pub use runtime::Event;
pub use runtime::Runtime;
pub use val::Val;
pub use var::Var;
