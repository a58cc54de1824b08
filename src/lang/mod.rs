/*!
# Rust Language Module

This Rust module holds what the lesson shares with any host: the error
type and the `error!` macro used to build it.

*/

#[macro_use]
mod error;

pub use error::Error;
pub use error::ErrorCode;
