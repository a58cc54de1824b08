//! # Variables Lesson
//!
//! A first lesson in programming: assign a few values to variables,
//! combine numbers with the arithmetic operators and print the results.
//!
//! Run the executable and it prints the following.
//! ```text
//! Rehan
//! 21
//! True
//! Sum is:  15
//! Sub is:  26
//! ```
//!
//! Division, multiplication and exponentiation are also worked out but
//! never printed. A program can still look at them.
//! ```
//! use lesson::mach::{Event, Runtime, Val};
//!
//! let mut runtime = Runtime::default();
//! while runtime.execute() != Event::Stopped {}
//! assert_eq!(runtime.var("mul"), Some(&Val::Integer(1200)));
//! ```

#[path = "doc/variables.rs"]
#[allow(non_snake_case)]
pub mod _Variables_and_Arithmetic;

pub mod lang;
pub mod mach;
pub mod term;
