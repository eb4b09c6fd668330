//! Argument-vector parsing and dispatch over `optbind-core` specs.
//!
//! [`CommandParser`] binds one command's arguments into a [`ParseResult`];
//! [`Dispatcher`] resolves a leading command token (or main-level switch)
//! first and hands the rest to the matching parser, reporting the outcome as
//! a [`DispatchOutcome`] for the caller to act on.

pub mod dispatch;
pub mod parser;
pub mod result;

pub use dispatch::{DispatchOutcome, Dispatcher};
pub use parser::CommandParser;
pub use result::{Binding, ParseResult};
