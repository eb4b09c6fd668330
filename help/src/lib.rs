//! Help text rendering over `optbind-core` specs.
//!
//! [`TableRenderer`] does the layout work: fixed-width two-column tables
//! with greedy word wrap. [`CommandHelp`] and [`MainHelp`] assemble full
//! pages from a [`CommandSpec`](optbind_core::CommandSpec) or
//! [`MainSpec`](optbind_core::MainSpec), resolving every title and
//! description through a [`Resources`](optbind_core::Resources)
//! implementation. Nothing here prints; pages come back as strings.

pub mod command;
pub mod main_help;
pub mod table;

pub use command::CommandHelp;
pub use main_help::MainHelp;
pub use table::{Row, TableRenderer};
