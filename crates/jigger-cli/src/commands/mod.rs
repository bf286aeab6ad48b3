//! Command implementations.

pub mod convert;
pub mod list;
pub mod search;
pub mod show;
