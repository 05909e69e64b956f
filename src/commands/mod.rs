//! CLI commands for hoppath

pub mod check;
pub mod dispatch;
pub mod path;
pub mod source;
