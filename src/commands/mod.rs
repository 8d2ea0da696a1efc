//! CLI commands for pathrace

pub mod context;
pub mod dispatch;
pub mod init;
pub mod race;
pub mod render;
pub mod run;
pub mod validate;
