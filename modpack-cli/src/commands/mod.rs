//! Subcommand handlers.
//!
//! Each handler prints through [`Output`](crate::output::Output) and returns
//! `Ok(true)` on success or `Ok(false)` when the command should exit with a
//! failure status.

pub mod check;
pub mod common;
pub mod convert;
pub mod init;
pub mod plan;
pub mod resolve;
pub mod validate;
