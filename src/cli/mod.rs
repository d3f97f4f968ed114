//! Command-line interface module
//!
//! Provides argument parsing and the interactive session loop.

pub mod args;
pub mod session;

pub use args::{parse_args, Args};
pub use session::{run_session, Session, SessionState};
