//! API Module - Presentation boundary
//!
//! Structure:
//! - commands.rs: input validation, classification call, verdict messages
//! - prompt.rs: interactive terminal session built on the commands

pub mod commands;
pub mod prompt;

pub use commands::{check_input, CheckOutcome, Tone, Verdict, EMPTY_INPUT_WARNING};
pub use prompt::{render, OutputFormat, Session};
