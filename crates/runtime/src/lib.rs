//! WebDriver runtime - command table, HTTP execution, and session channels.
//!
//! This crate provides the low-level infrastructure for talking to a remote
//! WebDriver endpoint:
//!
//! - **Command table**: Named commands with method and path template
//! - **HTTP executor**: Request construction and W3C envelope decoding
//! - **Channel**: Session-bound command execution
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │    wd-rs    │  Capability providers (add-ons, ...)
//! └──────┬──────┘
//!        │ closes over ExecuteMethod
//! ┌──────▼──────┐
//! │  wd-runtime │  This crate
//! │  ┌────────┐ │
//! │  │Channel │ │  Session binding
//! │  └────────┘ │
//! │  ┌────────┐ │
//! │  │  HTTP  │ │  Command table + request/response
//! │  └────────┘ │
//! └─────────────┘
//! ```

pub mod channel;
pub mod command_table;
pub mod dispatcher;
pub mod error;
pub mod http;

// Re-export key types at crate root
pub use channel::Channel;
pub use command_table::{CommandTable, base_commands};
pub use dispatcher::{AsyncValueResult, CommandDispatcher, ExecuteMethod, decode_result};
pub use error::{Error, Result};
pub use http::{HttpCommandExecutor, HttpCommandExecutorBuilder};
