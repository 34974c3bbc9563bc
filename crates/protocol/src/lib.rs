//! Wire types for the WebDriver command protocol.
//!
//! This crate contains the serde-serializable types exchanged with a remote
//! WebDriver endpoint. These types represent the "protocol layer" - the shapes
//! of data as they appear on the wire.
//!
//! # Design Philosophy
//!
//! Types in this crate are:
//! - **Pure data**: No behavior beyond serialization/deserialization
//! - **1:1 with protocol**: Match the W3C WebDriver and vendor endpoint shapes
//! - **Stable**: Changes only when the wire protocol changes
//!
//! Command execution and capability augmentation are built on top of these
//! types in `wd-runtime` and `wd-rs`.

pub mod capabilities;
pub mod command;
pub mod types;

pub use capabilities::*;
pub use command::*;
pub use types::*;
