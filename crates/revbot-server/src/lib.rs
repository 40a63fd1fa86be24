//! Server module.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
mod handlers;
pub mod server;

pub use errors::{Result, ServerError};
