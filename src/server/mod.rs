//! HTTP service over the question file.
//!
//! Every request reloads the file; handlers share nothing mutable.

mod error;
mod handlers;
mod server;
mod state;

pub use error::{ApiError, ErrorKind};
pub use server::{router, run, serve};
pub use state::ServerState;
