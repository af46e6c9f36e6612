//! Line-based console game.
//!
//! Reads answers from any `BufRead` and writes to any `Write`, so the binary
//! wires it to stdin/stdout and the tests feed it scripted input.

mod render;
mod session;

pub use session::{MenuChoice, Session};
