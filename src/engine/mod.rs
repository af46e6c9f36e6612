//! Question lookup, answer validation and scoring.
//!
//! Shared by the console game and the HTTP service.

pub mod answer;
pub mod lookup;
pub mod score;

pub use answer::{Answer, AnswerError, Verdict, check_index, is_correct, normalize, verify};
pub use lookup::{available_ids, find_by_id};
pub use score::{Score, Tier};
