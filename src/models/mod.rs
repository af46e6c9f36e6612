mod question;

pub use question::{Question, QuestionBank, ValidationError};
