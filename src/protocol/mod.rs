//! JSON bodies exchanged with the HTTP service.

mod messages;

pub use messages::{
    Capabilities, ListResponse, QuestionResponse, VerifyRequest, VerifyResponse, capabilities,
};
