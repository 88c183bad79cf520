// Service exports
pub mod inference;

pub use inference::{InferenceClient, InferenceError, MistralClient};
