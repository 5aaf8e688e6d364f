pub mod client;
pub mod prompt;
pub mod verdict;

pub use client::{ChatMessage, InferenceClient};
pub use verdict::{UNCLASSIFIED_REPLY, normalize};
