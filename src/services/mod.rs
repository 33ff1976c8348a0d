//! Business logic services for the chat gateway.

pub mod completion;

pub use completion::CompletionClient;
