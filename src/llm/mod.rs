mod client;
mod relay;
mod types;

pub use client::{CompletionClient, OpenRouterClient};
pub use relay::Relay;
pub use types::*;
