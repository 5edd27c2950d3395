use axum::Router;

pub mod slack;

pub use slack::{SlackReceiver, DEFAULT_WEBHOOK_PATH};

/// All inbound channels implement this trait.
pub trait ChannelAdapter: Send + Sync {
    /// Human-readable adapter name for logging.
    fn name(&self) -> &str;

    /// Build the Axum sub-router serving this channel's webhook endpoints.
    fn build_router(&self) -> Router;
}
