//! Slack channel receiver for slacknote.
//!
//! Receives Slack Events API webhooks and hands user messages to the
//! analysis pipeline. Every request is acknowledged with `{"status": "ok"}`
//! (except the URL-verification handshake) so Slack never retries a delivery.

use std::sync::Arc;

use axum::{body::Bytes, extract::State, routing::post, Json, Router};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use slacknote_core::{Pipeline, PipelineOutcome};

use crate::ChannelAdapter;

/// Default mount point of the Events API webhook.
pub const DEFAULT_WEBHOOK_PATH: &str = "/slack/events";

// ---------------------------------------------------------------------------
// Axum state
// ---------------------------------------------------------------------------

#[derive(Clone)]
struct AppState {
    pipeline: Arc<Pipeline>,
    /// Serializes pipeline runs so messages are handled one at a time.
    in_flight: Arc<Mutex<()>>,
}

// ---------------------------------------------------------------------------
// Slack wire types
// ---------------------------------------------------------------------------

/// The `event` object of an `event_callback` envelope.
#[derive(Deserialize, Debug)]
struct SlackEvent {
    #[serde(rename = "type")]
    event_type: Option<String>,
    text: Option<String>,
    /// If set this is a bot message, ignore it.
    bot_id: Option<String>,
    user: Option<String>,
    channel: Option<String>,
}

impl SlackEvent {
    fn is_user_message(&self) -> bool {
        let from_bot = self.bot_id.as_deref().is_some_and(|id| !id.is_empty());
        self.event_type.as_deref() == Some("message") && !from_bot
    }
}

// ---------------------------------------------------------------------------
// Receiver
// ---------------------------------------------------------------------------

pub struct SlackReceiver {
    pipeline: Arc<Pipeline>,
    webhook_path: String,
}

impl SlackReceiver {
    pub fn new(pipeline: Arc<Pipeline>, webhook_path: impl Into<String>) -> Self {
        Self {
            pipeline,
            webhook_path: webhook_path.into(),
        }
    }
}

impl ChannelAdapter for SlackReceiver {
    fn name(&self) -> &str {
        "slack"
    }

    fn build_router(&self) -> Router {
        let state = AppState {
            pipeline: Arc::clone(&self.pipeline),
            in_flight: Arc::new(Mutex::new(())),
        };
        Router::new()
            .route(&self.webhook_path, post(handle_slack_event))
            .with_state(state)
    }
}

// ---------------------------------------------------------------------------
// Webhook handler
// ---------------------------------------------------------------------------

fn ack() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn handle_slack_event(State(state): State<AppState>, body: Bytes) -> Json<Value> {
    // 1. Parse JSON; anything that is not an object is acknowledged and dropped
    let mut envelope: Map<String, Value> = match serde_json::from_slice(&body) {
        Ok(envelope) => envelope,
        Err(err) => {
            warn!(error = %err, "[Slack] Ignoring body that is not a JSON object");
            return ack();
        }
    };

    // 2. URL-verification handshake
    if let Some(challenge) = envelope.get("challenge") {
        info!("[Slack] Answering URL verification challenge");
        return Json(json!({ "challenge": challenge }));
    }

    // 3. Event callbacks
    let Some(raw_event) = envelope.remove("event") else {
        debug!("[Slack] Envelope has no event");
        return ack();
    };

    let event: SlackEvent = match serde_json::from_value(raw_event) {
        Ok(event) => event,
        Err(err) => {
            warn!(error = %err, "[Slack] Ignoring undecodable event");
            return ack();
        }
    };

    // 4. Only real user messages, never our own bot's output
    if !event.is_user_message() {
        debug!(
            event_type = ?event.event_type,
            bot_id = ?event.bot_id,
            "[Slack] Ignoring non-user event"
        );
        return ack();
    }

    info!(
        user = event.user.as_deref().unwrap_or("unknown_user"),
        channel = event.channel.as_deref().unwrap_or("unknown"),
        "[Slack] Message received"
    );
    debug!(text = ?event.text, "[Slack] Message text");

    let _in_flight = state.in_flight.lock().await;
    match state.pipeline.process(event.text.as_deref()).await {
        PipelineOutcome::Written { record_id, .. } => {
            info!(record_id = %record_id, "[Slack] Message filed");
        }
        outcome => {
            debug!(outcome = ?outcome, "[Slack] Message not filed");
        }
    }

    ack()
}
