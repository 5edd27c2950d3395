//! Slack webhook → Gemini → Notion, with both services served by wiremock.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{body_json, method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

use slacknote_analyzer::providers::GeminiProvider;
use slacknote_analyzer::{AnalyzerSettings, LlmAnalyzer};
use slacknote_channels::{ChannelAdapter, SlackReceiver, DEFAULT_WEBHOOK_PATH};
use slacknote_core::Pipeline;
use slacknote_notion::{ColumnNames, NotionClient, NotionWriter};

const ANALYSIS: &str = r##"{"category":"AI","tags":["#AI","#Ads","#Access"],"summary":"...","glossary":[{"term":"LLM","definition":"..."}]}"##;

fn gemini_reply(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "candidates": [{"content": {"role": "model", "parts": [{"text": text}]}}]
    }))
}

fn app(server: &MockServer) -> Router {
    let provider = GeminiProvider::new("gemini-key").with_base_url(server.uri());
    let analyzer = LlmAnalyzer::new(Arc::new(provider), AnalyzerSettings::default());
    let client = NotionClient::new("notion-token").with_base_url(server.uri());
    let writer = NotionWriter::new(client, "db-123", ColumnNames::default());
    let pipeline = Arc::new(Pipeline::new(Arc::new(analyzer), Arc::new(writer)));
    SlackReceiver::new(pipeline, DEFAULT_WEBHOOK_PATH).build_router()
}

async fn post(app: Router, body: Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(DEFAULT_WEBHOOK_PATH)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn message(text: &str) -> Value {
    json!({
        "type": "event_callback",
        "event": {"type": "message", "text": text, "user": "U123", "channel": "C1"}
    })
}

#[tokio::test]
async fn message_is_filed_as_one_notion_page() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path_regex(r"^/models/.+:generateContent$"))
        .respond_with(gemini_reply(&format!("```json\n{ANALYSIS}\n```")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/pages"))
        .and(body_json(json!({
            "parent": {"database_id": "db-123"},
            "properties": {
                "이름": {"title": [{"text": {"content": "..."}}]},
                "카테고리": {"select": {"name": "AI"}},
                "태그": {"multi_select": [{"name": "#AI"}, {"name": "#Ads"}, {"name": "#Access"}]},
                "용어 설명": {"rich_text": [{"text": {"content": "📌 LLM: ..."}}]}
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "page-1"})))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = post(app(&server), message("ChatGPT introduces ads")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
    // `expect(1)` on both mocks is verified when the server drops.
}

#[tokio::test]
async fn malformed_analysis_writes_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path_regex(r"^/models/.+:generateContent$"))
        .respond_with(gemini_reply("{\"category\": \"AI\", \"tags\": ["))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/pages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "page-1"})))
        .expect(0)
        .mount(&server)
        .await;

    let (status, body) = post(app(&server), message("ChatGPT introduces ads")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn notion_failure_still_acknowledges_slack() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path_regex(r"^/models/.+:generateContent$"))
        .respond_with(gemini_reply(ANALYSIS))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/pages"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "object": "error",
            "code": "validation_error",
            "message": "이름 is not a property that exists."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = post(app(&server), message("ChatGPT introduces ads")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn bot_and_non_message_events_make_no_calls() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let app = app(&server);
    let bot = json!({"event": {"type": "message", "text": "filed!", "bot_id": "B1"}});
    let reaction = json!({"event": {"type": "reaction_added", "reaction": "thumbsup"}});
    let no_event = json!({"token": "x", "type": "event_callback"});

    for body in [bot, reaction, no_event] {
        let (status, reply) = post(app.clone(), body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(reply, json!({"status": "ok"}));
    }
}
