mod api;
mod config;

use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info};

use slacknote_analyzer::providers::GeminiProvider;
use slacknote_analyzer::{AnalyzerSettings, LlmAnalyzer};
use slacknote_channels::{ChannelAdapter, SlackReceiver};
use slacknote_core::{Pipeline, PipelineOutcome};
use slacknote_logging::init_logger;
use slacknote_notion::{NotionClient, NotionWriter};

use config::Config;

/// Memo used by `slacknote sample` when no text is given.
const SAMPLE_MEMO: &str = "\
ChatGPT 접근성 확대와 광고 도입 배경.
AI 발전으로 누구나 개인용 슈퍼 어시스턴트를 가질 수 있는 시대에 도달.
AI 접근성의 차이에 따라 기회 확대 또는 격차 심화가 발생할 수 있음.";

#[derive(Parser)]
#[command(name = "slacknote")]
#[command(about = "slacknote: files Slack messages into Notion with an AI summary")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the Slack webhook server
    Serve {
        /// Port to bind the HTTP server to
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Analyze one memo and save it to Notion, for manual testing
    Sample {
        /// Text to analyze instead of the built-in memo
        #[arg(short, long)]
        text: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    match cli.command {
        Commands::Serve { port } => {
            init_logger(Some(config.log_dir.as_path()), &config.log_level);
            let config = Config {
                port: port.unwrap_or(config.port),
                ..config
            };
            run_server(config).await?;
        }
        Commands::Sample { text } => {
            init_logger(None, &config.log_level);
            run_sample(&config, text.as_deref().unwrap_or(SAMPLE_MEMO)).await?;
        }
    }

    Ok(())
}

/// Wire the Gemini analyzer and the Notion writer into a pipeline.
fn build_pipeline(config: &Config) -> Result<Arc<Pipeline>> {
    let provider = GeminiProvider::new(&config.gemini_api_key).with_timeout(config.http_timeout)?;
    let analyzer = LlmAnalyzer::new(
        Arc::new(provider),
        AnalyzerSettings {
            model: config.gemini_model.clone(),
            ..AnalyzerSettings::default()
        },
    );
    info!(model = %config.gemini_model, "Registered Gemini provider");

    let client = NotionClient::new(&config.notion_token).with_timeout(config.http_timeout)?;
    let writer = NotionWriter::new(client, &config.notion_database_id, config.columns.clone());
    info!(database_id = %config.notion_database_id, "Registered Notion writer");

    Ok(Arc::new(Pipeline::new(Arc::new(analyzer), Arc::new(writer))))
}

async fn run_server(config: Config) -> Result<()> {
    info!(
        port = config.port,
        bind = %config.bind_address,
        webhook = %config.slack_webhook_path,
        "Starting slacknote"
    );

    let pipeline = build_pipeline(&config)?;
    let slack = SlackReceiver::new(pipeline, &config.slack_webhook_path);
    info!(channel = slack.name(), "Registered channel receiver");

    let app = api::build_router(vec![slack.build_router()]);
    let addr = format!("{}:{}", config.bind_address, config.port);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(addr = %addr, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }
}

async fn run_sample(config: &Config, text: &str) -> Result<()> {
    info!("Analyzing sample memo");
    let pipeline = build_pipeline(config)?;
    report_sample(&pipeline, text, &mut std::io::stdout()).await
}

/// Run one memo through the pipeline and print the analysis to `out`.
///
/// The analysis is printed whenever there is one, even if saving it failed.
/// Any outcome other than a saved record is an error.
async fn report_sample(pipeline: &Pipeline, text: &str, out: &mut impl Write) -> Result<()> {
    match pipeline.process(Some(text)).await {
        PipelineOutcome::Written {
            analysis,
            record_id,
        } => {
            writeln!(out, "{}", serde_json::to_string_pretty(&analysis)?)?;
            writeln!(out, "Saved to Notion page {record_id}")?;
            Ok(())
        }
        PipelineOutcome::WriteFailed { analysis, error } => {
            writeln!(out, "{}", serde_json::to_string_pretty(&analysis)?)?;
            anyhow::bail!("{}", error)
        }
        PipelineOutcome::AnalysisFailed(e) => anyhow::bail!("analysis failed: {}", e),
        PipelineOutcome::Skipped(reason) => anyhow::bail!("nothing to analyze: {:?}", reason),
    }
}
