use std::net::SocketAddr;

use anyhow::Context;
use clap::{Parser, Subcommand};
use transcript_text::StopWordLanguage;
use video_digest::{
    gemini::GeminiClient, http, tracing::init_tracing_subscriber, yt::scraper::Scraper,
    AnalyzerConfig, ColorScheme, SvgCloudRenderer, VideoAnalyzer, VideoAnalyzerBuilder,
};

#[derive(Parser)]
#[command(name = "video-digest", about = "YouTube transcript summaries and word clouds")]
struct Cli {
    /// Google Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    gemini_api_key: String,

    /// Caption languages in order of preference
    #[arg(long, env = "TRANSCRIPT_LANGUAGES", value_delimiter = ',', default_value = "pt,pt-BR")]
    languages: Vec<String>,

    /// Speaker names used to split transcripts
    #[arg(long, env = "SPEAKERS", value_delimiter = ',', default_value = "Adriana,Lodovico")]
    speakers: Vec<String>,

    /// Stop-word list: pt or en
    #[arg(long, env = "STOPWORD_LANGUAGE", default_value = "pt")]
    stopword_language: StopWordLanguage,

    /// Additional stop words
    #[arg(long, env = "EXTRA_STOPWORDS", value_delimiter = ',')]
    extra_stopwords: Vec<String>,

    /// Number of words kept per word cloud
    #[arg(long, env = "TOP_WORDS", default_value = "50")]
    top_words: usize,

    /// Color scheme of the overall word cloud
    #[arg(long, env = "COLOR_SCHEME", default_value = "viridis")]
    color_scheme: ColorScheme,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP API
    Serve {
        #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:5000")]
        bind: SocketAddr,
    },
    /// Analyze a single video and print the result as JSON
    Analyze { youtube_url: String },
    /// Print the transcript of a video
    Transcript { video_id: String },
}

type Analyzer = VideoAnalyzer<Scraper, GeminiClient, SvgCloudRenderer>;

fn build_analyzer(cli: &Cli) -> Analyzer {
    let config = AnalyzerConfig {
        languages: cli.languages.clone(),
        speakers: cli.speakers.clone(),
        stop_word_language: cli.stopword_language,
        extra_stop_words: cli.extra_stopwords.clone(),
        top_words: cli.top_words,
        color_scheme: cli.color_scheme,
    };

    VideoAnalyzerBuilder::new()
        .source(Scraper::default())
        .summarizer(GeminiClient::new(&cli.gemini_api_key))
        .renderer(SvgCloudRenderer::default())
        .config(config)
        .build()
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let _guard = sentry::init((
        std::env::var("SENTRY_DSN").unwrap_or_default(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: Some("production".into()),
            ..Default::default()
        },
    ));

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    let analyzer = build_analyzer(&cli);

    match cli.command {
        Command::Serve { bind } => {
            let app = http::create_router(http::AppState::new(analyzer));
            let listener = tokio::net::TcpListener::bind(bind)
                .await
                .with_context(|| format!("Failed to bind {bind}"))?;

            tracing::info!(%bind, "Starting HTTP API");
            axum::serve(listener, app)
                .with_graceful_shutdown(shutdown_signal())
                .await?;
        }
        Command::Analyze { youtube_url } => {
            let analysis = analyzer.analyze(&youtube_url).await?;
            println!("{}", serde_json::to_string_pretty(&analysis)?);
        }
        Command::Transcript { video_id } => {
            let report = analyzer.transcript(&video_id).await?;
            println!("{}", report.transcript);
        }
    }

    Ok(())
}
