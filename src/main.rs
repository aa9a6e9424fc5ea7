use std::path::{Path, PathBuf};

use clap::Parser;
use robotics_quiz::{GeneratorConfig, Quiz};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// API key for the chat-completion endpoint (defaults to $OPENROUTER_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// Base URL of the chat-completion API
    #[arg(long)]
    base_url: Option<String>,

    /// Model identifier sent with every request
    #[arg(short, long)]
    model: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Extra attempts after a transient request failure
    #[arg(long)]
    retries: Option<u32>,

    /// Value for the HTTP-Referer header
    #[arg(long)]
    referer: Option<String>,

    /// File to write logs to (the terminal is taken by the UI)
    #[arg(long, default_value = "robotics-quiz.log")]
    log_file: PathBuf,
}

impl Args {
    fn into_config(self) -> GeneratorConfig {
        let mut config = GeneratorConfig::from_env();
        if let Some(key) = self.api_key {
            config.api_key = Some(key);
        }
        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }
        if let Some(model) = self.model {
            config.model = model;
        }
        if let Some(timeout_secs) = self.timeout_secs {
            config.timeout_secs = timeout_secs;
        }
        if let Some(retries) = self.retries {
            config.retries = retries;
        }
        if let Some(referer) = self.referer {
            config.referer = referer;
        }
        config
    }
}

fn init_logging(path: &Path) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = path
        .file_name()
        .ok_or("log file path has no file name")?
        .to_string_lossy()
        .into_owned();

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("robotics_quiz=info")),
        )
        .with_writer(appender)
        .with_ansi(false)
        .try_init()?;

    Ok(())
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = init_logging(&args.log_file) {
        eprintln!("Logging disabled: {}", e);
    }

    let quiz = match Quiz::from_config(args.into_config()) {
        Ok(quiz) => quiz,
        Err(e) => {
            eprintln!("Error starting quiz: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = quiz.run().await {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
