use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use devradar::{Config, GithubClient, OpenAiProvider, ReportPipeline};

#[derive(Parser, Debug)]
#[command(name = "devradar")]
#[command(version = "0.1.0")]
#[command(about = "Analyze a GitHub profile into a model-scored report")]
struct Args {
    /// GitHub username to analyze
    #[arg(short, long)]
    username: String,

    /// Produce improvement advice instead of the analysis report
    #[arg(long)]
    advice: bool,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("devradar=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = Config::from_env()?;

    let github = GithubClient::new(&config)?;
    let model = OpenAiProvider::new(&config);
    let pipeline = ReportPipeline::new(github, model);

    // Ctrl-C cancels the in-flight run instead of killing it mid-request.
    let cancel = CancellationToken::new();
    let signal_token = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupt received, cancelling");
            signal_token.cancel();
        }
    });

    let output = if args.advice {
        let report = pipeline.advise(&args.username, cancel).await?;
        to_json(&report, args.pretty)?
    } else {
        let report = pipeline.analyze(&args.username, cancel).await?;
        to_json(&report, args.pretty)?
    };

    if let Some(ref path) = args.output {
        std::fs::write(path, &output)?;
        tracing::info!("Report written to: {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
