use churncast_core::FormSchema;
use churncast_inference::{ArtifactConfig, ChurnPredictor};
use churncast_web::cli::{Cli, Commands};
use churncast_web::models::{outcome_message, PredictResponse};
use churncast_web::server::run_server;
use clap::Parser;
use std::io::Read;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            port,
            address,
            artifacts,
            verbose,
        } => {
            init_logging(verbose);

            let config = artifact_config(artifacts)?;
            let predictor = ChurnPredictor::load(&config)?;

            let addr: SocketAddr = format!("{}:{}", address, port).parse()?;

            println!();
            println!("  ╔════════════════════════════════════════════╗");
            println!("  ║       Churncast / Churn Predictor          ║");
            println!("  ╚════════════════════════════════════════════╝");
            println!();
            println!("  Preprocessor: {}", config.preprocessor.display());
            println!("  Model:        {}", config.model.display());
            println!(
                "  Loaded:       {} trees over {} features",
                predictor.tree_count(),
                predictor.feature_width()
            );
            println!();
            println!("  Open http://{} in your browser", addr);
            println!();

            run_server(predictor, addr).await?;
        }

        Commands::Predict {
            input,
            target,
            artifacts,
            verbose,
        } => {
            init_logging(verbose);

            let record = read_record(input)?;

            if let Some(target) = target {
                // Score against a running server
                let client = reqwest::Client::new();
                let response = client
                    .post(format!("{}/api/predict", target.trim_end_matches('/')))
                    .json(&record)
                    .send()
                    .await?;

                let status = response.status();
                let body: serde_json::Value = response.json().await?;
                if status.is_success() {
                    println!("{}", serde_json::to_string_pretty(&body)?);
                } else {
                    eprintln!("Prediction failed ({}): {}", status, body);
                    std::process::exit(1);
                }
            } else {
                // Score locally against the artifacts
                let config = artifact_config(artifacts)?;
                let predictor = ChurnPredictor::load(&config)?;

                FormSchema::new().validate(&record)?;
                let prediction = predictor.predict(&record)?;

                let response = PredictResponse {
                    id: uuid::Uuid::new_v4().to_string(),
                    label: prediction.label,
                    probability: prediction.probability,
                    message: outcome_message(prediction.label, prediction.probability),
                };
                println!("{}", serde_json::to_string_pretty(&response)?);
            }
        }
    }

    Ok(())
}

fn artifact_config(path: Option<PathBuf>) -> anyhow::Result<ArtifactConfig> {
    Ok(match path {
        Some(path) => ArtifactConfig::from_file(path)?,
        None => ArtifactConfig::default(),
    })
}

fn read_record(input: Option<PathBuf>) -> anyhow::Result<churncast_core::CustomerRecord> {
    let content = match input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    Ok(serde_json::from_str(&content)?)
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        "churncast_web=debug,churncast_inference=debug,tower_http=debug"
    } else {
        "churncast_web=info,churncast_inference=info,tower_http=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
