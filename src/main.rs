use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use partget::args::Args;
use partget::config::Settings;
use partget::observer::{ConsoleObserver, ProgressObserver, SilentObserver};
use partget::utils;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let settings = Settings::load().unwrap_or_default();

    let concurrency = args.concurrency.or(settings.concurrency).unwrap_or(4);
    let dir = args
        .dir
        .or(settings.default_dir)
        .unwrap_or_else(|| ".".to_string());
    let quiet = args.quiet || settings.quiet.unwrap_or(false);

    let filename = args
        .output
        .unwrap_or_else(|| utils::get_filename_from_url(&args.url));
    let mut output_path = PathBuf::from(&dir);
    output_path.push(&filename);

    if dir != "." {
        tokio::fs::create_dir_all(&dir).await?;
    }

    let client = reqwest::Client::builder()
        .user_agent("partget/0.1")
        .connect_timeout(Duration::from_secs(30))
        .build()?;

    let cancel_token = CancellationToken::new();
    let signal_token = cancel_token.clone();

    tokio::spawn(async move {
        if let Ok(_) = tokio::signal::ctrl_c().await {
            println!("\n🛑 Received Ctrl+C. Stopping download...");
            signal_token.cancel();
        }
    });

    let observer: Arc<dyn ProgressObserver> = if quiet {
        Arc::new(SilentObserver)
    } else {
        let pb = ProgressBar::no_length();
        pb.set_style(
            ProgressStyle::with_template("{msg} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
                .unwrap()
                .progress_chars("=>-"),
        );
        pb.set_message(filename.clone());
        Arc::new(ConsoleObserver { pb })
    };

    println!("Starting download for: {}", args.url);

    partget::download_with(
        &client,
        &args.url,
        &output_path,
        concurrency,
        observer,
        cancel_token,
    )
    .await?;

    println!("✅ Finished {}", filename);
    Ok(())
}
