use indicatif::{ProgressBar, ProgressStyle};
use partget::observer::ConsoleObserver;
use partget::utils;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Configuration
    let url = "https://proof.ovh.net/files/10Mb.dat";
    let concurrency = 4;

    println!("Starting example download...");
    println!("URL: {}", url);

    // 1. Setup a robust HTTP Client
    let client = reqwest::Client::builder()
        .user_agent("partget-example/0.1")
        .connect_timeout(Duration::from_secs(30))
        .build()?;

    // 2. Derive the output filename from the URL
    let filename = utils::get_filename_from_url(url);

    // 3. Setup UI (a single progress bar; the probe fills in the length)
    let pb = ProgressBar::no_length();
    pb.set_style(
        ProgressStyle::with_template("{msg} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
            .unwrap()
            .progress_chars("=>-"),
    );
    pb.set_message(filename.clone());
    let observer = Arc::new(ConsoleObserver { pb });

    // 4. Run the download (probe, segment, fetch, merge)
    partget::download_with(
        &client,
        url,
        Path::new(&filename),
        concurrency,
        observer,
        CancellationToken::new(),
    )
    .await?;

    println!("✅ Download completed successfully: {}", filename);
    Ok(())
}
