use clap::Parser;

/// A fast, concurrent file downloader.
///
/// Splits the target file into byte-range segments and fetches them in
/// parallel when the server supports range requests.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// The URL of the file to download.
    #[arg(short, long)]
    pub url: String,

    /// The name of the output file. Derived from the URL when omitted.
    #[arg(short, long)]
    pub output: Option<String>,

    /// The directory to save the file in. Defaults to the current directory.
    #[arg(short = 'd', long)]
    pub dir: Option<String>,

    /// The number of segments to download in parallel.
    #[arg(short = 'c', long)]
    pub concurrency: Option<usize>,

    /// Disable the progress bar.
    #[arg(short, long)]
    pub quiet: bool,
}
