use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tubesim")]
#[command(author, version, about = "Demo YouTube downloader: simulated lookups and downloads, no real transfers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look up video details and the available format options
    Info {
        /// YouTube video URL
        url: String,

        /// Print the details as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Run a simulated download for a video URL
    Download {
        /// YouTube video URL
        url: String,

        /// Format family to download (mp4 or mp3)
        #[arg(short, long, default_value = "mp4")]
        format: String,

        /// Quality label, e.g. 720p or 320kbps (defaults to the first offered)
        #[arg(short, long)]
        quality: Option<String>,
    },

    /// List the format catalog
    Formats {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
