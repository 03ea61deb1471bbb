use anyhow::Result;
use dotenvy::dotenv;
use std::str::FromStr;
use std::sync::Arc;

use tubesim::app::Controller;
use tubesim::cli::{Cli, Commands};
use tubesim::core::{config, init_logger};
use tubesim::download::notify::NoticeBoard;
use tubesim::media::catalog::{MediaFormat, FORMAT_CATALOG};
use tubesim::media::resolver::MockResolver;

/// Main entry point for the demo downloader
///
/// Parses CLI arguments and dispatches to the appropriate subcommand.
///
/// # Errors
/// Returns an error if logging cannot be initialized or a command fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse_args();

    // Load environment variables from .env if present
    let _ = dotenv();

    // Initialize logger (console + file)
    init_logger(&config::LOG_FILE_PATH)?;

    match cli.command {
        Some(Commands::Info { url, json }) => run_info(url, json).await,
        Some(Commands::Download { url, format, quality }) => run_download(url, format, quality).await,
        Some(Commands::Formats { json }) => run_formats(json),
        None => {
            // No command specified - show what the demo offers
            log::info!("No command specified, listing the format catalog");
            run_formats(false)
        }
    }
}

fn new_controller() -> Controller {
    Controller::new(Arc::new(MockResolver::new()), Arc::new(NoticeBoard::default()))
}

/// Run the info command
async fn run_info(url: String, json: bool) -> Result<()> {
    let mut controller = new_controller();

    let details = controller
        .fetch_details(&url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to get info: {}", e))?;

    if json {
        println!("{}", serde_json::to_string_pretty(details)?);
        return Ok(());
    }

    println!("🎬 Video Information");
    println!("====================");
    println!("URL: {}\n", url);
    println!("Title: {}", details.reference.title);
    println!("Channel: {}", details.reference.author);
    println!("Duration: {}", details.reference.duration);
    println!("Thumbnail: {}", details.reference.thumbnail);

    println!("\n📋 Available Formats:");
    println!("---------------------");
    for option in &details.formats {
        println!("{:<6} {:<10} {}", option.format.as_str(), option.quality, option.size);
    }

    Ok(())
}

/// Run a simulated download end to end
async fn run_download(url: String, format: String, quality: Option<String>) -> Result<()> {
    let format =
        MediaFormat::from_str(&format).map_err(|_| anyhow::anyhow!("Unsupported format: {}. Use mp3 or mp4.", format))?;

    println!("🎬 Tubesim Demo Download");
    println!("========================");
    println!("URL: {}", url);
    println!("Format: {}", format);

    let mut controller = new_controller();
    controller
        .fetch_details(&url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to fetch video data: {}", e))?;

    controller.select_format(format);
    if let Some(ref label) = quality {
        controller.select_quality(label);
    }

    let option = controller
        .current_selection()
        .ok_or_else(|| anyhow::anyhow!("No quality selected"))?;
    if let Some(ref label) = quality {
        if option.quality != label {
            let offered: Vec<&str> = FORMAT_CATALOG
                .iter()
                .filter(|o| o.format == format)
                .map(|o| o.quality)
                .collect();
            return Err(anyhow::anyhow!(
                "Quality {} is not offered for {}. Available: {}",
                label,
                format,
                offered.join(", ")
            ));
        }
    }
    println!("Quality: {} ({})", option.quality, option.size);

    println!("\n📥 Downloading...");
    let handle = controller
        .start_download()
        .ok_or_else(|| anyhow::anyhow!("Download could not be started"))?;
    log::info!("CLI download run {} started", handle.run_id());
    handle.wait().await;

    println!("\n✅ Download complete! (Demo only - no actual file was downloaded)");
    Ok(())
}

/// Print the format catalog, video family first
fn run_formats(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&FORMAT_CATALOG)?);
        return Ok(());
    }

    println!("📋 Format Catalog");
    println!("-----------------");
    for family in [MediaFormat::Mp4, MediaFormat::Mp3] {
        let label = if family.is_video() { "video" } else { "audio" };
        println!("{} ({})", family.display_name(), label);
        for option in FORMAT_CATALOG.iter().filter(|o| o.format == family) {
            println!("  {:<10} {}", option.quality, option.size);
        }
    }
    Ok(())
}
