mod api;
mod capture;
mod scanner;
mod snapshot;
mod ui;

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use api::{HttpPhotoMatcher, PhotoMatcher};
use capture::{CaptureSource, WebcamCapture};
use clap::Parser;
use scanner::Scanner;
use ui::{ScannerSurface, TerminalSurface};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Event identifier the selfie is matched against
    event_id: String,

    /// Base URL of the photo-matching server
    #[arg(short, long, default_value = "http://localhost:5000")]
    server: String,

    /// Input webcam device index
    #[arg(short, long, default_value_t = 0)]
    input_device: u32,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Write a received gallery fragment to this file
    #[arg(long)]
    gallery_out: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    tracing::info!("Selfie scan starting");
    tracing::info!("Event: {}", args.event_id);
    tracing::info!("Server: {}", args.server);

    let matcher = HttpPhotoMatcher::new(
        &args.server,
        &args.event_id,
        Duration::from_secs(args.timeout),
    )?;
    let surface = TerminalSurface::new(args.gallery_out);
    let camera = WebcamCapture::new(args.input_device);

    let mut scanner = Scanner::initialize(camera, matcher, surface);

    run_session(&mut scanner)
}

/// Interactive session loop: Enter triggers a capture, `q` quits, and the
/// loop ends once the scanner reaches its terminal gallery state.
fn run_session<C, M, S>(scanner: &mut Scanner<C, M, S>) -> Result<()>
where
    C: CaptureSource,
    M: PhotoMatcher,
    S: ScannerSurface,
{
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        if line?.trim() == "q" {
            tracing::info!("Session cancelled");
            break;
        }

        scanner.trigger_capture();

        if scanner.finished() {
            tracing::info!("Gallery received, session complete");
            break;
        }
    }

    Ok(())
}
