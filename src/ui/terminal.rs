use std::fs;
use std::path::PathBuf;

use super::ScannerSurface;

/// Renders scanner output to the terminal.
///
/// The gallery fragment is printed verbatim and, when an output path is
/// configured, also written to disk so the markup survives the session.
pub struct TerminalSurface {
    gallery_out: Option<PathBuf>,
}

impl TerminalSurface {
    pub fn new(gallery_out: Option<PathBuf>) -> Self {
        Self { gallery_out }
    }
}

impl ScannerSurface for TerminalSurface {
    fn set_loading(&mut self, visible: bool) {
        if visible {
            println!("Looking for your photos...");
        }
    }

    fn set_controls_visible(&mut self, visible: bool) {
        if visible {
            println!("Press Enter to take a selfie, q to quit.");
        }
    }

    fn clear_results(&mut self) {
        // Nothing to erase on an append-only terminal
    }

    fn show_warning(&mut self, text: &str) {
        println!("! {}", text);
    }

    fn show_info(&mut self, text: &str) {
        println!("{}", text);
    }

    fn show_failure(&mut self, text: &str) {
        eprintln!("{}", text);
    }

    fn show_gallery(&mut self, html: &str) {
        println!("{}", html);

        if let Some(path) = &self.gallery_out {
            match fs::write(path, html) {
                Ok(()) => tracing::info!("Gallery written to {}", path.display()),
                Err(e) => tracing::warn!("Failed to write gallery to {}: {}", path.display(), e),
            }
        }
    }

    fn show_permission_error(&mut self, text: &str) {
        eprintln!("{}", text);
    }
}
