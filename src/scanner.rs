use anyhow::{Context, Result};

use crate::api::{PhotoMatcher, ScanOutcome};
use crate::capture::CaptureSource;
use crate::snapshot;
use crate::ui::{ScanState, ScannerSurface};

pub const PERMISSION_ERROR: &str =
    "Could not access the camera. Please grant permission and try again.";
pub const GENERIC_ERROR: &str = "An unexpected error occurred. Please try again.";

/// One scan session: a camera, the match endpoint, and the surface the
/// outcome is rendered into.
pub struct Scanner<C, M, S> {
    capture: Option<C>,
    matcher: M,
    surface: S,
    state: ScanState,
}

impl<C, M, S> Scanner<C, M, S>
where
    C: CaptureSource,
    M: PhotoMatcher,
    S: ScannerSurface,
{
    /// Bind the scanner to its camera, endpoint and surface.
    ///
    /// A camera failure is rendered into the surface, never returned: the
    /// session degrades to a dead capture trigger instead of aborting.
    pub fn initialize(camera: Result<C>, matcher: M, mut surface: S) -> Self {
        let capture = match camera {
            Ok(c) => {
                surface.set_controls_visible(true);
                Some(c)
            }
            Err(e) => {
                tracing::error!("Error accessing camera: {:#}", e);
                surface.show_permission_error(PERMISSION_ERROR);
                None
            }
        };

        Self {
            capture,
            matcher,
            surface,
            state: ScanState::Idle,
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    /// True once the session has reached the terminal gallery state.
    pub fn finished(&self) -> bool {
        self.state == ScanState::GalleryShown
    }

    /// The capture trigger.
    ///
    /// Ignored while a request is in flight, after the terminal gallery
    /// state, and when no camera is available. Otherwise snapshots the
    /// current frame, submits it, and dispatches the outcome: application
    /// errors and informational replies restore the controls for a retry,
    /// a gallery ends the session with the controls hidden.
    pub fn trigger_capture(&mut self) {
        if !self.state.accepts_trigger() {
            tracing::debug!("Capture trigger ignored in state {:?}", self.state);
            return;
        }
        let Some(capture) = self.capture.as_mut() else {
            tracing::debug!("Capture trigger ignored: no camera");
            return;
        };

        self.state = ScanState::Loading;
        self.surface.set_loading(true);
        self.surface.set_controls_visible(false);
        self.surface.clear_results();

        let outcome = snapshot_and_submit(capture, &self.matcher);

        self.surface.set_loading(false);
        self.state = match outcome {
            Ok(ScanOutcome::Error(text)) => {
                self.surface.show_warning(&text);
                self.surface.set_controls_visible(true);
                ScanState::ErrorShown
            }
            Ok(ScanOutcome::Message(text)) => {
                self.surface.show_info(&text);
                self.surface.set_controls_visible(true);
                ScanState::MessageShown
            }
            Ok(ScanOutcome::Gallery(html)) => {
                // Terminal state, controls stay hidden
                self.surface.show_gallery(&html);
                ScanState::GalleryShown
            }
            Err(e) => {
                tracing::error!("Submission failed: {:#}", e);
                self.surface.show_failure(GENERIC_ERROR);
                self.surface.set_controls_visible(true);
                ScanState::ErrorShown
            }
        };
    }
}

fn snapshot_and_submit<C, M>(capture: &mut C, matcher: &M) -> Result<ScanOutcome>
where
    C: CaptureSource,
    M: PhotoMatcher,
{
    let frame = capture
        .capture_frame()
        .context("Failed to capture frame")?;
    let data_url = snapshot::encode_jpeg_data_url(&frame)?;

    tracing::debug!("Submitting {}x{} selfie", frame.width(), frame.height());
    Ok(matcher.submit(&data_url)?)
}
