mod terminal;

pub use terminal::TerminalSurface;

/// Display states of one scan session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Idle,
    Loading,
    ErrorShown,
    MessageShown,
    GalleryShown,
}

impl ScanState {
    /// Whether the capture trigger is live in this state.
    ///
    /// `Loading` rejects triggers so at most one request is in flight;
    /// `GalleryShown` rejects them because the session is over.
    pub fn accepts_trigger(self) -> bool {
        matches!(
            self,
            ScanState::Idle | ScanState::ErrorShown | ScanState::MessageShown
        )
    }
}

/// Trait for the surface the scanner renders into.
///
/// Covers the loading indicator, the scanner controls, and the results
/// container. The surface is display only; it holds no workflow state.
pub trait ScannerSurface {
    /// Show or hide the loading indicator
    fn set_loading(&mut self, visible: bool);

    /// Show or hide the scanner controls (video + capture trigger)
    fn set_controls_visible(&mut self, visible: bool);

    /// Empty the results container
    fn clear_results(&mut self);

    /// Warning-level result (server-reported application error)
    fn show_warning(&mut self, text: &str);

    /// Informational result
    fn show_info(&mut self, text: &str);

    /// Generic failure notice (transport or parse error)
    fn show_failure(&mut self, text: &str);

    /// Replace the results container with the gallery fragment, verbatim
    fn show_gallery(&mut self, html: &str);

    /// Replace the scanner surface with a camera permission notice
    fn show_permission_error(&mut self, text: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_and_gallery_reject_triggers() {
        assert!(!ScanState::Loading.accepts_trigger());
        assert!(!ScanState::GalleryShown.accepts_trigger());
    }

    #[test]
    fn idle_and_retryable_states_accept_triggers() {
        assert!(ScanState::Idle.accepts_trigger());
        assert!(ScanState::ErrorShown.accepts_trigger());
        assert!(ScanState::MessageShown.accepts_trigger());
    }
}
