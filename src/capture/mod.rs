mod webcam;

pub use webcam::WebcamCapture;

use anyhow::Result;
use image::RgbImage;

/// Trait for camera sources the scanner snapshots from
pub trait CaptureSource {
    /// Grab the current frame at the stream's native resolution
    fn capture_frame(&mut self) -> Result<RgbImage>;

    /// Native resolution of the live stream
    fn resolution(&self) -> (u32, u32);
}
