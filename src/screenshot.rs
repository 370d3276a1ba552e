// Screenshot functionality
//
// Captures a filtered output frame and saves it as a PNG file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::video::OutputFrame;

/// Errors that can occur during screenshot operations
#[derive(Debug)]
pub enum ScreenshotError {
    /// I/O error
    Io(io::Error),

    /// PNG encoding error
    PngEncoding(png::EncodingError),
}

impl std::fmt::Display for ScreenshotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScreenshotError::Io(e) => write!(f, "I/O error: {}", e),
            ScreenshotError::PngEncoding(e) => write!(f, "PNG encoding error: {}", e),
        }
    }
}

impl std::error::Error for ScreenshotError {}

impl From<io::Error> for ScreenshotError {
    fn from(e: io::Error) -> Self {
        ScreenshotError::Io(e)
    }
}

impl From<png::EncodingError> for ScreenshotError {
    fn from(e: png::EncodingError) -> Self {
        ScreenshotError::PngEncoding(e)
    }
}

/// Save a filtered output frame as a PNG
///
/// Files land under `screenshots/` with a timestamped name.
///
/// # Arguments
///
/// * `frame` - Output frame returned by `swap_and_filter`
///
/// # Returns
///
/// Result containing the path to the saved screenshot or an error
pub fn save_screenshot(frame: &OutputFrame<'_>) -> Result<PathBuf, ScreenshotError> {
    let screenshots_dir = PathBuf::from("screenshots");
    fs::create_dir_all(&screenshots_dir)?;

    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let filename = format!("frame_{}.png", timestamp);
    let file_path = screenshots_dir.join(filename);

    let rgba_data = frame_to_rgba_bytes(frame);
    save_png(&file_path, &rgba_data, frame.width, frame.height)?;

    info!(path = %file_path.display(), "screenshot saved");
    Ok(file_path)
}

/// Flatten packed RGBA words into the byte order the encoder expects
///
/// The normalized pixel format keeps red in the low byte, so the
/// little-endian byte sequence is already R, G, B, A.
fn frame_to_rgba_bytes(frame: &OutputFrame<'_>) -> Vec<u8> {
    let mut data = Vec::with_capacity(frame.pixels.len() * 4);
    for &px in frame.pixels {
        data.extend_from_slice(&px.to_le_bytes());
    }
    data
}

/// Save RGBA data as a PNG file
fn save_png(path: &Path, data: &[u8], width: u32, height: u32) -> Result<(), ScreenshotError> {
    let file = fs::File::create(path)?;
    let w = io::BufWriter::new(file);

    let mut encoder = png::Encoder::new(w, width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(data)?;

    Ok(())
}
