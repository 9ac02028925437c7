//! PNG encoding for the generated mod icon.

use std::io::Cursor;

use image::{ImageFormat, RgbaImage};
use moddy_core::{
    application::{ApplicationError, ports::IconEncoder},
    domain::IconBitmap,
    error::ModdyResult,
};

/// Encodes icons with the `image` crate's PNG encoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngEncoder;

impl IconEncoder for PngEncoder {
    fn encode_png(&self, icon: &IconBitmap) -> ModdyResult<Vec<u8>> {
        let image = RgbaImage::from_raw(icon.width, icon.height, icon.rgba.clone()).ok_or_else(
            || ApplicationError::IconEncoding {
                reason: format!(
                    "{} bytes do not fill a {}x{} image",
                    icon.rgba.len(),
                    icon.width,
                    icon.height
                ),
            },
        )?;

        let mut png = Cursor::new(Vec::new());
        image
            .write_to(&mut png, ImageFormat::Png)
            .map_err(|e| ApplicationError::IconEncoding {
                reason: e.to_string(),
            })?;
        Ok(png.into_inner())
    }
}
