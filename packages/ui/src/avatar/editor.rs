//! # Avatar selection and square cropping
//!
//! The edit flow is: pick a file, check its type, decode it, adjust a square
//! crop region, confirm. Confirming yields a PNG blob that stays in memory
//! until the profile settings are saved.
//!
//! | Step | Method | On failure |
//! |------|--------|------------|
//! | Type and size check | [`AvatarEditor::check_upload`] | error notice, file input cleared, editor stays closed |
//! | Decode | [`AvatarEditor::open`] | error notice, file input cleared |
//! | Adjust | [`AvatarEditor::set_zoom`], [`AvatarEditor::set_offset`] | always clamped into the image |
//! | Confirm | [`AvatarEditor::confirm`] | error notice, editor stays open |
//!
//! "Clearing" the file input means bumping [`AvatarEditor::input_generation`];
//! the component keys the `<input type="file">` on it so the element remounts
//! empty.

use std::io::Cursor;
use std::rc::Rc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat};

use crate::notice::Notice;

/// Edge length of the uploaded avatar in pixels.
pub const AVATAR_SIZE: u32 = 256;

/// Largest zoom factor the editor offers.
pub const MAX_ZOOM: f32 = 4.0;

/// Files above this size are rejected before they are read.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Longest edge of the downscaled editor preview.
pub const PREVIEW_EDGE: u32 = 512;

/// Image types accepted for avatars.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AvatarKind {
    Png,
    Jpeg,
}

impl AvatarKind {
    pub const ACCEPT: &'static str = "image/png,image/jpeg";

    /// Classify an uploaded file by its MIME type, or by its extension when the
    /// platform reports no type.
    pub fn from_upload(name: &str, mime: Option<&str>) -> Option<AvatarKind> {
        match mime.map(str::trim).filter(|m| !m.is_empty()) {
            Some(mime) => match mime.to_ascii_lowercase().as_str() {
                "image/png" => Some(AvatarKind::Png),
                "image/jpeg" => Some(AvatarKind::Jpeg),
                _ => None,
            },
            None => {
                let ext = name.rsplit_once('.')?.1.to_ascii_lowercase();
                match ext.as_str() {
                    "png" => Some(AvatarKind::Png),
                    "jpg" | "jpeg" => Some(AvatarKind::Jpeg),
                    _ => None,
                }
            }
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            AvatarKind::Png => "image/png",
            AvatarKind::Jpeg => "image/jpeg",
        }
    }

    fn format(self) -> ImageFormat {
        match self {
            AvatarKind::Png => ImageFormat::Png,
            AvatarKind::Jpeg => ImageFormat::Jpeg,
        }
    }
}

/// Encode bytes as a `data:` URL so in-memory images can be shown in `img` tags.
pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// A square region of the source image, in source pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CropRegion {
    pub x: u32,
    pub y: u32,
    pub size: u32,
}

impl CropRegion {
    /// The largest square, centred.
    pub fn centered(width: u32, height: u32) -> Self {
        let size = width.min(height).max(1);
        Self {
            x: width.saturating_sub(size) / 2,
            y: height.saturating_sub(size) / 2,
            size,
        }
    }

    /// Pull the region back inside a `width` x `height` image.
    pub fn clamped(self, width: u32, height: u32) -> Self {
        let size = self.size.clamp(1, width.min(height).max(1));
        Self {
            x: self.x.min(width.saturating_sub(size)),
            y: self.y.min(height.saturating_sub(size)),
            size,
        }
    }

    /// Resize around the current centre. `zoom` 1.0 is the largest square.
    pub fn zoomed(self, width: u32, height: u32, zoom: f32) -> Self {
        let zoom = zoom.clamp(1.0, MAX_ZOOM);
        let full = width.min(height).max(1);
        let size = ((full as f32 / zoom).round() as u32).max(1);
        let center_x = self.x + self.size / 2;
        let center_y = self.y + self.size / 2;
        Self {
            x: center_x.saturating_sub(size / 2),
            y: center_y.saturating_sub(size / 2),
            size,
        }
        .clamped(width, height)
    }

    /// Current zoom factor relative to the largest square.
    pub fn zoom(self, width: u32, height: u32) -> f32 {
        width.min(height).max(1) as f32 / self.size.max(1) as f32
    }

    /// Position and size as CSS percentages of the image: `(left, top, width, height)`.
    pub fn as_percentages(self, width: u32, height: u32) -> (f32, f32, f32, f32) {
        let w = width.max(1) as f32;
        let h = height.max(1) as f32;
        (
            self.x as f32 * 100.0 / w,
            self.y as f32 * 100.0 / h,
            self.size as f32 * 100.0 / w,
            self.size as f32 * 100.0 / h,
        )
    }
}

/// A decoded image open in the crop editor.
#[derive(Clone, Debug, PartialEq)]
pub struct AvatarSource {
    pub kind: AvatarKind,
    pub image: DynamicImage,
    /// `data:` URL of a copy scaled down to [`PREVIEW_EDGE`], shared across renders.
    pub preview_url: Rc<str>,
}

impl AvatarSource {
    pub fn decode(kind: AvatarKind, bytes: &[u8]) -> Result<Self, image::ImageError> {
        let image = image::load_from_memory_with_format(bytes, kind.format())?;
        let preview = image.thumbnail(PREVIEW_EDGE, PREVIEW_EDGE);
        let mut png = Vec::new();
        preview.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
        Ok(Self {
            kind,
            image,
            preview_url: Rc::from(data_url("image/png", &png)),
        })
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}

/// Crop `region` out of `image`, scale it to [`AVATAR_SIZE`] and encode as PNG.
pub fn crop_to_png(image: &DynamicImage, region: CropRegion) -> Result<Vec<u8>, image::ImageError> {
    let (width, height) = image.dimensions();
    let region = region.clamped(width, height);
    let cropped = image
        .crop_imm(region.x, region.y, region.size, region.size)
        .resize_exact(AVATAR_SIZE, AVATAR_SIZE, FilterType::Lanczos3);

    let mut png = Vec::new();
    cropped.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
    Ok(png)
}

/// State of the avatar picker and crop editor.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AvatarEditor {
    /// Render key of the file input; bumped to clear it.
    pub input_generation: u32,
    /// The image being cropped. The editor is open while this is set.
    pub source: Option<AvatarSource>,
    pub crop: Option<CropRegion>,
}

impl AvatarEditor {
    pub fn is_open(&self) -> bool {
        self.source.is_some()
    }

    fn clear_input(&mut self) {
        self.input_generation = self.input_generation.wrapping_add(1);
    }

    /// Check a selected file before anything is read or decoded.
    pub fn check_upload(
        &mut self,
        name: &str,
        mime: Option<&str>,
        size: u64,
    ) -> Result<AvatarKind, Notice> {
        let Some(kind) = AvatarKind::from_upload(name, mime) else {
            tracing::info!("Rejected avatar upload {:?} ({:?})", name, mime);
            self.clear_input();
            return Err(Notice::error("Only PNG and JPEG images can be used as avatars"));
        };
        if size > MAX_UPLOAD_BYTES {
            tracing::info!("Rejected avatar upload {:?}: {} bytes", name, size);
            self.clear_input();
            return Err(Notice::error(format!(
                "Images larger than {} MB cannot be used as avatars",
                MAX_UPLOAD_BYTES / (1024 * 1024)
            )));
        }
        Ok(kind)
    }

    /// Decode the file and open the editor with the largest centred square.
    pub fn open(&mut self, kind: AvatarKind, bytes: &[u8]) -> Result<(), Notice> {
        match AvatarSource::decode(kind, bytes) {
            Ok(source) => {
                let (w, h) = source.dimensions();
                self.crop = Some(CropRegion::centered(w, h));
                self.source = Some(source);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Could not decode avatar image: {}", e);
                self.clear_input();
                Err(Notice::error("That image could not be read"))
            }
        }
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        if let (Some(source), Some(crop)) = (&self.source, self.crop) {
            let (w, h) = source.dimensions();
            self.crop = Some(crop.zoomed(w, h, zoom));
        }
    }

    pub fn set_offset(&mut self, x: u32, y: u32) {
        if let (Some(source), Some(crop)) = (&self.source, self.crop) {
            let (w, h) = source.dimensions();
            self.crop = Some(CropRegion { x, y, ..crop }.clamped(w, h));
        }
    }

    /// Produce the cropped PNG and close the editor.
    pub fn confirm(&mut self) -> Result<Vec<u8>, Notice> {
        let (Some(source), Some(crop)) = (&self.source, self.crop) else {
            return Err(Notice::error("No image selected"));
        };
        let png = crop_to_png(&source.image, crop).map_err(|e| {
            tracing::warn!("Cropping avatar failed: {}", e);
            Notice::error("The avatar could not be cropped")
        })?;
        self.close();
        Ok(png)
    }

    /// Close the editor, discarding the selection.
    pub fn close(&mut self) {
        self.source = None;
        self.crop = None;
        self.clear_input();
    }
}
