// SPDX-License-Identifier: MPL-2.0
//! Fixed-size drawing target that composites a source image under a
//! [`TransformState`].
//!
//! Rendering order is fixed:
//!
//! 1. clear the target to the background color;
//! 2. filter the source bitmap (brightness, then contrast) in source space;
//! 3. translate to the target center, rotate, scale, translate by the pan
//!    offset, and draw the bitmap centered on its own origin.
//!
//! Pan is therefore expressed in pre-scale units.

use crate::config::EditorConfig;
use crate::domain::editing::{AdjustmentPercent, TransformState};
use crate::domain::media::{EncodedImage, RawImage};
use crate::error::{Error, Result};
use crate::media::export::{self, ExportFormat};
use crate::media::{pixel_filter, pixmap};
use image_rs::RgbaImage;
use tiny_skia::{Color, FilterQuality, Pixmap, PixmapPaint, Transform};

/// Target dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Decoded source plus the last filtered copy.
struct SourceBitmap {
    rgba: RgbaImage,
    filtered: Option<FilteredBitmap>,
}

struct FilteredBitmap {
    brightness: AdjustmentPercent,
    contrast: AdjustmentPercent,
    pixmap: Pixmap,
}

impl SourceBitmap {
    /// Filtered pixmap for the given settings, recomputed only when they change.
    fn filtered(
        &mut self,
        brightness: AdjustmentPercent,
        contrast: AdjustmentPercent,
    ) -> Option<&Pixmap> {
        let stale = self
            .filtered
            .as_ref()
            .is_none_or(|f| f.brightness != brightness || f.contrast != contrast);
        if stale {
            let rgba = pixel_filter::apply(&self.rgba, brightness, contrast);
            self.filtered = Some(FilteredBitmap {
                brightness,
                contrast,
                pixmap: pixmap::from_rgba_image(&rgba)?,
            });
        }
        self.filtered.as_ref().map(|f| &f.pixmap)
    }
}

pub struct RasterSurface {
    target: Pixmap,
    background: Color,
    quality: FilterQuality,
    source: Option<SourceBitmap>,
}

impl std::fmt::Debug for RasterSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RasterSurface")
            .field("size", &self.size())
            .field("source", &self.source_dimensions())
            .finish_non_exhaustive()
    }
}

impl RasterSurface {
    /// Creates a surface filled with `background`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Surface`] for a zero-sized target.
    pub fn new(size: SurfaceSize, background: [u8; 4], smooth_sampling: bool) -> Result<Self> {
        let mut target = allocate(size)?;
        let background = pixmap::color(background);
        target.fill(background);
        Ok(Self {
            target,
            background,
            quality: if smooth_sampling {
                FilterQuality::Bilinear
            } else {
                FilterQuality::Nearest
            },
            source: None,
        })
    }

    /// Creates a surface from the `[editor]` settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Surface`] for a zero-sized canvas.
    pub fn from_config(config: &EditorConfig) -> Result<Self> {
        Self::new(
            SurfaceSize::new(config.canvas_width, config.canvas_height),
            config.background,
            config.smooth_sampling,
        )
    }

    /// Decodes `encoded` and makes it the source bitmap.
    ///
    /// On failure the previous source (if any) is kept. Transform state is
    /// the caller's business.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the bytes are not a valid raster image.
    pub fn load(&mut self, encoded: &[u8]) -> Result<()> {
        let rgba = export::decode(encoded)?;
        if rgba.width() == 0 || rgba.height() == 0 {
            return Err(Error::Decode("image has no pixels".to_string()));
        }
        tracing::debug!(width = rgba.width(), height = rgba.height(), "source loaded");
        self.source = Some(SourceBitmap {
            rgba,
            filtered: None,
        });
        Ok(())
    }

    /// Drops the source bitmap and clears the target to the background.
    pub fn unload(&mut self) {
        self.source = None;
        self.target.fill(self.background);
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.source.is_some()
    }

    #[must_use]
    pub fn source_dimensions(&self) -> Option<(u32, u32)> {
        self.source
            .as_ref()
            .map(|s| (s.rgba.width(), s.rgba.height()))
    }

    #[must_use]
    pub fn size(&self) -> SurfaceSize {
        SurfaceSize::new(self.target.width(), self.target.height())
    }

    /// Composites the source onto the target.
    ///
    /// A no-op before [`RasterSurface::load`]. A zero `size` keeps the
    /// current target size. Rendering is deterministic: the same transform
    /// and source always produce the same pixels.
    pub fn render(&mut self, transform: &TransformState, size: SurfaceSize) {
        let Self {
            target,
            background,
            quality,
            source,
        } = self;

        let Some(source) = source.as_mut() else {
            return;
        };

        if size != SurfaceSize::new(target.width(), target.height()) {
            match allocate(size) {
                Ok(resized) => *target = resized,
                Err(err) => tracing::warn!(%err, "keeping previous surface size"),
            }
        }

        let Some(bitmap) = source.filtered(transform.brightness, transform.contrast) else {
            return;
        };

        target.fill(*background);

        #[allow(clippy::cast_precision_loss)]
        let (half_w, half_h) = (bitmap.width() as f32 / 2.0, bitmap.height() as f32 / 2.0);
        #[allow(clippy::cast_precision_loss)]
        let (center_x, center_y) = (target.width() as f32 / 2.0, target.height() as f32 / 2.0);
        let zoom = transform.zoom.value();

        let composed = Transform::from_translate(center_x, center_y)
            .pre_concat(Transform::from_rotate(transform.rotation_degrees))
            .pre_scale(zoom, zoom)
            .pre_translate(transform.pan.x, transform.pan.y)
            .pre_translate(-half_w, -half_h);

        let paint = PixmapPaint {
            quality: *quality,
            ..PixmapPaint::default()
        };
        target.draw_pixmap(0, 0, bitmap.as_ref(), &paint, composed, None);
    }

    /// Encodes the current target content. No side effects.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encode`] if the encoder fails.
    pub fn export_image(&self, format: ExportFormat) -> Result<EncodedImage> {
        export::encode_rgba(
            self.target.width(),
            self.target.height(),
            pixmap::to_rgba_bytes(&self.target),
            format,
        )
    }

    /// Current target content for on-screen preview.
    #[must_use]
    pub fn snapshot(&self) -> RawImage {
        pixmap::to_raw_image(&self.target)
    }

    /// Straight-alpha color of one target pixel.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        pixmap::pixel_at(&self.target, x, y)
    }

    #[must_use]
    pub fn pixmap(&self) -> &Pixmap {
        &self.target
    }
}

fn allocate(size: SurfaceSize) -> Result<Pixmap> {
    Pixmap::new(size.width, size.height).ok_or_else(|| {
        Error::Surface(format!(
            "invalid surface size {}x{}",
            size.width, size.height
        ))
    })
}
