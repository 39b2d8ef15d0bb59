use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::core::{Affine, Argb, Canvas, Point, Rect},
    foundation::error::{CueError, CueResult},
    render::composite::over,
};

/// Drawing target used by render hooks.
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Replace every pixel with `color`.
    fn fill(&mut self, color: Argb);

    /// Composite `color` over the pixels inside `rect` (clipped to the surface).
    fn blend_rect(&mut self, color: Argb, rect: Rect);

    /// Composite `image` onto the surface with `transform` mapping image
    /// pixel space to surface space.
    fn blit(&mut self, image: &image::RgbaImage, transform: Affine);

    fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width()), f64::from(self.height()))
    }
}

/// In-memory RGBA8 surface.
#[derive(Clone, Debug)]
pub struct PixelSurface {
    image: image::RgbaImage,
}

impl PixelSurface {
    pub fn new(canvas: Canvas) -> CueResult<Self> {
        if canvas.width == 0 || canvas.height == 0 {
            return Err(CueError::validation("surface width/height must be > 0"));
        }
        Ok(Self {
            image: image::RgbaImage::new(canvas.width, canvas.height),
        })
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Argb> {
        self.image
            .get_pixel_checked(x, y)
            .map(|p| Argb::from_rgba8(p.0))
    }

    pub fn as_image(&self) -> &image::RgbaImage {
        &self.image
    }

    pub fn save_png(&self, path: &Path) -> CueResult<()> {
        self.image
            .save_with_format(path, image::ImageFormat::Png)
            .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }
}

impl Surface for PixelSurface {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn fill(&mut self, color: Argb) {
        let px = image::Rgba(color.to_rgba8());
        for p in self.image.pixels_mut() {
            *p = px;
        }
    }

    fn blend_rect(&mut self, color: Argb, rect: Rect) {
        let clip = rect.abs().intersect(self.bounds());
        if clip.width() <= 0.0 || clip.height() <= 0.0 || color.is_transparent() {
            return;
        }
        let (x0, y0) = (clip.x0.floor() as u32, clip.y0.floor() as u32);
        let (x1, y1) = (clip.x1.ceil() as u32, clip.y1.ceil() as u32);
        for y in y0..y1.min(self.height()) {
            for x in x0..x1.min(self.width()) {
                let p = self.image.get_pixel_mut(x, y);
                p.0 = over(p.0, color);
            }
        }
    }

    fn blit(&mut self, image: &image::RgbaImage, transform: Affine) {
        if image.width() == 0 || image.height() == 0 {
            return;
        }
        let det = transform.determinant();
        if !det.is_finite() || det == 0.0 {
            return;
        }
        let inverse = transform.inverse();

        let src_rect = Rect::new(0.0, 0.0, f64::from(image.width()), f64::from(image.height()));
        let dst = transform.transform_rect_bbox(src_rect).intersect(self.bounds());
        if dst.width() <= 0.0 || dst.height() <= 0.0 {
            return;
        }

        let (x0, y0) = (dst.x0.floor() as u32, dst.y0.floor() as u32);
        let (x1, y1) = (
            (dst.x1.ceil() as u32).min(self.width()),
            (dst.y1.ceil() as u32).min(self.height()),
        );
        for y in y0..y1 {
            for x in x0..x1 {
                // Nearest-neighbour sample at the pixel centre.
                let src = inverse * Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
                if src.x < 0.0 || src.y < 0.0 {
                    continue;
                }
                let (sx, sy) = (src.x as u32, src.y as u32);
                let Some(texel) = image.get_pixel_checked(sx, sy) else {
                    continue;
                };
                let p = self.image.get_pixel_mut(x, y);
                p.0 = over(p.0, Argb::from_rgba8(texel.0));
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
