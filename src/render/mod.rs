//! Pixel canvas for consuming rasterizer output.
//!
//! The kernel's algorithms return materialized point sequences and never
//! touch a pixel buffer themselves; [`Canvas`] is the bundled display
//! collaborator that consumes them: an owned ARGB grid with
//! bounds-checked access and PNG export.

use std::path::Path;

use crate::geometry::Pixel;

/// An owned width x height grid of ARGB pixels.
pub struct Canvas {
    color_buffer: Vec<u32>,
    width: u32,
    height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            color_buffer: vec![crate::colors::BACKGROUND; size],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Fill the whole canvas with one color.
    pub fn clear(&mut self, color: u32) {
        self.color_buffer.fill(color);
    }

    /// Set a pixel. Out-of-bounds coordinates are silently ignored.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let index = (y as u32 * self.width + x as u32) as usize;
            self.color_buffer[index] = color;
        }
    }

    /// Read a pixel back, or `None` when out of bounds.
    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let index = (y as u32 * self.width + x as u32) as usize;
            Some(self.color_buffer[index])
        } else {
            None
        }
    }

    /// Submit a rasterized point sequence for display.
    pub fn plot(&mut self, pixels: &[Pixel], color: u32) {
        for p in pixels {
            self.set_pixel(p.x, p.y, color);
        }
    }

    /// Draw an axis-aligned rectangle outline. The demos use this to show
    /// clip windows.
    pub fn draw_rect_outline(&mut self, x: i32, y: i32, width: i32, height: i32, color: u32) {
        for dx in 0..width {
            self.set_pixel(x + dx, y, color);
            self.set_pixel(x + dx, y + height - 1, color);
        }
        for dy in 0..height {
            self.set_pixel(x, y + dy, color);
            self.set_pixel(x + width - 1, y + dy, color);
        }
    }

    /// Draw evenly spaced grid dots, one every `spacing` pixels.
    pub fn draw_grid(&mut self, spacing: i32, color: u32) {
        for y in (0..self.height as i32).step_by(spacing.max(1) as usize) {
            for x in (0..self.width as i32).step_by(spacing.max(1) as usize) {
                self.set_pixel(x, y, color);
            }
        }
    }

    /// Encode the canvas as RGBA8 and write it to a PNG file.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), image::ImageError> {
        let mut img = image::RgbaImage::new(self.width, self.height);
        for (i, &argb) in self.color_buffer.iter().enumerate() {
            let x = i as u32 % self.width;
            let y = i as u32 / self.width;
            let [a, r, g, b] = argb.to_be_bytes();
            img.put_pixel(x, y, image::Rgba([r, g, b, a]));
        }
        img.save(path)
    }
}
