//! Display adapters.
//!
//! The engine draws through the [`DisplayAdapter`] trait and never touches a
//! device directly. [`TerminalDisplay`] renders to the terminal with
//! half-block characters; [`CaptureDisplay`] records draw calls for tests
//! and headless runs.

mod terminal;

pub use terminal::TerminalDisplay;

use std::io;

use crate::types::Rgb;

/// A double-buffered pixel surface.
///
/// The frame protocol is `clear_frame`, any number of `draw_pixel` calls,
/// then `present` to make the frame visible. Coordinates are local to the
/// surface; out-of-range pixels are dropped.
pub trait DisplayAdapter {
    /// Width of the surface in pixels.
    fn width(&self) -> u16;

    /// Height of the surface in pixels.
    fn height(&self) -> u16;

    /// Reset the working frame to the background.
    fn clear_frame(&mut self);

    /// Set one pixel of the working frame.
    fn draw_pixel(&mut self, x: u16, y: u16, color: Rgb);

    /// Make the working frame visible.
    fn present(&mut self) -> io::Result<()>;
}

// =============================================================================
// CaptureDisplay
// =============================================================================

/// In-memory display that records what was drawn.
pub struct CaptureDisplay {
    width: u16,
    height: u16,
    frame: Vec<Rgb>,
    presented: usize,
}

impl CaptureDisplay {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            frame: vec![Rgb::BLACK; width as usize * height as usize],
            presented: 0,
        }
    }

    /// Color of one pixel of the working frame.
    pub fn color_at(&self, x: u16, y: u16) -> Rgb {
        self.frame[y as usize * self.width as usize + x as usize]
    }

    /// Coordinates of every non-background pixel, raster order.
    pub fn lit_pixels(&self) -> Vec<(u16, u16)> {
        let mut lit = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                if self.color_at(x, y) != Rgb::BLACK {
                    lit.push((x, y));
                }
            }
        }
        lit
    }

    /// How many frames have been presented.
    pub fn frames_presented(&self) -> usize {
        self.presented
    }
}

impl DisplayAdapter for CaptureDisplay {
    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }

    fn clear_frame(&mut self) {
        self.frame.fill(Rgb::BLACK);
    }

    fn draw_pixel(&mut self, x: u16, y: u16, color: Rgb) {
        if x < self.width && y < self.height {
            self.frame[y as usize * self.width as usize + x as usize] = color;
        }
    }

    fn present(&mut self) -> io::Result<()> {
        self.presented += 1;
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_records_pixels() {
        let mut d = CaptureDisplay::new(4, 4);
        d.clear_frame();
        d.draw_pixel(1, 2, Rgb::WHITE);
        d.draw_pixel(3, 0, Rgb::new(255, 0, 0));
        assert_eq!(d.lit_pixels(), vec![(3, 0), (1, 2)]);
        assert_eq!(d.color_at(1, 2), Rgb::WHITE);
    }

    #[test]
    fn test_capture_drops_out_of_range() {
        let mut d = CaptureDisplay::new(2, 2);
        d.draw_pixel(2, 0, Rgb::WHITE);
        d.draw_pixel(0, 9, Rgb::WHITE);
        assert!(d.lit_pixels().is_empty());
    }

    #[test]
    fn test_clear_frame_resets() {
        let mut d = CaptureDisplay::new(2, 2);
        d.draw_pixel(0, 0, Rgb::WHITE);
        d.clear_frame();
        assert!(d.lit_pixels().is_empty());
    }
}
