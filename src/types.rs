//! Core types for polylife.
//!
//! These types define the foundation everything builds on: the color the
//! display understands and the camera rectangle into the unbounded plane.

// =============================================================================
// Color
// =============================================================================

/// Opaque RGB color with 8-bit channels.
///
/// Using integers for exact comparison - the diff renderer relies on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create from 0xRRGGBB integer format.
    ///
    /// # Examples
    ///
    /// ```
    /// use polylife::Rgb;
    ///
    /// let red = Rgb::from_rgb_int(0xff0000);
    /// assert_eq!(red, Rgb::new(255, 0, 0));
    /// ```
    pub const fn from_rgb_int(rgb: u32) -> Self {
        Self::new(
            ((rgb >> 16) & 0xFF) as u8,
            ((rgb >> 8) & 0xFF) as u8,
            (rgb & 0xFF) as u8,
        )
    }

    /// Linear interpolation between two colors.
    ///
    /// Used to build fade-out palettes for Generations decay states.
    #[inline]
    pub fn lerp(a: Self, b: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let inv_t = 1.0 - t;
        Self {
            r: ((a.r as f32 * inv_t) + (b.r as f32 * t)) as u8,
            g: ((a.g as f32 * inv_t) + (b.g as f32 * t)) as u8,
            b: ((a.b as f32 * inv_t) + (b.b as f32 * t)) as u8,
        }
    }
}

// =============================================================================
// Viewport - The camera into the unbounded plane
// =============================================================================

/// A rectangular camera into the infinite simulated plane.
///
/// Cells outside the viewport are still simulated, just not rendered.
/// The origin may be negative and may move (camera panning).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    /// Create a new viewport.
    pub const fn new(x: i32, y: i32, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if a universe coordinate is visible.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x
            && y >= self.y
            && x < self.x + self.width as i32
            && y < self.y + self.height as i32
    }

    /// Translate a universe coordinate to display-local pixel coordinates.
    ///
    /// Returns None when the coordinate is outside the viewport.
    #[inline]
    pub fn to_local(&self, x: i32, y: i32) -> Option<(u16, u16)> {
        if self.contains(x, y) {
            Some(((x - self.x) as u16, (y - self.y) as u16))
        } else {
            None
        }
    }

    /// Move the viewport origin by (dx, dy).
    #[inline]
    pub fn pan(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_from_rgb_int() {
        assert_eq!(Rgb::from_rgb_int(0xff0000), Rgb::new(255, 0, 0));
        assert_eq!(Rgb::from_rgb_int(0x00ff00), Rgb::new(0, 255, 0));
        assert_eq!(Rgb::from_rgb_int(0x282a36), Rgb::new(40, 42, 54));
    }

    #[test]
    fn test_rgb_lerp_endpoints() {
        let a = Rgb::new(255, 0, 0);
        let b = Rgb::new(0, 0, 255);
        assert_eq!(Rgb::lerp(a, b, 0.0), a);
        assert_eq!(Rgb::lerp(a, b, 1.0), b);
        // Out-of-range t clamps
        assert_eq!(Rgb::lerp(a, b, -1.0), a);
        assert_eq!(Rgb::lerp(a, b, 2.0), b);
    }

    #[test]
    fn test_viewport_contains() {
        let vp = Viewport::new(-4, -4, 8, 8);
        assert!(vp.contains(-4, -4));
        assert!(vp.contains(3, 3));
        assert!(!vp.contains(4, 0));
        assert!(!vp.contains(0, -5));
    }

    #[test]
    fn test_viewport_to_local() {
        let vp = Viewport::new(10, 20, 4, 4);
        assert_eq!(vp.to_local(10, 20), Some((0, 0)));
        assert_eq!(vp.to_local(13, 23), Some((3, 3)));
        assert_eq!(vp.to_local(14, 20), None);
    }

    #[test]
    fn test_viewport_pan() {
        let mut vp = Viewport::new(0, 0, 8, 8);
        vp.pan(2, -1);
        assert_eq!((vp.x, vp.y), (2, -1));
        assert!(vp.contains(2, -1));
        assert!(!vp.contains(0, 0));
    }
}
