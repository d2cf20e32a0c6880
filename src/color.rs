use std::fmt;

/// An 8-bit RGBA color.
///
/// A plain data carrier: colors only support exact per-channel equality, no
/// arithmetic or blending.
#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Fully transparent black (all channels are 0).
    pub const NONE: Self = Self::from_rgba8(0, 0, 0, 0);
    pub const BLACK: Self = Self::from_rgb8(0, 0, 0);
    pub const WHITE: Self = Self::from_rgb8(255, 255, 255);
    pub const RED: Self = Self::from_rgb8(255, 0, 0);
    pub const GREEN: Self = Self::from_rgb8(0, 255, 0);
    pub const BLUE: Self = Self::from_rgb8(0, 0, 255);

    /// Creates a fully opaque color from its red, green and blue channels.
    #[inline]
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[inline]
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}{:02x}",
            self.r, self.g, self.b, self.a,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_eq() {
        assert_eq!(
            Color::from_rgba8(10, 20, 30, 255),
            Color::from_rgba8(10, 20, 30, 255)
        );
        assert_ne!(
            Color::from_rgba8(10, 20, 30, 255),
            Color::from_rgba8(10, 20, 31, 255)
        );
        assert_ne!(Color::BLACK, Color::NONE);
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{:?}", Color::RED), "#ff0000ff");
        assert_eq!(format!("{:?}", Color::from_rgba8(1, 2, 3, 4)), "#01020304");
    }
}
