use std::fmt;

/// An sRGB color with straight alpha, as handed to the 2D canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in 0.0..=1.0.
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a: a.clamp(0.0, 1.0), ..self }
    }

    /// CSS color string: `#rrggbb` when opaque, `rgba(r, g, b, a)` otherwise.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a >= 1.0 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_renders_as_hex() {
        assert_eq!(Rgba::rgb(0x5d, 0x8c, 0xf7).to_css(), "#5d8cf7");
    }

    #[test]
    fn translucent_renders_as_rgba() {
        assert_eq!(Rgba::rgb(30, 144, 255).with_alpha(0.8).to_css(), "rgba(30, 144, 255, 0.8)");
    }

    #[test]
    fn alpha_is_clamped() {
        assert_eq!(Rgba::rgb(1, 2, 3).with_alpha(4.0).a, 1.0);
        assert_eq!(Rgba::rgb(1, 2, 3).with_alpha(-1.0).a, 0.0);
    }
}
