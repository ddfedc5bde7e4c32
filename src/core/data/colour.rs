#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    /// Builds a colour from channels in `0.0..=255.0`, rounding and saturating.
    #[must_use]
    pub fn from_channels([r, g, b]: [f64; 3]) -> Self {
        let channel = |value: f64| value.round().clamp(0.0, 255.0) as u8;

        Self {
            r: channel(r),
            g: channel(g),
            b: channel(b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_channels_rounds_and_saturates() {
        let colour = Colour::from_channels([-3.0, 127.6, 300.0]);

        assert_eq!(colour, Colour { r: 0, g: 128, b: 255 });
    }
}
