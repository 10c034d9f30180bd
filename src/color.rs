//! Plain RGB color value used when reading and writing pixels.
use image::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Builds a color from unchecked channel values, clamping each to [0, 255].
    pub fn clamped(red: i32, green: i32, blue: i32) -> Self {
        Self::new(clamp_channel(red), clamp_channel(green), clamp_channel(blue))
    }

    /// Integer mean of the three channels, truncated.
    pub fn average(&self) -> u8 {
        ((u32::from(self.red) + u32::from(self.green) + u32::from(self.blue)) / 3) as u8
    }

    /// Euclidean distance between two colors in RGB space.
    pub fn distance(&self, other: &Color) -> f64 {
        let dr = f64::from(self.red) - f64::from(other.red);
        let dg = f64::from(self.green) - f64::from(other.green);
        let db = f64::from(self.blue) - f64::from(other.blue);
        (dr * dr + dg * dg + db * db).sqrt()
    }

    pub fn negated(&self) -> Self {
        Self::new(255 - self.red, 255 - self.green, 255 - self.blue)
    }
}

#[inline]
pub(crate) fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

impl From<Rgb<u8>> for Color {
    fn from(px: Rgb<u8>) -> Self {
        Self::new(px[0], px[1], px[2])
    }
}

impl From<Color> for Rgb<u8> {
    fn from(c: Color) -> Self {
        Rgb([c.red, c.green, c.blue])
    }
}
