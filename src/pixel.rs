use image::Rgb;

use crate::color::{clamp_channel, Color};

/// Write-through view of one cell of a [`Picture`](crate::Picture).
///
/// Obtained from [`Picture::pixel`](crate::Picture::pixel); every setter
/// writes straight into the picture's raster.
#[derive(Debug)]
pub struct Pixel<'a> {
    row: usize,
    col: usize,
    rgb: &'a mut Rgb<u8>,
}

impl<'a> Pixel<'a> {
    pub(crate) fn new(row: usize, col: usize, rgb: &'a mut Rgb<u8>) -> Self {
        Self { row, col, rgb }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn red(&self) -> u8 {
        self.rgb[0]
    }

    pub fn green(&self) -> u8 {
        self.rgb[1]
    }

    pub fn blue(&self) -> u8 {
        self.rgb[2]
    }

    pub fn set_red(&mut self, value: i32) {
        self.rgb[0] = clamp_channel(value);
    }

    pub fn set_green(&mut self, value: i32) {
        self.rgb[1] = clamp_channel(value);
    }

    pub fn set_blue(&mut self, value: i32) {
        self.rgb[2] = clamp_channel(value);
    }

    pub fn color(&self) -> Color {
        (*self.rgb).into()
    }

    pub fn set_color(&mut self, color: Color) {
        *self.rgb = color.into();
    }

    pub fn average(&self) -> u8 {
        self.color().average()
    }

    pub fn color_distance(&self, other: &Color) -> f64 {
        self.color().distance(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_clamp_and_write_through() {
        let mut rgb = Rgb([10, 20, 30]);
        {
            let mut px = Pixel::new(1, 2, &mut rgb);
            px.set_red(-10);
            px.set_green(999);
            px.set_blue(42);
            assert_eq!((px.row(), px.col()), (1, 2));
            assert_eq!(px.color(), Color::new(0, 255, 42));
        }
        assert_eq!(rgb, Rgb([0, 255, 42]));
    }

    #[test]
    fn color_distance_compares_against_the_cell() {
        let mut rgb = Rgb([0, 0, 0]);
        let px = Pixel::new(0, 0, &mut rgb);
        assert!((px.color_distance(&Color::new(3, 4, 0)) - 5.0).abs() < 1e-12);
        assert_eq!(px.color_distance(&Color::BLACK), 0.0);
    }

    #[test]
    fn set_color_replaces_all_channels() {
        let mut rgb = Rgb([1, 2, 3]);
        Pixel::new(0, 0, &mut rgb).set_color(Color::WHITE);
        assert_eq!(rgb, Rgb([255, 255, 255]));
    }
}
