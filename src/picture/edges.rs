use super::Picture;
use crate::color::Color;

impl Picture {
    /// Paints each pixel black where its color differs from its right
    /// neighbour by more than `edge_dist`, white otherwise. The last column
    /// is left as is.
    pub fn edge_detection(&mut self, edge_dist: i32) {
        let limit = f64::from(edge_dist);
        for row in 0..self.height() {
            for col in 0..self.width().saturating_sub(1) {
                let right = self.get(row, col + 1);
                let mut left = self.pixel_unchecked(row, col);
                if left.color_distance(&right) > limit {
                    left.set_color(Color::BLACK);
                } else {
                    left.set_color(Color::WHITE);
                }
            }
        }
    }
}
