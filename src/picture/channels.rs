use super::Picture;
use crate::color::Color;

/// Source of uniformly distributed values in `[0, 1)`.
pub trait UnitSource {
    fn next_unit(&mut self) -> f64;
}

impl<R: rand::Rng + ?Sized> UnitSource for R {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

impl Picture {
    pub fn zero_blue(&mut self) {
        for mut px in self.pixels_mut() {
            px.set_blue(0);
        }
    }

    pub fn keep_only_red(&mut self) {
        for mut px in self.pixels_mut() {
            px.set_green(0);
            px.set_blue(0);
        }
    }

    pub fn keep_only_blue(&mut self) {
        for mut px in self.pixels_mut() {
            px.set_green(0);
            px.set_red(0);
        }
    }

    pub fn negate(&mut self) {
        for mut px in self.pixels_mut() {
            let negated = px.color().negated();
            px.set_color(negated);
        }
    }

    /// Sets every channel to the truncated mean of the three.
    pub fn grayscale(&mut self) {
        for mut px in self.pixels_mut() {
            let gray = px.average();
            px.set_color(Color::new(gray, gray, gray));
        }
    }

    /// Zeroes one randomly chosen channel of every pixel.
    pub fn random_zero(&mut self) {
        self.random_zero_with(&mut rand::thread_rng());
    }

    /// Like [`random_zero`](Self::random_zero) but draws from `units`: a draw
    /// below 1/3 zeroes red, below 2/3 green, otherwise blue.
    pub fn random_zero_with<U: UnitSource + ?Sized>(&mut self, units: &mut U) {
        for mut px in self.pixels_mut() {
            let draw = units.next_unit() * 3.0;
            if draw < 1.0 {
                px.set_red(0);
            } else if draw < 2.0 {
                px.set_green(0);
            } else {
                px.set_blue(0);
            }
        }
    }

    /// Blue ramps from 0 at the left edge towards 255 at the right.
    pub fn gradient_blue(&mut self) {
        let width = self.width() as f64;
        for mut px in self.pixels_mut() {
            let blue = (255.0 * (px.col() as f64 / width)) as i32;
            px.set_blue(blue);
        }
    }
}
