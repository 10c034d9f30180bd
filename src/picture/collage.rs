use std::path::Path;

use super::{Picture, UnitSource};
use crate::error::Result;

/// Fixture photo the collage is assembled from.
pub const COLLAGE_SOURCE: &str = "JumpingLamb.jpg";
/// Canvas that fits two rows of three fixture-sized panels.
pub const COLLAGE_HEIGHT: usize = 552;
pub const COLLAGE_WIDTH: usize = 1380;

impl Picture {
    /// Composites six variations of the fixture photo at `source` into this
    /// picture.
    pub fn create_collage<P: AsRef<Path>>(&mut self, source: P) -> Result<()> {
        self.create_collage_with(source, &mut rand::thread_rng())
    }

    /// [`create_collage`](Self::create_collage) with an explicit random
    /// source for the randomly zeroed panel.
    pub fn create_collage_with<P, U>(&mut self, source: P, units: &mut U) -> Result<()>
    where
        P: AsRef<Path>,
        U: UnitSource + ?Sized,
    {
        const TOP: usize = 0;
        const BOTTOM: usize = 276;
        const LEFT: usize = 0;
        const MIDDLE: usize = 460;
        const RIGHT: usize = 920;

        let original = Picture::open(source)?;
        log::debug!("Building collage from {original}");

        self.copy(&original, TOP, LEFT);

        let mut panel = original.clone();
        panel.reverse_vertical(&original)?;
        panel.gradient_blue();
        self.copy(&panel, BOTTOM, LEFT);

        let mut flipped = original.clone();
        flipped.reverse_horizontal(&original)?;

        let mut panel = original.clone();
        panel.mirror_vertical_right_to_left();
        panel.mirror_horizontal();
        self.copy(&panel, TOP, MIDDLE);

        let mut panel = original.clone();
        panel.reverse_horizontal(&original)?;
        panel.two_head()?;
        self.copy(&panel, TOP, RIGHT);

        let mut panel = original.clone();
        panel.reverse_vertical(&original)?;
        panel.mirror_vertical_right_to_left();
        self.copy(&panel, BOTTOM, MIDDLE);

        let mut panel = original.clone();
        panel.reverse_vertical(&flipped)?;
        panel.random_zero_with(units);
        self.copy(&panel, BOTTOM, RIGHT);

        log::debug!("Collage done: {self}");
        Ok(())
    }
}
