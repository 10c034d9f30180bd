//! Whole-picture mirrors and the region mirrors written for particular
//! fixture photos (temple, snowman, seagull, lamb).
use super::Picture;
use crate::error::Result;

impl Picture {
    /// Copies the left half onto the right half.
    pub fn mirror_vertical(&mut self) {
        let width = self.width();
        for row in 0..self.height() {
            for col in 0..width / 2 {
                let left = self.get(row, col);
                self.put(row, width - 1 - col, left);
            }
        }
    }

    /// Copies the right half onto the left half.
    pub fn mirror_vertical_right_to_left(&mut self) {
        let width = self.width();
        for row in 0..self.height() {
            for col in 0..width / 2 {
                let right = self.get(row, width - 1 - col);
                self.put(row, col, right);
            }
        }
    }

    /// Copies the top half onto the bottom half.
    pub fn mirror_horizontal(&mut self) {
        let height = self.height();
        for row in 0..height / 2 {
            for col in 0..self.width() {
                let top = self.get(row, col);
                self.put(height - 1 - row, col, top);
            }
        }
    }

    /// Copies the bottom half onto the top half.
    pub fn mirror_horizontal_bot_to_top(&mut self) {
        let height = self.height();
        for row in 0..height / 2 {
            for col in 0..self.width() {
                let bottom = self.get(height - 1 - row, col);
                self.put(row, col, bottom);
            }
        }
    }

    /// Mirrors the temple roof of `temple.jpg` around column 276.
    pub fn mirror_temple(&mut self) -> Result<()> {
        const MIRROR_POINT: usize = 276;
        const ROWS: std::ops::Range<usize> = 27..97;
        const FIRST_COL: usize = 13;

        // Column 13 lands furthest right.
        self.check_region(ROWS, FIRST_COL..2 * MIRROR_POINT - FIRST_COL + 1)?;
        for row in ROWS {
            for col in FIRST_COL..MIRROR_POINT {
                let left = self.get(row, col);
                self.put(row, 2 * MIRROR_POINT - col, left);
            }
        }
        Ok(())
    }

    /// Mirrors both arms of `snowman.jpg` below row 194.
    pub fn mirror_arms(&mut self) -> Result<()> {
        const MIRROR_POINT: usize = 194;
        const FIRST_ROW: usize = 163;
        const LEFT_ARM: std::ops::Range<usize> = 105..172;
        const RIGHT_ARM: std::ops::Range<usize> = 237..294;

        // Row 163 lands lowest.
        let rows = FIRST_ROW..2 * MIRROR_POINT - FIRST_ROW + 1;
        self.check_region(rows.clone(), LEFT_ARM)?;
        self.check_region(rows, RIGHT_ARM)?;
        for cols in [LEFT_ARM, RIGHT_ARM] {
            for row in FIRST_ROW..MIRROR_POINT {
                for col in cols.clone() {
                    let top = self.get(row, col);
                    self.put(2 * MIRROR_POINT - row, col, top);
                }
            }
        }
        Ok(())
    }

    /// Stamps a second seagull onto `seagull.jpg`, shifted down and right.
    pub fn mirror_gull(&mut self) -> Result<()> {
        const ROWS: std::ops::Range<usize> = 233..318;
        const COLS: std::ops::Range<usize> = 238..344;
        const ROW_SHIFT: usize = 10;
        const COL_SHIFT: usize = 110;

        self.check_region(ROWS, COLS)?;
        self.check_region(
            ROWS.start + ROW_SHIFT..ROWS.end + ROW_SHIFT,
            COLS.start + COL_SHIFT..COLS.end + COL_SHIFT,
        )?;
        for row in ROWS {
            for col in COLS {
                let gull = self.get(row, col);
                self.put(row + ROW_SHIFT, col + COL_SHIFT, gull);
            }
        }
        Ok(())
    }

    /// Gives the lamb in `JumpingLamb.jpg` a second head by reflecting
    /// columns 157..256 leftwards from column 157.
    pub fn two_head(&mut self) -> Result<()> {
        const ROWS: std::ops::Range<usize> = 7..167;
        const COLS: std::ops::Range<usize> = 157..256;
        const ANCHOR: usize = 157;

        self.check_region(ROWS, COLS)?;
        for row in ROWS {
            for (offset, col) in COLS.enumerate() {
                let head = self.get(row, col);
                self.put(row, ANCHOR - offset, head);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::error::PictureError;
    use crate::picture::tests::indexed;

    #[test]
    fn vertical_mirrors_overwrite_opposite_halves() {
        let original = indexed(2, 5);

        let mut p = original.clone();
        p.mirror_vertical();
        for row in 0..2 {
            for col in 0..5 {
                let expected = original.color_at(row, col.min(4 - col)).unwrap();
                assert_eq!(p.color_at(row, col).unwrap(), expected);
            }
        }

        let mut q = original.clone();
        q.mirror_vertical_right_to_left();
        for row in 0..2 {
            for col in 0..5 {
                let expected = original.color_at(row, col.max(4 - col)).unwrap();
                assert_eq!(q.color_at(row, col).unwrap(), expected);
            }
        }
    }

    #[test]
    fn vertical_mirrors_do_not_undo_each_other() {
        let original = indexed(1, 4);
        let mut p = original.clone();
        p.mirror_vertical();
        p.mirror_vertical_right_to_left();
        // The right half now holds the old left half, and it flows back.
        assert_eq!(p.color_at(0, 0).unwrap(), original.color_at(0, 0).unwrap());
        assert_eq!(p.color_at(0, 3).unwrap(), original.color_at(0, 0).unwrap());
        assert_ne!(p, original);
    }

    #[test]
    fn odd_width_center_column_is_untouched() {
        let mut p = indexed(1, 3);
        p.set_color_at(0, 1, Color::BLACK).unwrap();
        p.mirror_vertical();
        assert_eq!(p.color_at(0, 1).unwrap(), Color::BLACK);
        p.mirror_vertical_right_to_left();
        assert_eq!(p.color_at(0, 1).unwrap(), Color::BLACK);
    }

    #[test]
    fn odd_height_center_row_is_untouched() {
        let original = indexed(3, 2);
        let mut p = original.clone();
        p.set_color_at(1, 0, Color::BLACK).unwrap();
        p.mirror_horizontal();
        assert_eq!(p.color_at(1, 0).unwrap(), Color::BLACK);
        assert_eq!(p.color_at(1, 1).unwrap(), original.color_at(1, 1).unwrap());
        assert_eq!(p.color_at(2, 1).unwrap(), original.color_at(0, 1).unwrap());

        p.mirror_horizontal_bot_to_top();
        assert_eq!(p.color_at(1, 0).unwrap(), Color::BLACK);
        assert_eq!(p.color_at(1, 1).unwrap(), original.color_at(1, 1).unwrap());
    }

    #[test]
    fn horizontal_mirrors_overwrite_opposite_halves() {
        let original = indexed(4, 2);

        let mut p = original.clone();
        p.mirror_horizontal();
        assert_eq!(p.color_at(3, 1).unwrap(), original.color_at(0, 1).unwrap());
        assert_eq!(p.color_at(2, 0).unwrap(), original.color_at(1, 0).unwrap());
        assert_eq!(p.color_at(0, 0).unwrap(), original.color_at(0, 0).unwrap());

        let mut q = original.clone();
        q.mirror_horizontal_bot_to_top();
        assert_eq!(q.color_at(0, 1).unwrap(), original.color_at(3, 1).unwrap());
        assert_eq!(q.color_at(3, 1).unwrap(), original.color_at(3, 1).unwrap());
    }

    #[test]
    fn mirrors_on_empty_pictures_are_noops() {
        let mut p = Picture::new(0, 0);
        p.mirror_vertical();
        p.mirror_horizontal();
        assert_eq!(p, Picture::new(0, 0));
    }

    #[test]
    fn temple_reflects_around_column_276() {
        let mut p = indexed(100, 540);
        p.mirror_temple().unwrap();
        let source = indexed(100, 540);
        assert_eq!(p.color_at(27, 539).unwrap(), source.color_at(27, 13).unwrap());
        assert_eq!(p.color_at(96, 277).unwrap(), source.color_at(96, 275).unwrap());
        assert_eq!(p.color_at(27, 276).unwrap(), source.color_at(27, 276).unwrap());
        assert_eq!(p.color_at(26, 539).unwrap(), source.color_at(26, 539).unwrap());
    }

    #[test]
    fn temple_too_small_is_rejected_untouched() {
        let mut p = indexed(100, 539);
        let before = p.clone();
        assert!(matches!(p.mirror_temple(), Err(PictureError::OutOfBounds { .. })));
        assert_eq!(p, before);
    }

    #[test]
    fn arms_reflect_below_row_194() {
        let source = indexed(226, 294);
        let mut p = source.clone();
        p.mirror_arms().unwrap();
        assert_eq!(p.color_at(225, 105).unwrap(), source.color_at(163, 105).unwrap());
        assert_eq!(p.color_at(195, 293).unwrap(), source.color_at(193, 293).unwrap());
        // Between the arms nothing moves.
        assert_eq!(p.color_at(225, 200).unwrap(), source.color_at(225, 200).unwrap());
        assert!(indexed(225, 294).mirror_arms().is_err());
    }

    #[test]
    fn gull_is_shifted_copy() {
        let source = indexed(328, 454);
        let mut p = source.clone();
        p.mirror_gull().unwrap();
        assert_eq!(p.color_at(243, 348).unwrap(), source.color_at(233, 238).unwrap());
        assert_eq!(p.color_at(327, 453).unwrap(), source.color_at(317, 343).unwrap());
        assert!(indexed(328, 453).mirror_gull().is_err());
    }

    #[test]
    fn two_head_reflects_leftwards() {
        let source = indexed(167, 256);
        let mut p = source.clone();
        p.two_head().unwrap();
        assert_eq!(p.color_at(7, 157).unwrap(), source.color_at(7, 157).unwrap());
        assert_eq!(p.color_at(7, 59).unwrap(), source.color_at(7, 255).unwrap());
        assert_eq!(p.color_at(100, 150).unwrap(), source.color_at(100, 164).unwrap());
        assert_eq!(p.color_at(6, 59).unwrap(), source.color_at(6, 59).unwrap());
        assert!(indexed(166, 256).two_head().is_err());
    }
}
