use derive_more::{Display, Into};
use std::f64::consts::{FRAC_PI_2, TAU};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, (dx, dy): (f64, f64)) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Fraction of a clockwise revolution starting at 12 o'clock.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Display, Into)]
pub struct Turn(f64);

impl Turn {
    pub const ZERO: Turn = Turn(0.0);

    /// Wraps `value` into `[0, 1)`.
    pub fn new(value: f64) -> Self {
        Self(value.rem_euclid(1.0))
    }

    /// Position `index` of `count` evenly spaced marks, without wrapping, so
    /// the last mark sits at a full turn.
    pub fn of(index: u32, count: u32) -> Self {
        Self(f64::from(index) / f64::from(count))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Drawing angle in radians, 0 pointing right and growing clockwise in
    /// screen coordinates.
    pub fn angle(self) -> f64 {
        self.0 * TAU - FRAC_PI_2
    }

    /// Offset from the center for hands, the cover and numerals.
    pub fn hand_offset(self, distance: f64) -> (f64, f64) {
        let angle = self.angle();
        (angle.cos() * distance, angle.sin() * distance)
    }

    /// Offset from the center for tick marks. The axes are swapped relative
    /// to [`Turn::hand_offset`]; the tick set is symmetric so the face looks
    /// the same either way.
    pub fn tick_offset(self, distance: f64) -> (f64, f64) {
        let angle = self.angle();
        (angle.sin() * distance, angle.cos() * distance)
    }
}
