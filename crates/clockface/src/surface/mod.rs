//! What the renderer needs from a drawing target.

use crate::error::SurfaceError;
use crate::geometry::Point;
use crate::style::PhysicalSurface;
use crate::theme::{Color, FontFamily};
use strum::{Display as StrumDisplay, EnumIter};

pub mod raster;
pub mod recording;

pub use raster::CairoSurface;
pub use recording::{DrawOp, RecordingSurface};

/// Face elements, in the order they are painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, StrumDisplay)]
#[strum(serialize_all = "kebab-case")]
pub enum Element {
    Frame,
    Numerals,
    Ticks,
    HourHand,
    MinuteHand,
    SecondHand,
    Cover,
}

/// Rendered glyph bounds of a string, in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextMetrics {
    pub advance: f64,
    /// Distance the ink reaches above the baseline.
    pub ascent: f64,
    /// Distance the ink reaches below the baseline.
    pub descent: f64,
}

impl TextMetrics {
    pub fn height(&self) -> f64 {
        self.ascent + self.descent
    }
}

/// Raster target in device pixels.
pub trait Surface {
    fn density(&self) -> f64;

    fn pixel_size(&self) -> (u32, u32);

    /// Displayed size in logical units.
    fn logical_size(&self) -> (f64, f64) {
        let (w, h) = self.pixel_size();
        let density = self.density();
        (f64::from(w) / density, f64::from(h) / density)
    }

    fn resize(&mut self, physical: &PhysicalSurface) -> Result<(), SurfaceError>;

    /// Marks the start of an element; for targets that group their output.
    fn begin(&mut self, _element: Element) {}

    fn clear(&mut self) -> Result<(), SurfaceError>;

    fn set_color(&mut self, color: Color);

    fn set_line_width(&mut self, width: f64);

    fn stroke_circle(&mut self, center: Point, radius: f64) -> Result<(), SurfaceError>;

    fn fill_circle(&mut self, center: Point, radius: f64) -> Result<(), SurfaceError>;

    fn stroke_line(&mut self, from: Point, to: Point) -> Result<(), SurfaceError>;

    fn measure_text(
        &mut self,
        text: &str,
        font: &FontFamily,
        size: f64,
    ) -> Result<TextMetrics, SurfaceError>;

    /// Fills `text` centered horizontally on `at.x` with its baseline on
    /// `at.y`, squeezed horizontally when wider than `max_width`.
    fn fill_text(
        &mut self,
        text: &str,
        at: Point,
        font: &FontFamily,
        size: f64,
        max_width: f64,
    ) -> Result<(), SurfaceError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_element_order_and_names() {
        let names: Vec<String> = Element::iter().map(|e| e.to_string()).collect();
        assert_eq!(
            names,
            [
                "frame",
                "numerals",
                "ticks",
                "hour-hand",
                "minute-hand",
                "second-hand",
                "cover"
            ]
        );
        let sorted = {
            let mut all: Vec<Element> = Element::iter().collect();
            all.sort();
            all
        };
        assert_eq!(sorted, Element::iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_logical_size_divides_density() {
        let surface = RecordingSurface::new(300, 200, 2.0);
        assert_eq!(surface.logical_size(), (150.0, 100.0));
    }
}
