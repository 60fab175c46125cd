use super::{Element, Surface, TextMetrics};
use crate::error::SurfaceError;
use crate::geometry::Point;
use crate::style::PhysicalSurface;
use crate::theme::{Color, FontFamily};

/// One primitive as issued to a [`RecordingSurface`], with the color and
/// line width current at the time.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Begin(Element),
    Clear,
    StrokeCircle {
        center: Point,
        radius: f64,
        width: f64,
        color: Color,
    },
    FillCircle {
        center: Point,
        radius: f64,
        color: Color,
    },
    StrokeLine {
        from: Point,
        to: Point,
        width: f64,
        color: Color,
    },
    FillText {
        text: String,
        at: Point,
        size: f64,
        max_width: f64,
        color: Color,
    },
}

/// Surface that draws nothing and remembers every call. Text metrics are
/// synthetic: glyphs are `0.6 * size` wide and `0.7 * size` tall, sitting on
/// the baseline.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    density: f64,
    color: Color,
    line_width: f64,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32, density: f64) -> Self {
        Self {
            width,
            height,
            density,
            color: Color::BLACK,
            line_width: 1.0,
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Elements in the order they were started.
    pub fn elements(&self) -> Vec<Element> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Begin(element) => Some(*element),
                _ => None,
            })
            .collect()
    }

    /// Primitives issued while `element` was being drawn.
    pub fn ops_for(&self, element: Element) -> Vec<&DrawOp> {
        let mut current = None;
        self.ops
            .iter()
            .filter(|op| {
                if let DrawOp::Begin(e) = op {
                    current = Some(*e);
                    return false;
                }
                current == Some(element)
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn density(&self) -> f64 {
        self.density
    }

    fn pixel_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn resize(&mut self, physical: &PhysicalSurface) -> Result<(), SurfaceError> {
        let side = physical.pixels();
        self.width = side;
        self.height = side;
        self.density = physical.density;
        Ok(())
    }

    fn begin(&mut self, element: Element) {
        self.ops.push(DrawOp::Begin(element));
    }

    fn clear(&mut self) -> Result<(), SurfaceError> {
        self.ops.push(DrawOp::Clear);
        Ok(())
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn stroke_circle(&mut self, center: Point, radius: f64) -> Result<(), SurfaceError> {
        self.ops.push(DrawOp::StrokeCircle {
            center,
            radius,
            width: self.line_width,
            color: self.color,
        });
        Ok(())
    }

    fn fill_circle(&mut self, center: Point, radius: f64) -> Result<(), SurfaceError> {
        self.ops.push(DrawOp::FillCircle {
            center,
            radius,
            color: self.color,
        });
        Ok(())
    }

    fn stroke_line(&mut self, from: Point, to: Point) -> Result<(), SurfaceError> {
        self.ops.push(DrawOp::StrokeLine {
            from,
            to,
            width: self.line_width,
            color: self.color,
        });
        Ok(())
    }

    fn measure_text(
        &mut self,
        text: &str,
        _font: &FontFamily,
        size: f64,
    ) -> Result<TextMetrics, SurfaceError> {
        Ok(TextMetrics {
            advance: 0.6 * size * text.chars().count() as f64,
            ascent: 0.7 * size,
            descent: 0.0,
        })
    }

    fn fill_text(
        &mut self,
        text: &str,
        at: Point,
        _font: &FontFamily,
        size: f64,
        max_width: f64,
    ) -> Result<(), SurfaceError> {
        self.ops.push(DrawOp::FillText {
            text: text.to_string(),
            at,
            size,
            max_width,
            color: self.color,
        });
        Ok(())
    }
}
