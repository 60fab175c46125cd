use super::{Surface, TextMetrics};
use crate::error::SurfaceError;
use crate::geometry::Point;
use crate::style::PhysicalSurface;
use crate::theme::{Color, FontFamily};
use cairo::{Context, FontSlant, FontWeight, Format, ImageSurface, Operator};
use palette::Srgba;
use std::f64::consts::PI;
use std::io::Write;

/// ARGB32 image surface with its drawing context, owned for the lifetime of
/// a clock and recreated on resize.
pub struct CairoSurface {
    surface: ImageSurface,
    cr: Context,
    density: f64,
}

impl CairoSurface {
    pub fn new(width: u32, height: u32, density: f64) -> Result<Self, SurfaceError> {
        let (surface, cr) = Self::allocate(width, height)?;
        Ok(Self {
            surface,
            cr,
            density,
        })
    }

    pub fn for_physical(physical: &PhysicalSurface) -> Result<Self, SurfaceError> {
        let side = physical.pixels();
        Self::new(side, side, physical.density)
    }

    fn allocate(width: u32, height: u32) -> Result<(ImageSurface, Context), SurfaceError> {
        let surface = ImageSurface::create(
            Format::ARgb32,
            i32::try_from(width).unwrap_or(i32::MAX),
            i32::try_from(height).unwrap_or(i32::MAX),
        )?;
        let cr = Context::new(&surface)?;
        Ok((surface, cr))
    }

    pub fn write_png<W: Write>(&self, out: &mut W) -> Result<(), SurfaceError> {
        self.surface.flush();
        self.surface.write_to_png(out)?;
        Ok(())
    }

    /// Reads back one pixel, un-premultiplied.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Srgba<u8>> {
        let (width, height) = self.pixel_size();
        if x >= width || y >= height {
            return None;
        }
        self.surface.flush();

        let stride = usize::try_from(self.surface.stride()).ok()?;
        let offset = y as usize * stride + x as usize * 4;
        let mut word = None;
        self.surface
            .with_data(|data| {
                word = data
                    .get(offset..offset + 4)
                    .and_then(|bytes| bytes.try_into().ok())
                    .map(u32::from_ne_bytes);
            })
            .ok()?;

        let word = word?;
        let channel = |shift: u32| ((word >> shift) & 0xff) as u8;
        let alpha = channel(24);
        let unpremultiply = |c: u8| match alpha {
            0 => 0,
            a => ((u32::from(c) * 255 + u32::from(a) / 2) / u32::from(a)) as u8,
        };
        Some(Srgba::new(
            unpremultiply(channel(16)),
            unpremultiply(channel(8)),
            unpremultiply(channel(0)),
            alpha,
        ))
    }

    fn select_font(&self, font: &FontFamily, size: f64) {
        self.cr
            .select_font_face(font.as_str(), FontSlant::Normal, FontWeight::Normal);
        self.cr.set_font_size(size);
    }

    fn circle(&self, center: Point, radius: f64) {
        self.cr.new_path();
        self.cr.arc(center.x, center.y, radius, 0.0, 2.0 * PI);
        self.cr.close_path();
    }
}

impl Surface for CairoSurface {
    fn density(&self) -> f64 {
        self.density
    }

    fn pixel_size(&self) -> (u32, u32) {
        (
            u32::try_from(self.surface.width()).unwrap_or_default(),
            u32::try_from(self.surface.height()).unwrap_or_default(),
        )
    }

    fn resize(&mut self, physical: &PhysicalSurface) -> Result<(), SurfaceError> {
        let side = physical.pixels();
        if self.pixel_size() != (side, side) {
            let (surface, cr) = Self::allocate(side, side)?;
            self.surface = surface;
            self.cr = cr;
        }
        self.density = physical.density;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), SurfaceError> {
        self.cr.save()?;
        self.cr.set_operator(Operator::Clear);
        self.cr.paint()?;
        self.cr.restore()?;
        Ok(())
    }

    fn set_color(&mut self, color: Color) {
        let (r, g, b, a) = color.components();
        self.cr.set_source_rgba(r, g, b, a);
    }

    fn set_line_width(&mut self, width: f64) {
        self.cr.set_line_width(width);
    }

    fn stroke_circle(&mut self, center: Point, radius: f64) -> Result<(), SurfaceError> {
        self.circle(center, radius);
        Ok(self.cr.stroke()?)
    }

    fn fill_circle(&mut self, center: Point, radius: f64) -> Result<(), SurfaceError> {
        self.circle(center, radius);
        Ok(self.cr.fill()?)
    }

    fn stroke_line(&mut self, from: Point, to: Point) -> Result<(), SurfaceError> {
        self.cr.new_path();
        self.cr.move_to(from.x, from.y);
        self.cr.line_to(to.x, to.y);
        Ok(self.cr.stroke()?)
    }

    fn measure_text(
        &mut self,
        text: &str,
        font: &FontFamily,
        size: f64,
    ) -> Result<TextMetrics, SurfaceError> {
        self.select_font(font, size);
        let ext = self.cr.text_extents(text)?;
        Ok(TextMetrics {
            advance: ext.x_advance(),
            ascent: -ext.y_bearing(),
            descent: ext.height() + ext.y_bearing(),
        })
    }

    fn fill_text(
        &mut self,
        text: &str,
        at: Point,
        font: &FontFamily,
        size: f64,
        max_width: f64,
    ) -> Result<(), SurfaceError> {
        self.select_font(font, size);
        let advance = self.cr.text_extents(text)?.x_advance();

        self.cr.save()?;
        self.cr.translate(at.x, at.y);
        if advance > max_width && advance > 0.0 {
            self.cr.scale(max_width / advance, 1.0);
        }
        self.cr.new_path();
        self.cr.move_to(-advance / 2.0, 0.0);
        self.cr.show_text(text)?;
        self.cr.restore()?;
        Ok(())
    }
}
