//! Face renderer: one complete repaint per call.
//!
//! Paint order is frame, numerals, ticks, hour hand, minute hand, second
//! hand, cover; each element occludes the ones before it. All logical
//! dimensions are multiplied by the density before they reach the surface.

use crate::error::SurfaceError;
use crate::geometry::{Point, Turn};
use crate::style::{ArmStyle, PhysicalSurface, StyleConfiguration, TickStyle};
use crate::surface::{Element, Surface};
use crate::time::{HandTurns, Instant};

const HOURS_ON_DIAL: u32 = 12;
const TICKS_ON_DIAL: u32 = 60;

struct FaceRenderer<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
    style: &'a StyleConfiguration,
    center: Point,
    buffer_radius: f64,
    density: f64,
}

impl<'a, S: Surface + ?Sized> FaceRenderer<'a, S> {
    fn new(surface: &'a mut S, style: &'a StyleConfiguration, physical: &PhysicalSurface) -> Self {
        Self {
            surface,
            style,
            center: physical.center,
            buffer_radius: physical.buffer_radius(),
            density: physical.density,
        }
    }

    fn draw(&mut self, instant: Instant) -> Result<(), SurfaceError> {
        self.surface.clear()?;

        self.draw_frame()?;
        if self.style.numbers.show {
            self.draw_numbers()?;
        }
        if self.style.ticks.show {
            self.draw_ticks()?;
        }

        let style = self.style;
        let arms = &style.arms;
        let turns = HandTurns::at(instant, arms.seconds.continuous);

        self.draw_arm(Element::HourHand, turns.hours, &arms.hours)?;
        self.draw_arm(Element::MinuteHand, turns.minutes, &arms.minutes)?;
        if arms.seconds.show {
            self.draw_arm(Element::SecondHand, turns.seconds, &arms.seconds.arm)?;
        }
        if arms.cover.show {
            self.draw_cover()?;
        }
        Ok(())
    }

    fn begin(&mut self, element: Element) {
        log::trace!("drawing {element}");
        self.surface.begin(element);
    }

    /// The fill goes on after the stroke and covers its inner half.
    fn draw_frame(&mut self) -> Result<(), SurfaceError> {
        self.begin(Element::Frame);
        let frame = &self.style.frame;
        let radius = self.buffer_radius - frame.offset * self.density;

        self.surface.set_line_width(frame.width * self.density);
        self.surface.set_color(frame.border);
        self.surface.stroke_circle(self.center, radius)?;

        self.surface.set_color(frame.background);
        self.surface.fill_circle(self.center, radius)
    }

    /// Vertical placement uses the measured ink height of each numeral so
    /// digits sit centered whatever the font metrics claim.
    fn draw_numbers(&mut self) -> Result<(), SurfaceError> {
        self.begin(Element::Numerals);
        let numbers = &self.style.numbers;
        let size = numbers.size * self.density;
        let radius = numbers.radius * self.density;

        self.surface.set_color(numbers.color);
        for n in 1..=HOURS_ON_DIAL {
            let text = n.to_string();
            let height = self
                .surface
                .measure_text(&text, &numbers.font, size)?
                .height();

            let angle = Turn::of(n, HOURS_ON_DIAL).angle();
            let at = Point::new(
                self.center.x + angle.cos() * (radius - size / 4.0),
                self.center.y + angle.sin() * (radius - height) + height / 2.0,
            );
            self.surface
                .fill_text(&text, at, &numbers.font, size, size)?;
        }
        Ok(())
    }

    fn draw_ticks(&mut self) -> Result<(), SurfaceError> {
        self.begin(Element::Ticks);
        let style = self.style;
        let ticks = &style.ticks;
        for i in 1..=TICKS_ON_DIAL {
            self.draw_tick(Turn::of(i, TICKS_ON_DIAL), ticks.for_index(i))?;
        }
        Ok(())
    }

    fn draw_tick(&mut self, turn: Turn, tick: &TickStyle) -> Result<(), SurfaceError> {
        let offset = self.style.ticks.offset * self.density;
        let length = tick.length * self.density;
        let outer = self.buffer_radius - offset;

        let from = self.center.offset(turn.tick_offset(outer - length));
        let to = self.center.offset(turn.tick_offset(outer));

        self.surface.set_line_width(tick.width * self.density);
        self.surface.set_color(tick.color);
        self.surface.stroke_line(from, to)
    }

    fn draw_arm(&mut self, element: Element, turn: Turn, arm: &ArmStyle) -> Result<(), SurfaceError> {
        self.begin(element);
        let tip = self
            .center
            .offset(turn.hand_offset(arm.length * self.density));

        self.surface.set_line_width(arm.width * self.density);
        self.surface.set_color(arm.color);
        self.surface.stroke_line(self.center, tip)
    }

    fn draw_cover(&mut self) -> Result<(), SurfaceError> {
        self.begin(Element::Cover);
        let cover = &self.style.arms.cover;
        self.surface.set_color(cover.color);
        self.surface
            .fill_circle(self.center, cover.width * self.density)
    }
}

/// Clears `surface` and paints the whole face for `instant`.
pub fn render<S: Surface + ?Sized>(
    surface: &mut S,
    style: &StyleConfiguration,
    physical: &PhysicalSurface,
    instant: Instant,
) -> Result<(), SurfaceError> {
    FaceRenderer::new(surface, style, physical).draw(instant)
}
