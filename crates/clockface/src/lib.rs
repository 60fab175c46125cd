//! Analog clock face rendering.
//!
//! [`style::build`] turns a nominal radius into a [`StyleConfiguration`] and
//! the [`PhysicalSurface`] it must be drawn on; [`render::render`] repaints a
//! [`Surface`] for one [`Instant`]. [`Clock`] ties both to an owned surface.

#[macro_use]
mod macros;

pub mod clock;
pub mod error;
pub mod geometry;
pub mod render;
pub mod style;
pub mod surface;
pub mod theme;
pub mod time;

pub use clock::Clock;
pub use error::{ClockError, SurfaceError};
pub use geometry::{Point, Turn};
pub use style::{PhysicalSurface, StyleConfiguration};
pub use surface::{CairoSurface, Element, RecordingSurface, Surface};
pub use theme::{Color, FontFamily, Theme};
pub use time::{HandTurns, Instant};
