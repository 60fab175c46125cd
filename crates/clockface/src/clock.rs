use crate::error::{ClockError, SurfaceError};
use crate::geometry::Point;
use crate::render;
use crate::style::{self, DEFAULT_RADIUS, PhysicalSurface, StyleConfiguration};
use crate::surface::{CairoSurface, Surface};
use crate::theme::Theme;
use crate::time::Instant;

/// A face bound to the surface it paints on.
///
/// The style and the surface geometry are rebuilt together on every resize
/// or theme change and never updated piecemeal.
pub struct Clock<S: Surface = CairoSurface> {
    surface: S,
    theme: Theme,
    options: StyleConfiguration,
    physical: PhysicalSurface,
}

impl Clock<CairoSurface> {
    /// Creates its own image surface for a face of the default radius.
    pub fn new(density: f64) -> Result<Self, ClockError> {
        Self::themed(Theme::default(), density)
    }

    pub fn themed(theme: Theme, density: f64) -> Result<Self, ClockError> {
        Self::sized(DEFAULT_RADIUS, density, theme)
    }

    /// Creates its own image surface, allocated once at `radius`.
    pub fn sized(radius: f64, density: f64, theme: Theme) -> Result<Self, ClockError> {
        let (options, physical) = style::build_themed(radius, density, &theme)?;
        let surface =
            CairoSurface::for_physical(&physical).map_err(ClockError::SurfaceUnavailable)?;
        Ok(Self {
            surface,
            theme,
            options,
            physical,
        })
    }
}

impl<S: Surface> Clock<S> {
    /// Adopts an existing surface; the face radius is half the shorter side
    /// of its displayed size, and the surface is then resized to fit the
    /// face and its frame.
    pub fn with_surface(surface: S) -> Result<Self, ClockError> {
        Self::with_surface_themed(surface, Theme::default())
    }

    pub fn with_surface_themed(mut surface: S, theme: Theme) -> Result<Self, ClockError> {
        let (width, height) = surface.logical_size();
        let radius = width.min(height) / 2.0;
        let (options, physical) = style::build_themed(radius, surface.density(), &theme)?;
        surface
            .resize(&physical)
            .map_err(ClockError::SurfaceUnavailable)?;
        Ok(Self {
            surface,
            theme,
            options,
            physical,
        })
    }

    /// Any positive finite radius is accepted. With [`CairoSurface`] the
    /// buffer side must stay within cairo's 32767 pixel limit, otherwise the
    /// resize fails with [`ClockError::SurfaceUnavailable`].
    pub fn set_radius(&mut self, radius: f64) -> Result<(), ClockError> {
        self.rebuild(radius, self.theme.clone())
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<(), ClockError> {
        self.rebuild(self.options.radius, theme)
    }

    fn rebuild(&mut self, radius: f64, theme: Theme) -> Result<(), ClockError> {
        let (options, physical) = style::build_themed(radius, self.surface.density(), &theme)?;
        self.surface
            .resize(&physical)
            .map_err(ClockError::SurfaceUnavailable)?;
        log::debug!(
            "clock rebuilt: radius {radius}, buffer {}px",
            physical.pixels()
        );
        self.theme = theme;
        self.options = options;
        self.physical = physical;
        Ok(())
    }

    pub fn draw(&mut self, instant: Instant) -> Result<(), ClockError> {
        self.paint(instant).map_err(ClockError::Draw)
    }

    fn paint(&mut self, instant: Instant) -> Result<(), SurfaceError> {
        render::render(&mut self.surface, &self.options, &self.physical, instant)
    }

    pub fn options(&self) -> &StyleConfiguration {
        &self.options
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn center(&self) -> Point {
        self.physical.center
    }

    pub fn physical(&self) -> &PhysicalSurface {
        &self.physical
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{Element, RecordingSurface};
    use crate::theme::Color;
    use palette::Srgba;

    fn hms(h: u32, m: u32, s: u32) -> Instant {
        Instant::from_hms(h, m, s).unwrap()
    }

    #[test]
    fn test_default_clock() {
        let clock = Clock::new(1.0).unwrap();
        assert_eq!(clock.options().radius, 200.0);
        assert_eq!(clock.center(), Point::new(206.0, 206.0));
        assert_eq!(clock.surface().pixel_size(), (412, 412));
    }

    #[test]
    fn test_sized_clock_allocates_target_radius() {
        let clock = Clock::sized(50.0, 2.0, Theme::default()).unwrap();
        assert_eq!(clock.options().radius, 50.0);
        assert_eq!(clock.surface().pixel_size(), (206, 206));
        assert!(matches!(
            Clock::sized(0.0, 1.0, Theme::default()),
            Err(ClockError::InvalidRadius(_))
        ));
    }

    #[test]
    fn test_oversized_cairo_buffer_is_unavailable() {
        let mut clock = Clock::new(1.0).unwrap();
        assert!(matches!(
            clock.set_radius(20_000.0),
            Err(ClockError::SurfaceUnavailable(_))
        ));
        assert_eq!(clock.options().radius, 200.0);
    }

    #[test]
    fn test_radius_from_surface() {
        let surface = RecordingSurface::new(600, 400, 2.0);
        let clock = Clock::with_surface(surface).unwrap();
        assert_eq!(clock.options().radius, 100.0);
        assert_eq!(clock.physical().logical_side, 206.0);
        assert_eq!(clock.surface().pixel_size(), (412, 412));
    }

    #[test]
    fn test_empty_surface_is_rejected() {
        let surface = RecordingSurface::new(0, 0, 1.0);
        assert!(matches!(
            Clock::with_surface(surface),
            Err(ClockError::InvalidRadius(_))
        ));
    }

    #[test]
    fn test_set_radius_rebuilds_everything() {
        let mut clock = Clock::with_surface(RecordingSurface::new(200, 200, 1.0)).unwrap();
        clock.set_radius(50.0).unwrap();
        assert_eq!(clock.options().radius, 50.0);
        assert_eq!(clock.options().frame.width, 1.5);
        assert_eq!(clock.center(), Point::new(51.5, 51.5));
        assert_eq!(clock.surface().pixel_size(), (103, 103));
    }

    #[test]
    fn test_failed_resize_keeps_previous_state() {
        let mut clock = Clock::with_surface(RecordingSurface::new(200, 200, 1.0)).unwrap();
        let before = clock.options().clone();
        assert!(clock.set_radius(-3.0).is_err());
        assert!(clock.set_radius(f64::NAN).is_err());
        assert_eq!(clock.options(), &before);
    }

    #[test]
    fn test_set_theme_keeps_radius() {
        let mut clock = Clock::with_surface(RecordingSurface::new(300, 300, 1.0)).unwrap();
        let theme = Theme {
            seconds: Color::BLACK,
            ..Theme::default()
        };
        clock.set_theme(theme).unwrap();
        assert_eq!(clock.options().radius, 150.0);
        assert_eq!(clock.options().arms.seconds.arm.color, Color::BLACK);
    }

    #[test]
    fn test_draw_after_any_resize() {
        let mut clock = Clock::with_surface(RecordingSurface::new(100, 100, 3.0)).unwrap();
        for radius in [0.5, 10.0, 123.4, 999.0] {
            clock.set_radius(radius).unwrap();
            clock.draw(hms(12, 34, 56)).unwrap();
        }
        let elements = clock.surface().elements();
        assert_eq!(elements.len(), 7 * 4);
        assert_eq!(elements.last(), Some(&Element::Cover));
    }

    #[test]
    fn test_cairo_face_pixels() {
        let mut clock = Clock::new(2.0).unwrap();
        clock.draw(hms(0, 0, 15)).unwrap();
        let surface = clock.surface();
        let center = 412;

        // outside the frame
        assert_eq!(surface.pixel(0, 0).map(|p| p.alpha), Some(0));
        // cover
        assert_eq!(surface.pixel(center, center), Some(Srgba::new(0, 0, 0, 255)));
        // second hand lying along the 3 o'clock axis
        assert_eq!(
            surface.pixel(center + 200, center),
            Some(Srgba::new(255, 0, 0, 255))
        );
        // empty face towards 9 o'clock
        assert_eq!(
            surface.pixel(center - 200, center),
            Some(Srgba::new(255, 255, 255, 255))
        );
    }
}
