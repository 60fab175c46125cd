//! Configuration builder: every dimension of the face derived from one
//! radius.
//!
//! All lengths are `constant * radius / 100`, so the face scales uniformly
//! and the ratios between elements never change.

use crate::error::ClockError;
use crate::geometry::Point;
use crate::theme::{Color, FontFamily, Theme};

pub const DEFAULT_RADIUS: f64 = 200.0;

pub const FRAME_OFFSET: f64 = 2.5;
pub const FRAME_WIDTH: f64 = 3.0;
pub const TICK_OFFSET: f64 = 2.5;
pub const MINUTE_TICK_WIDTH: f64 = 0.5;
pub const MINUTE_TICK_LENGTH: f64 = 3.0;
pub const HOUR_TICK_WIDTH: f64 = 1.0;
pub const HOUR_TICK_LENGTH: f64 = 6.0;
pub const NUMBERS_RADIUS: f64 = 92.5;
pub const NUMBERS_SIZE: f64 = 20.0;
pub const HOUR_ARM_LENGTH: f64 = 80.0;
pub const HOUR_ARM_WIDTH: f64 = 1.0;
pub const MINUTE_ARM_LENGTH: f64 = 83.5;
pub const MINUTE_ARM_WIDTH: f64 = 0.75;
pub const SECOND_ARM_LENGTH: f64 = 92.5;
pub const SECOND_ARM_WIDTH: f64 = 0.5;
pub const COVER_WIDTH: f64 = 5.0;

/// Outer ring.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameStyle {
    pub offset: f64,
    pub width: f64,
    pub background: Color,
    pub border: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TickStyle {
    pub color: Color,
    pub width: f64,
    pub length: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TicksStyle {
    pub show: bool,
    pub offset: f64,
    pub minute: TickStyle,
    pub hour: TickStyle,
}

impl TicksStyle {
    /// Every fifth mark is an hour mark.
    pub fn for_index(&self, index: u32) -> &TickStyle {
        if index % 5 == 0 { &self.hour } else { &self.minute }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumbersStyle {
    pub show: bool,
    pub color: Color,
    pub radius: f64,
    pub size: f64,
    pub font: FontFamily,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArmStyle {
    pub length: f64,
    pub width: f64,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SecondsArmStyle {
    pub show: bool,
    pub continuous: bool,
    pub arm: ArmStyle,
}

/// Filled disk over the hand bases; `width` is its radius.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverStyle {
    pub show: bool,
    pub width: f64,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArmsStyle {
    pub hours: ArmStyle,
    pub minutes: ArmStyle,
    pub seconds: SecondsArmStyle,
    pub cover: CoverStyle,
}

/// Complete, immutable style of a face in logical units. A resize builds a
/// new one.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleConfiguration {
    pub radius: f64,
    pub frame: FrameStyle,
    pub ticks: TicksStyle,
    pub numbers: NumbersStyle,
    pub arms: ArmsStyle,
}

impl StyleConfiguration {
    pub fn new(radius: f64) -> Result<Self, ClockError> {
        Self::themed(radius, &Theme::default())
    }

    pub fn themed(radius: f64, theme: &Theme) -> Result<Self, ClockError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ClockError::InvalidRadius(radius));
        }
        let factor = radius / 100.0;

        Ok(Self {
            radius,
            frame: FrameStyle {
                offset: FRAME_OFFSET * factor,
                width: FRAME_WIDTH * factor,
                background: theme.background,
                border: theme.border,
            },
            ticks: TicksStyle {
                show: theme.show_ticks,
                offset: TICK_OFFSET * factor,
                minute: TickStyle {
                    color: theme.minute_ticks,
                    width: MINUTE_TICK_WIDTH * factor,
                    length: MINUTE_TICK_LENGTH * factor,
                },
                hour: TickStyle {
                    color: theme.hour_ticks,
                    width: HOUR_TICK_WIDTH * factor,
                    length: HOUR_TICK_LENGTH * factor,
                },
            },
            numbers: NumbersStyle {
                show: theme.show_numbers,
                color: theme.numbers,
                radius: NUMBERS_RADIUS * factor,
                size: NUMBERS_SIZE * factor,
                font: theme.font.clone(),
            },
            arms: ArmsStyle {
                hours: ArmStyle {
                    length: HOUR_ARM_LENGTH * factor,
                    width: HOUR_ARM_WIDTH * factor,
                    color: theme.hours,
                },
                minutes: ArmStyle {
                    length: MINUTE_ARM_LENGTH * factor,
                    width: MINUTE_ARM_WIDTH * factor,
                    color: theme.minutes,
                },
                seconds: SecondsArmStyle {
                    show: theme.show_seconds,
                    continuous: theme.continuous_seconds,
                    arm: ArmStyle {
                        length: SECOND_ARM_LENGTH * factor,
                        width: SECOND_ARM_WIDTH * factor,
                        color: theme.seconds,
                    },
                },
                cover: CoverStyle {
                    show: theme.show_cover,
                    width: COVER_WIDTH * factor,
                    color: theme.cover,
                },
            },
        })
    }
}

/// Size of the square buffer a face is drawn on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalSurface {
    /// Side of the displayed box in logical units.
    pub logical_side: f64,
    /// Side of the pixel buffer, `logical_side * density`.
    pub device_side: f64,
    pub density: f64,
    pub center: Point,
}

impl PhysicalSurface {
    /// The face plus its frame stroke fit the box without clipping.
    pub fn for_style(style: &StyleConfiguration, density: f64) -> Result<Self, ClockError> {
        if !density.is_finite() || density <= 0.0 {
            return Err(ClockError::InvalidDensity(density));
        }
        let half = style.radius + style.frame.width;
        let logical_side = half * 2.0;
        let device_side = logical_side * density;

        Ok(Self {
            logical_side,
            device_side,
            density,
            center: Point::new(device_side / 2.0, device_side / 2.0),
        })
    }

    /// Distance from the center to the buffer edge, in device pixels.
    pub fn buffer_radius(&self) -> f64 {
        self.device_side / 2.0
    }

    /// Whole pixels needed to hold the buffer.
    pub fn pixels(&self) -> u32 {
        self.device_side.ceil() as u32
    }
}

/// Builds the style and the surface geometry together for `radius` logical
/// units at `density` device pixels per unit.
pub fn build(
    radius: f64,
    density: f64,
) -> Result<(StyleConfiguration, PhysicalSurface), ClockError> {
    build_themed(radius, density, &Theme::default())
}

pub fn build_themed(
    radius: f64,
    density: f64,
    theme: &Theme,
) -> Result<(StyleConfiguration, PhysicalSurface), ClockError> {
    let style = StyleConfiguration::themed(radius, theme)?;
    let physical = PhysicalSurface::for_style(&style, density)?;
    Ok((style, physical))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn test_dimensions_scale_with_radius() {
        for radius in [1.0, 37.5, 100.0, 200.0, 1234.5] {
            let style = StyleConfiguration::new(radius).unwrap();
            let f = radius / 100.0;

            let cases = [
                (style.frame.offset, 2.5),
                (style.frame.width, 3.0),
                (style.ticks.offset, 2.5),
                (style.ticks.minute.width, 0.5),
                (style.ticks.minute.length, 3.0),
                (style.ticks.hour.width, 1.0),
                (style.ticks.hour.length, 6.0),
                (style.numbers.radius, 92.5),
                (style.numbers.size, 20.0),
                (style.arms.hours.length, 80.0),
                (style.arms.hours.width, 1.0),
                (style.arms.minutes.length, 83.5),
                (style.arms.minutes.width, 0.75),
                (style.arms.seconds.arm.length, 92.5),
                (style.arms.seconds.arm.width, 0.5),
                (style.arms.cover.width, 5.0),
            ];

            for (actual, constant) in cases {
                assert!(approx(actual, constant * f), "{actual} != {constant} * {f}");
            }
        }
    }

    #[test]
    fn test_default_theme_colors_and_flags() {
        let style = StyleConfiguration::new(DEFAULT_RADIUS).unwrap();
        assert_eq!(style.frame.background, Color::WHITE);
        assert_eq!(style.frame.border, Color::BLACK);
        assert_eq!(style.arms.seconds.arm.color, Color::RED);
        assert_eq!(style.arms.cover.color, Color::BLACK);
        assert!(style.ticks.show && style.numbers.show);
        assert!(style.arms.seconds.show && style.arms.seconds.continuous);
        assert!(style.arms.cover.show);
    }

    #[test]
    fn test_surface_sizing() {
        for density in [1.0, 2.0, 3.0] {
            for radius in [50.0, 100.0, 200.0] {
                let (style, physical) = build(radius, density).unwrap();
                let logical = 2.0 * (radius + style.frame.width);
                assert!(approx(physical.logical_side, logical));
                assert!(approx(physical.device_side, logical * density));
                assert_eq!(physical.center.x, physical.device_side / 2.0);
                assert_eq!(physical.center.y, physical.device_side / 2.0);
            }
        }
    }

    #[test]
    fn test_default_radius_surface() {
        let (_, physical) = build(DEFAULT_RADIUS, 2.0).unwrap();
        assert_eq!(physical.logical_side, 412.0);
        assert_eq!(physical.pixels(), 824);
        assert_eq!(physical.center, Point::new(412.0, 412.0));
    }

    #[test]
    fn test_hour_marks() {
        let style = StyleConfiguration::new(100.0).unwrap();
        assert_eq!(style.ticks.for_index(5), &style.ticks.hour);
        assert_eq!(style.ticks.for_index(60), &style.ticks.hour);
        assert_eq!(style.ticks.for_index(7), &style.ticks.minute);
    }

    #[test]
    fn test_rejects_degenerate_input() {
        for radius in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                build(radius, 1.0),
                Err(ClockError::InvalidRadius(_))
            ));
        }
        for density in [0.0, -2.0, f64::NAN] {
            assert!(matches!(
                build(100.0, density),
                Err(ClockError::InvalidDensity(_))
            ));
        }
    }

    #[test]
    fn test_theme_flows_into_style() {
        let theme = Theme {
            show_ticks: false,
            continuous_seconds: false,
            hours: Color::RED,
            font: FontFamily::new("DejaVu Sans"),
            ..Theme::default()
        };
        let style = StyleConfiguration::themed(100.0, &theme).unwrap();
        assert!(!style.ticks.show);
        assert!(!style.arms.seconds.continuous);
        assert_eq!(style.arms.hours.color, Color::RED);
        assert_eq!(style.numbers.font.as_str(), "DejaVu Sans");
    }
}
