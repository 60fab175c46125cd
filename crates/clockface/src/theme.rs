use derive_more::{AsRef, Deref, Display, From, Into};
use palette::{Srgb, Srgba};
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("invalid color {input:?}: {source}")]
pub struct ParseColorError {
    input: String,
    source: palette::rgb::FromHexError,
}

/// Opaque sRGB color written as `#rgb` or `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, DeserializeFromStr, SerializeDisplay)]
pub struct Color(Srgba<f64>);

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);

    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self(Srgba::new(red, green, blue, 1.0))
    }

    pub fn components(&self) -> (f64, f64, f64, f64) {
        self.0.into_components()
    }

    pub fn to_u8(&self) -> Srgba<u8> {
        self.0.into_format()
    }
}

impl From<Srgba<f64>> for Color {
    fn from(color: Srgba<f64>) -> Self {
        Self(color)
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rgb: Srgb<u8> = s.trim().parse().map_err(|source| ParseColorError {
            input: s.to_string(),
            source,
        })?;
        let (r, g, b) = rgb.into_format::<f64>().into_components();
        Ok(Self::rgb(r, g, b))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b, _) = self.to_u8().into_components();
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct FontFamily(String);

impl_string_newtype!(FontFamily);

impl Default for FontFamily {
    fn default() -> Self {
        Self::new("Verdana")
    }
}

/// Colors, visibility switches and font of a face. Dimensions are not part
/// of the theme; they always follow the radius.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Theme {
    pub background: Color,
    pub border: Color,
    pub minute_ticks: Color,
    pub hour_ticks: Color,
    pub numbers: Color,
    pub hours: Color,
    pub minutes: Color,
    pub seconds: Color,
    pub cover: Color,
    pub show_ticks: bool,
    pub show_numbers: bool,
    pub show_seconds: bool,
    pub continuous_seconds: bool,
    pub show_cover: bool,
    pub font: FontFamily,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            border: Color::BLACK,
            minute_ticks: Color::BLACK,
            hour_ticks: Color::BLACK,
            numbers: Color::BLACK,
            hours: Color::BLACK,
            minutes: Color::BLACK,
            seconds: Color::RED,
            cover: Color::BLACK,
            show_ticks: true,
            show_numbers: true,
            show_seconds: true,
            continuous_seconds: true,
            show_cover: true,
            font: FontFamily::default(),
        }
    }
}
