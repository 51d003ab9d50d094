use clap::ValueEnum;
use palette::{Hsl, IntoColor, Srgb};
use serde::{Deserialize, Serialize};

/// Colour set used for the torque series.
///
/// Line styles already separate the series, so `Grayscale` is the default and
/// stays readable on monochrome terminals.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, ValueEnum, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum SeriesPalette {
    #[default]
    Grayscale,
    Spectrum,
}

impl SeriesPalette {
    /// Get the colour for series `index` out of `count` series
    pub fn series_color(&self, index: usize, count: usize) -> (u8, u8, u8) {
        let position = if count > 1 {
            index as f32 / (count - 1) as f32
        } else {
            0.0
        };

        let (h, s, l) = match self {
            // Light to mid gray, heaviest rover darkest
            SeriesPalette::Grayscale => (0.0, 0.0, 0.92 - position * 0.35),
            // Blue -> green -> red
            SeriesPalette::Spectrum => (220.0 - position * 220.0, 0.85, 0.55),
        };

        hsl_to_rgb(h, s, l)
    }

    /// Colour for the dashed reference lines
    pub fn guide_color(&self) -> (u8, u8, u8) {
        hsl_to_rgb(0.0, 0.0, 0.45)
    }
}

fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (u8, u8, u8) {
    let hsl = Hsl::new(h, s, l);
    let rgb: Srgb = hsl.into_color();

    (
        (rgb.red * 255.0).round() as u8,
        (rgb.green * 255.0).round() as u8,
        (rgb.blue * 255.0).round() as u8,
    )
}
