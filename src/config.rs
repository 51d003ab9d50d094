use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::color::SeriesPalette;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub crater: CraterConfig,
    pub cable: CableConfig,
    pub spool: SpoolConfig,
    pub rover: RoverConfig,
    pub sweep: SweepConfig,
    pub chart: ChartConfig,
}

/// Crater shape and surface gravity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CraterConfig {
    pub depth: f64,    // m
    pub diameter: f64, // m
    pub gravity: f64,  // m/s^2
}

impl Default for CraterConfig {
    fn default() -> Self {
        Self {
            depth: 200.0,
            diameter: 2000.0,
            gravity: 1.62,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CableConfig {
    /// Linear mass density in kg/m
    pub linear_density: f64,
}

impl Default for CableConfig {
    fn default() -> Self {
        Self {
            linear_density: 0.692,
        }
    }
}

/// Winch spool, fully wound at the start of the pull
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SpoolConfig {
    pub outer_radius: f64, // m
    pub inner_radius: f64, // m, bare core
}

impl Default for SpoolConfig {
    fn default() -> Self {
        Self {
            outer_radius: 0.4,
            inner_radius: 0.05,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RoverConfig {
    /// Rover masses in kg, one chart series each
    pub masses: Vec<f64>,
}

impl Default for RoverConfig {
    fn default() -> Self {
        Self {
            masses: vec![100.0, 200.0, 400.0],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SweepConfig {
    /// Number of sampled cable positions
    pub samples: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self { samples: 1000 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChartConfig {
    /// Upper limit of the distance axis (m)
    pub x_max: f64,
    /// Upper limit of the torque axis (N·m)
    pub y_max: f64,
    /// Horizontal dashed guide line (N·m). Sits above `y_max` by default.
    pub reference_torque: f64,
    pub palette: SeriesPalette,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            x_max: 1200.0,
            y_max: 300.0,
            reference_torque: 600.0,
            palette: SeriesPalette::Grayscale,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Get the default XDG config path (~/.config/crater-winch/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("crater-winch").join("config.toml"))
    }

    /// Load config from the default XDG path if it exists
    /// Returns None if file doesn't exist, logs warning on parse errors
    pub fn load_from_default_path() -> Option<Self> {
        let path = Self::default_path()?;
        if path.exists() {
            match Self::load(&path) {
                Ok(config) => Some(config),
                Err(e) => {
                    warn!("{:#}. Using defaults.", e);
                    None
                }
            }
        } else {
            None
        }
    }

    /// Initialize default config file at XDG path, returns the path
    pub fn init_default_config() -> Result<PathBuf> {
        let path = Self::default_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&path, Self::generate_config_template())?;

        Ok(path)
    }

    /// Generate a commented TOML config template
    pub fn generate_config_template() -> String {
        r#"# crater-winch configuration
# Every key is optional; missing keys fall back to these defaults.

[crater]
# Crater depth in metres
depth = 200.0
# Crater rim diameter in metres
diameter = 2000.0
# Surface gravity in m/s^2 (Moon)
gravity = 1.62

[cable]
# Linear mass density of the cable in kg/m
linear_density = 0.692

[spool]
# Radius of the fully wound spool in metres
outer_radius = 0.4
# Radius of the bare spool core in metres
inner_radius = 0.05

[rover]
# Rover masses in kg, one chart line each
masses = [100.0, 200.0, 400.0]

[sweep]
# Number of sampled cable positions
samples = 1000

[chart]
# Axis limits
x_max = 1200.0
y_max = 300.0
# Horizontal dashed guide line in N·m
reference_torque = 600.0
# Series colours: "grayscale" or "spectrum"
palette = "grayscale"
"#
        .to_string()
    }

    /// Merge CLI arguments into config (CLI takes priority)
    pub fn merge_args(&mut self, args: &crate::Args) {
        if let Some(depth) = args.depth {
            self.crater.depth = depth;
        }
        if let Some(diameter) = args.diameter {
            self.crater.diameter = diameter;
        }
        if let Some(gravity) = args.gravity {
            self.crater.gravity = gravity;
        }
        if let Some(density) = args.cable_density {
            self.cable.linear_density = density;
        }
        if let Some(radius) = args.outer_radius {
            self.spool.outer_radius = radius;
        }
        if let Some(radius) = args.inner_radius {
            self.spool.inner_radius = radius;
        }
        if !args.masses.is_empty() {
            self.rover.masses = args.masses.clone();
        }
        if let Some(samples) = args.samples {
            self.sweep.samples = samples;
        }
        if let Some(palette) = args.palette {
            self.chart.palette = palette;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Args;
    use clap::Parser;

    #[test]
    fn defaults_match_reference_scenario() {
        let config = Config::default();
        assert_eq!(config.crater.depth, 200.0);
        assert_eq!(config.crater.diameter, 2000.0);
        assert_eq!(config.crater.gravity, 1.62);
        assert_eq!(config.cable.linear_density, 0.692);
        assert_eq!(config.spool.outer_radius, 0.4);
        assert_eq!(config.spool.inner_radius, 0.05);
        assert_eq!(config.rover.masses, vec![100.0, 200.0, 400.0]);
        assert_eq!(config.sweep.samples, 1000);
        assert_eq!(config.chart.y_max, 300.0);
        assert_eq!(config.chart.reference_torque, 600.0);
    }

    #[test]
    fn template_parses_to_defaults() {
        let parsed: Config = toml::from_str(&Config::generate_config_template()).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn partial_file_fills_missing_keys() {
        let parsed: Config = toml::from_str(
            r#"
[crater]
depth = 150.0

[rover]
masses = [50.0]
"#,
        )
        .unwrap();

        assert_eq!(parsed.crater.depth, 150.0);
        assert_eq!(parsed.crater.diameter, 2000.0);
        assert_eq!(parsed.rover.masses, vec![50.0]);
        assert_eq!(parsed.spool, SpoolConfig::default());
    }

    #[test]
    fn unknown_palette_is_rejected() {
        let parsed = toml::from_str::<Config>("[chart]\npalette = \"neon\"\n");
        assert!(parsed.is_err());
    }

    #[test]
    fn cli_overrides_file_values() {
        let mut config: Config = toml::from_str("[sweep]\nsamples = 50\n").unwrap();
        let args = Args::parse_from([
            "crater-winch",
            "--depth",
            "120",
            "-m",
            "10,20",
            "--mass",
            "30",
            "--palette",
            "spectrum",
        ]);

        config.merge_args(&args);

        assert_eq!(config.crater.depth, 120.0);
        assert_eq!(config.rover.masses, vec![10.0, 20.0, 30.0]);
        assert_eq!(config.chart.palette, SeriesPalette::Spectrum);
        // Not given on the command line
        assert_eq!(config.sweep.samples, 50);
        assert_eq!(config.crater.gravity, 1.62);
    }
}
