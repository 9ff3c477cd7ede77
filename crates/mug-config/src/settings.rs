use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use mug_expression::FacialExpression;
use mug_geometry::{FaceParameters, Rgb};

/// Environment variable the CLI reads as a fallback for `--config`.
pub const CONFIG_ENV: &str = "MUG_CONFIG";

/// Top-level configuration loaded from `config.toml`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MugConfig {
    /// Expression shown at startup and restored by reset.
    pub expression: FacialExpression,
    pub face: FaceSettings,
    pub pinch: PinchSettings,
}

/// Cosmetic and sizing defaults for the face surface.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FaceSettings {
    pub scale: f64,
    pub color: [u8; 3],
    pub line_width: f64,
}

impl Default for FaceSettings {
    fn default() -> Self {
        let p = FaceParameters::default();
        Self {
            scale: p.scale,
            color: [p.color.0, p.color.1, p.color.2],
            line_width: p.line_width,
        }
    }
}

impl FaceSettings {
    /// Starting face parameters. Expression-driven fields keep their defaults
    /// until a controller syncs them.
    pub fn to_parameters(&self) -> FaceParameters {
        FaceParameters {
            scale: self.scale,
            color: Rgb(self.color[0], self.color[1], self.color[2]),
            line_width: self.line_width,
            ..FaceParameters::default()
        }
    }
}

/// Limits and step size for pinch-to-scale.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PinchSettings {
    pub min_scale: f64,
    pub max_scale: f64,
    /// Multiplier applied per pinch-out step; pinch-in uses its reciprocal.
    pub step: f64,
}

impl Default for PinchSettings {
    fn default() -> Self {
        Self {
            min_scale: 0.1,
            max_scale: 1.0,
            step: 1.1,
        }
    }
}

impl MugConfig {
    /// Parse and validate config TOML.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: Self = toml::from_str(input).context("failed to parse config TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;

        Self::from_toml_str(&raw).with_context(|| format!("invalid config at {}", path.display()))
    }

    /// Resolve and load the active config.
    ///
    /// Precedence: `explicit` (the `--config` flag or [`CONFIG_ENV`]) >
    /// `<config_dir>/mug/config.toml` when it exists > built-in defaults.
    /// Returns the path that was read, if any.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        let default_path = default_config_path().filter(|p| p.is_file());

        match resolve_path(explicit, default_path) {
            Some(path) => Ok((Self::from_path(&path)?, Some(path))),
            None => Ok((Self::default(), None)),
        }
    }

    /// Validate numeric ranges.
    pub fn validate(&self) -> Result<()> {
        validate_positive("face.scale", self.face.scale)?;
        validate_positive("face.line_width", self.face.line_width)?;
        validate_positive("pinch.min_scale", self.pinch.min_scale)?;
        validate_positive("pinch.max_scale", self.pinch.max_scale)?;

        if self.pinch.min_scale > self.pinch.max_scale {
            bail!(
                "pinch.min_scale ({}) must be <= pinch.max_scale ({})",
                self.pinch.min_scale,
                self.pinch.max_scale
            );
        }
        if self.face.scale < self.pinch.min_scale || self.face.scale > self.pinch.max_scale {
            bail!(
                "face.scale ({}) must lie within [pinch.min_scale, pinch.max_scale] ([{}, {}])",
                self.face.scale,
                self.pinch.min_scale,
                self.pinch.max_scale
            );
        }
        if !self.pinch.step.is_finite() || self.pinch.step <= 1.0 {
            bail!("pinch.step must be finite and > 1, got {}", self.pinch.step);
        }

        Ok(())
    }
}

/// Platform config location: `<config_dir>/mug/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("mug").join("config.toml"))
}

fn resolve_path(
    explicit: Option<&Path>,
    default_path: Option<PathBuf>,
) -> Option<PathBuf> {
    explicit
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .or(default_path)
}

fn validate_positive(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        bail!("{field} must be finite and > 0, got {value}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mug_expression::{EyeBrows, Eyes, Mouth};

    const FULL_CONFIG: &str = r#"
[expression]
eyes = "open"
eye_brows = "furrowed"
mouth = "grin"

[face]
scale = 0.75
color = [255, 128, 0]
line_width = 2.0

[pinch]
min_scale = 0.2
max_scale = 0.95
step = 1.25
"#;

    #[test]
    fn parses_full_config() {
        let config = MugConfig::from_toml_str(FULL_CONFIG).unwrap();
        assert_eq!(
            config.expression,
            FacialExpression::new(Eyes::Open, EyeBrows::Furrowed, Mouth::Grin)
        );
        assert_eq!(config.face.scale, 0.75);
        assert_eq!(config.pinch.step, 1.25);

        let params = config.face.to_parameters();
        assert_eq!(params.color, Rgb(255, 128, 0));
        assert_eq!(params.line_width, 2.0);
        assert_eq!(params.scale, 0.75);
    }

    #[test]
    fn empty_config_is_all_defaults() {
        let config = MugConfig::from_toml_str("").unwrap();
        assert_eq!(config, MugConfig::default());
        assert_eq!(config.expression, FacialExpression::default());
        assert_eq!(config.face.to_parameters(), FaceParameters::default());
    }

    #[test]
    fn partial_expression_keeps_other_defaults() {
        let config = MugConfig::from_toml_str("[expression]\nmouth = \"smile\"\n").unwrap();
        assert_eq!(config.expression.mouth, Mouth::Smile);
        assert_eq!(config.expression.eyes, Eyes::Closed);
        assert_eq!(config.expression.eye_brows, EyeBrows::Relaxed);
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = MugConfig::from_toml_str("[face]\nsize = 3\n")
            .unwrap_err()
            .to_string();
        assert!(err.contains("failed to parse config TOML"));
    }

    #[test]
    fn unknown_mouth_is_rejected() {
        let err = MugConfig::from_toml_str("[expression]\nmouth = \"pout\"\n");
        assert!(err.is_err());
    }

    #[test]
    fn non_positive_scale_is_rejected() {
        let raw = FULL_CONFIG.replace("scale = 0.75", "scale = 0.0");
        let err = MugConfig::from_toml_str(&raw).unwrap_err().to_string();
        assert!(err.contains("face.scale must be finite and > 0"));
    }

    #[test]
    fn inverted_pinch_limits_are_rejected() {
        let raw = FULL_CONFIG.replace("min_scale = 0.2", "min_scale = 2.0");
        let err = MugConfig::from_toml_str(&raw).unwrap_err().to_string();
        assert!(err.contains("pinch.min_scale"));
    }

    #[test]
    fn pinch_step_must_grow() {
        let raw = FULL_CONFIG.replace("step = 1.25", "step = 0.9");
        let err = MugConfig::from_toml_str(&raw).unwrap_err().to_string();
        assert!(err.contains("pinch.step"));
    }

    #[test]
    fn face_scale_outside_pinch_limits_is_rejected() {
        let raw = FULL_CONFIG.replace("max_scale = 0.95", "max_scale = 0.5");
        let err = MugConfig::from_toml_str(&raw).unwrap_err().to_string();
        assert!(err.contains("face.scale (0.75) must lie within"));

        let raw = FULL_CONFIG.replace("min_scale = 0.2", "min_scale = 0.8");
        assert!(MugConfig::from_toml_str(&raw).is_err());
    }

    #[test]
    fn face_scale_on_pinch_limit_is_accepted() {
        let raw = FULL_CONFIG.replace("max_scale = 0.95", "max_scale = 0.75");
        assert_eq!(MugConfig::from_toml_str(&raw).unwrap().face.scale, 0.75);
    }

    #[test]
    fn explicit_path_wins() {
        let got = resolve_path(Some(Path::new("/a.toml")), Some(PathBuf::from("/c.toml")));
        assert_eq!(got, Some(PathBuf::from("/a.toml")));
    }

    #[test]
    fn empty_explicit_path_falls_back_to_default() {
        let got = resolve_path(Some(Path::new("")), Some(PathBuf::from("/c.toml")));
        assert_eq!(got, Some(PathBuf::from("/c.toml")));
        assert_eq!(resolve_path(None, None), None);
    }

    #[test]
    fn from_path_reads_file() {
        let dir = std::env::temp_dir().join("mug-test-config");
        let _ = fs::create_dir_all(&dir);
        let path = dir.join("config.toml");
        fs::write(&path, FULL_CONFIG).unwrap();

        let config = MugConfig::from_path(&path).unwrap();
        assert_eq!(config.expression.mouth, Mouth::Grin);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn from_path_missing_file_names_path() {
        let err = MugConfig::from_path(Path::new("/definitely/not/here.toml"))
            .unwrap_err()
            .to_string();
        assert!(err.contains("failed to read config at /definitely/not/here.toml"));
    }
}
