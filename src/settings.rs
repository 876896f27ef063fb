use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub paint: PaintSettings,
}

/// Defaults for the studio controls; explicit CLI flags win over these
#[derive(Debug, Default, Deserialize)]
pub struct PaintSettings {
    pub fractal: Option<String>,
    pub depth: Option<u32>,
    pub size: Option<f64>,
    pub palette: Option<Vec<String>>, // "#rrggbb" entries, up to 6
}

impl Settings {
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("fractalpaint")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_paint_table() {
        let settings: Settings = toml::from_str(
            "[paint]\nfractal = \"fern\"\ndepth = 4\nsize = 80.0\npalette = [\"#112233\"]\n",
        )
        .unwrap();
        assert_eq!(settings.paint.fractal.as_deref(), Some("fern"));
        assert_eq!(settings.paint.depth, Some(4));
        assert_eq!(settings.paint.size, Some(80.0));
        assert_eq!(settings.paint.palette.unwrap().len(), 1);
    }

    #[test]
    fn empty_file_means_defaults() {
        let settings: Settings = toml::from_str("").unwrap();
        assert!(settings.paint.fractal.is_none());
        assert!(settings.paint.depth.is_none());
    }
}
