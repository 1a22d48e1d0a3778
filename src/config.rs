use crate::indicators::Indicator;
use crate::selection::DEFAULT_COUNTRY;
use std::path::PathBuf;

/// Data file used when neither `--data` nor `FINDASH_DATA` is given.
pub const DEFAULT_DATA_PATH: &str = "Cleaned_Data.csv";
/// Environment variable overriding the data file path.
pub const DATA_PATH_ENV: &str = "FINDASH_DATA";
/// Environment variable pointing at a TrueType font for chart rendering.
pub const FONT_PATH_ENV: &str = "FINDASH_FONT";

/// Startup settings shared by the CLI and the desktop dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub data_path: PathBuf,
    pub indicator: Indicator,
    pub initial_countries: Vec<String>,
    /// Number formatting locale tag ("en", "de", ...).
    pub locale: String,
    pub plot_width: u32,
    pub plot_height: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            indicator: Indicator::default(),
            initial_countries: vec![DEFAULT_COUNTRY.to_string()],
            locale: "en".to_string(),
            plot_width: 1000,
            plot_height: 600,
        }
    }
}

impl Settings {
    /// Defaults, with the data path taken from `FINDASH_DATA` when set and non-empty.
    pub fn from_env() -> Self {
        let mut settings = Self::default();
        if let Some(path) = std::env::var_os(DATA_PATH_ENV).filter(|p| !p.is_empty()) {
            settings.data_path = PathBuf::from(path);
        }
        settings
    }
}
