//! Harness configuration read from the process environment.
use std::env;
use std::path::PathBuf;

/// Serialization used for the printed report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::EnumString, strum::Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
    #[default]
    Json,
    Ron,
}

/// Configuration required to load content and run a sheet pass.
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub data_dir: PathBuf,
    pub world: String,
    pub output: OutputFormat,
    /// Size vessel hardware and submit the resulting writes.
    pub size_hardware: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/data")),
            world: Self::DEFAULT_WORLD.to_owned(),
            output: OutputFormat::default(),
            size_hardware: true,
        }
    }
}

impl CliConfig {
    pub const DEFAULT_WORLD: &'static str = "sample_world.json";

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SHEET_DATA_DIR` - Content directory (default: the crate's `data/`)
    /// - `SHEET_WORLD` - World file under `worlds/` (default: `sample_world.json`)
    /// - `SHEET_OUTPUT` - `json` or `ron` (default: json)
    /// - `SHEET_SIZE_HARDWARE` - Resize vessel hardware (default: true)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("SHEET_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Ok(world) = env::var("SHEET_WORLD") {
            config.world = world;
        }
        if let Some(output) = read_env::<OutputFormat>("SHEET_OUTPUT") {
            config.output = output;
        }
        if let Some(enable) = read_env::<bool>("SHEET_SIZE_HARDWARE") {
            config.size_hardware = enable;
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_format_parses_case_insensitively() {
        assert_eq!("RON".parse::<OutputFormat>(), Ok(OutputFormat::Ron));
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn default_points_at_bundled_world() {
        let config = CliConfig::default();
        assert!(config.data_dir.join("worlds").join(&config.world).exists());
    }
}
