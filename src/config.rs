use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use log::warn;

use crate::{
    Error, Result, STATUS_DIR,
    hysteresis::Thresholds,
    temp::{TemperatureSource, ThermalZone, Vcgencmd},
};

const ON_THRESHOLD: f64 = 55.0;
const OFF_THRESHOLD: f64 = 45.0;
const SLEEP_TIME: u64 = 5;
const GPIO_PIN: u8 = 17;

/// Where the core temperature comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TempSource {
    Vcgencmd,
    ThermalZone,
}

impl FromStr for TempSource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vcgencmd" => Ok(Self::Vcgencmd),
            "thermal_zone" => Ok(Self::ThermalZone),
            other => Err(Error::Config(format!(
                "unknown temperature source {other:?}, expected vcgencmd or thermal_zone"
            ))),
        }
    }
}

impl TempSource {
    #[must_use]
    pub fn build(self) -> Box<dyn TemperatureSource> {
        match self {
            Self::Vcgencmd => Box::new(Vcgencmd::new()),
            Self::ThermalZone => Box::new(ThermalZone::new()),
        }
    }
}

pub struct Config {
    pub thresholds: Thresholds,
    pub sleep_time: u64,
    pub gpio_pin: u8,
    pub status_dir: PathBuf,
    pub temp_source: TempSource,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn new() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let thresholds = Thresholds::new(
            Self::parse_set("ON_THRESHOLD", lookup("ON_THRESHOLD"), ON_THRESHOLD)?,
            Self::parse_set("OFF_THRESHOLD", lookup("OFF_THRESHOLD"), OFF_THRESHOLD)?,
        )?;

        let temp_source = lookup("TEMP_SOURCE")
            .map_or(Ok(TempSource::Vcgencmd), |s| s.parse())?;

        Ok(Self {
            thresholds,
            sleep_time: Self::parse_set("SLEEP_TIME", lookup("SLEEP_TIME"), SLEEP_TIME)?,
            gpio_pin: Self::parse_set("GPIO_PIN", lookup("GPIO_PIN"), GPIO_PIN)?,
            status_dir: lookup("STATUS_DIR")
                .map_or_else(|| PathBuf::from(STATUS_DIR), PathBuf::from),
            temp_source,
        })
    }

    pub fn get_env<T: FromStr + Display>(key: &str, fallback: T) -> T {
        Self::parse_or(key, env::var(key).ok(), fallback)
    }

    /// Like [`Self::get_env`], but a value that is set and doesn't parse is an error.
    fn parse_set<T: FromStr>(key: &str, value: Option<String>, fallback: T) -> Result<T> {
        let Some(raw) = value else {
            return Ok(fallback);
        };
        raw.trim()
            .parse()
            .map_err(|_| Error::Config(format!("invalid {key} value {raw:?}")))
    }

    fn parse_or<T: FromStr + Display>(key: &str, value: Option<String>, fallback: T) -> T {
        let Some(raw) = value else {
            return fallback;
        };
        raw.trim().parse().unwrap_or_else(|_| {
            warn!("Invalid {key} value {raw:?}, using {fallback}");
            fallback
        })
    }
}

#[cfg(feature = "std")]
pub fn setup_logging(debug_mode: bool) {
    use std::io::Write;

    use colored::Colorize;
    use env_logger::Builder;
    use log::{Level, LevelFilter};

    let level_filter = match env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".into())
        .to_ascii_lowercase()
        .as_str()
    {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Debug,
    };

    let mut builder = Builder::new();

    if !debug_mode {
        builder.format(|f, r| {
            let color = match r.level() {
                Level::Warn => r.args().to_string().yellow(),
                Level::Error => r.args().to_string().red(),
                Level::Info => r.args().to_string().green(),
                Level::Debug => r.args().to_string().blue(),
                Level::Trace => r.args().to_string().cyan(),
            };
            writeln!(f, "{color}")
        });
    }

    builder.filter_level(level_filter).init();
    println!("Log level set to: {level_filter}");
}
