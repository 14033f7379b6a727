use std::{fs, path::PathBuf, process::Command};

use log::{debug, info};

use crate::{Error, Result, TEMP_COMMAND, TEMP_SUBCOMMAND, THERMAL_DIR, THERMAL_ZONE_NAME};

/// Something that can report the core temperature in degrees Celsius.
pub trait TemperatureSource {
    fn read(&mut self) -> Result<f64>;
}

impl<T: TemperatureSource + ?Sized> TemperatureSource for Box<T> {
    fn read(&mut self) -> Result<f64> {
        (**self).read()
    }
}

/// Extracts the value of a `temp=42.8'C` style measurement.
///
/// The number is the text between the first `=` and the following `'`.
pub fn parse_temperature(output: &str) -> Result<f64> {
    let parse_error = || Error::Parse(output.trim().to_owned());

    let (_, rest) = output.split_once('=').ok_or_else(parse_error)?;
    let (value, _) = rest.split_once('\'').ok_or_else(parse_error)?;

    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|temp| temp.is_finite())
        .ok_or_else(parse_error)
}

/// Asks the firmware for the temperature through `vcgencmd measure_temp`.
pub struct Vcgencmd {
    program: String,
    subcommand: String,
}

impl Default for Vcgencmd {
    fn default() -> Self {
        Self::new()
    }
}

impl Vcgencmd {
    #[must_use]
    pub fn new() -> Self {
        Self::with_command(TEMP_COMMAND, TEMP_SUBCOMMAND)
    }

    #[must_use]
    pub fn with_command(program: &str, subcommand: &str) -> Self {
        Self {
            program: program.to_owned(),
            subcommand: subcommand.to_owned(),
        }
    }

    fn describe(&self) -> String {
        format!("{} {}", self.program, self.subcommand)
    }
}

impl TemperatureSource for Vcgencmd {
    fn read(&mut self) -> Result<f64> {
        let output = Command::new(&self.program)
            .arg(&self.subcommand)
            .output()
            .map_err(|source| Error::Read {
                from: self.describe(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        debug!("{} -> {}", self.describe(), stdout.trim());
        parse_temperature(&stdout)
    }
}

/// Reads a sysfs thermal zone, which reports millidegrees.
pub struct ThermalZone {
    pub path: PathBuf,
}

impl Default for ThermalZone {
    fn default() -> Self {
        Self::new()
    }
}

impl ThermalZone {
    #[must_use]
    pub fn new() -> Self {
        let path = PathBuf::from(THERMAL_DIR)
            .join(THERMAL_ZONE_NAME)
            .join("temp");
        info!("Temp path: {}", path.display());
        Self { path }
    }
}

impl TemperatureSource for ThermalZone {
    fn read(&mut self) -> Result<f64> {
        let content = fs::read_to_string(&self.path).map_err(|source| Error::Read {
            from: self.path.display().to_string(),
            source,
        })?;

        let millis = content
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|millis| millis.is_finite())
            .ok_or_else(|| Error::Parse(content.trim().to_owned()))?;
        Ok(millis / 1000.0)
    }
}

#[cfg(test)]
pub(crate) use scripted::ScriptedSource;
