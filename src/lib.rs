pub mod checker;
pub mod config;
pub mod error;
pub mod fan;
pub mod hysteresis;
pub mod status;
pub mod temp;

pub use error::{Error, Result};

pub const STATUS_DIR: &str = "/var/lib/fancontrol";
pub const STATUS_FILE_NAME: &str = "fancontrol_status";
pub const THERMAL_DIR: &str = "/sys/class/thermal";
pub const THERMAL_ZONE_NAME: &str = "thermal_zone0";
pub const TEMP_COMMAND: &str = "vcgencmd";
pub const TEMP_SUBCOMMAND: &str = "measure_temp";
