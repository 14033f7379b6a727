use std::{process, time::Duration};

use fancontrol::{
    checker::Checker,
    config::{self, Config},
    fan::GpioFan,
    status::StatusFile,
};
use log::{error, info};

fn run() -> fancontrol::Result<()> {
    let config = Config::new()?;
    info!(
        "Starting fancontrol v{} on GPIO {}, on above {}°C, off below {}°C, every {}s",
        env!("CARGO_PKG_VERSION"),
        config.gpio_pin,
        config.thresholds.on(),
        config.thresholds.off(),
        config.sleep_time
    );

    let status = StatusFile::new(&config.status_dir)?;
    let fan = GpioFan::new(config.gpio_pin)?;
    info!("Temperature source: {:?}", config.temp_source);
    let source = config.temp_source.build();

    let mut checker = Checker::start(source, fan, status, config.thresholds)?;
    checker.run(Duration::from_secs(config.sleep_time), || true)
}

fn main() {
    let debug = Config::get_env("DEBUG", false);
    config::setup_logging(debug);

    if let Err(err) = run() {
        error!("{err}");
        process::exit(1);
    }
}
