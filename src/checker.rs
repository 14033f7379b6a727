use std::{thread, time::Duration};

use log::{debug, info};

use crate::{
    Result, fan::Fan, hysteresis::Thresholds, status::StatusPersister, temp::TemperatureSource,
};

/// The control loop: one temperature source, one fan, one status record.
pub struct Checker<S, F, P> {
    source: S,
    fan: F,
    status: P,
    thresholds: Thresholds,
}

impl<S, F, P> Checker<S, F, P>
where
    S: TemperatureSource,
    F: Fan,
    P: StatusPersister,
{
    /// Forces the fan off and records it, whatever the line was doing before.
    pub fn start(source: S, mut fan: F, mut status: P, thresholds: Thresholds) -> Result<Self> {
        fan.turn_off()?;
        status.persist(false)?;
        info!(
            "Fan off, thresholds: on above {}°C, off below {}°C",
            thresholds.on(),
            thresholds.off()
        );

        Ok(Self {
            source,
            fan,
            status,
            thresholds,
        })
    }

    pub const fn fan(&self) -> &F {
        &self.fan
    }

    pub const fn status(&self) -> &P {
        &self.status
    }

    /// Runs a single poll. Returns the state the fan was switched to, if any.
    pub fn check(&mut self) -> Result<Option<bool>> {
        let current_temp = self.source.read()?;
        debug!("Current temp {current_temp:.1}°C");

        let Some(desired) = self.thresholds.decide(current_temp, self.fan.is_on()) else {
            debug!("Temp: {current_temp:.1}°C, no change needed");
            return Ok(None);
        };

        info!(
            "Turning fan {} (Temp: {current_temp:.1}°C)",
            if desired { "on" } else { "off" }
        );
        self.status.persist(desired)?;
        if desired {
            self.fan.turn_on()?;
        } else {
            self.fan.turn_off()?;
        }
        Ok(Some(desired))
    }

    /// Polls every `interval` for as long as `should_continue` says so.
    /// The first error stops the loop and is returned.
    pub fn run(
        &mut self,
        interval: Duration,
        mut should_continue: impl FnMut() -> bool,
    ) -> Result<()> {
        while should_continue() {
            self.check()?;
            debug!("Sleeping for {} seconds", interval.as_secs_f64());
            thread::sleep(interval);
        }
        Ok(())
    }
}
