use crate::Result;

/// A fan that can only be switched fully on or off.
pub trait Fan {
    fn turn_on(&mut self) -> Result<()>;

    fn turn_off(&mut self) -> Result<()>;

    /// Last commanded level, not read back from the hardware.
    fn is_on(&self) -> bool;
}

#[cfg(feature = "gpio")]
pub use gpio::GpioFan;

#[cfg(feature = "gpio")]
mod gpio {
    use log::{info, trace};
    use rppal::gpio::{Gpio, OutputPin};

    use super::Fan;
    use crate::{Error, Result};

    /// Fan relay or transistor wired to a BCM numbered GPIO pin.
    pub struct GpioFan {
        pin: OutputPin,
    }

    impl GpioFan {
        pub fn new(pin: u8) -> Result<Self> {
            let gpio_error = |err: rppal::gpio::Error| Error::Gpio {
                pin,
                reason: err.to_string(),
            };

            let mut output = Gpio::new()
                .map_err(gpio_error)?
                .get(pin)
                .map_err(gpio_error)?
                .into_output_low();
            // Leave the line where it is when the process goes away.
            output.set_reset_on_drop(false);

            info!("Fan on GPIO pin {pin}");
            Ok(Self { pin: output })
        }
    }

    impl Fan for GpioFan {
        fn turn_on(&mut self) -> Result<()> {
            trace!("GPIO {} high", self.pin.pin());
            self.pin.set_high();
            Ok(())
        }

        fn turn_off(&mut self) -> Result<()> {
            trace!("GPIO {} low", self.pin.pin());
            self.pin.set_low();
            Ok(())
        }

        fn is_on(&self) -> bool {
            self.pin.is_set_high()
        }
    }
}

#[cfg(test)]
pub(crate) use recording::RecordingFan;

#[cfg(test)]
mod recording {
    use super::Fan;
    use crate::{Error, Result};

    /// Keeps every command it receives.
    #[derive(Default)]
    pub(crate) struct RecordingFan {
        pub on: bool,
        pub commands: Vec<bool>,
        pub fail: bool,
    }

    impl RecordingFan {
        pub(crate) fn starting(on: bool) -> Self {
            Self {
                on,
                ..Self::default()
            }
        }

        fn set(&mut self, on: bool) -> Result<()> {
            if self.fail {
                return Err(Error::Actuate("relay stuck".to_owned()));
            }
            self.on = on;
            self.commands.push(on);
            Ok(())
        }
    }

    impl Fan for RecordingFan {
        fn turn_on(&mut self) -> Result<()> {
            self.set(true)
        }

        fn turn_off(&mut self) -> Result<()> {
            self.set(false)
        }

        fn is_on(&self) -> bool {
            self.on
        }
    }
}
