//! ADC input selection commands
//!
//! - `'C'` selects the light sensor pair
//! - `'J'` selects the auxiliary header pair

use crate::config::AdcInput;
use crate::traits::PeripheralDriver;

use super::{Dispatch, Dispatcher};

/// Dispatcher switching the ADC input pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputSelect {
    input: AdcInput,
}

impl InputSelect {
    pub fn new(initial: AdcInput) -> Self {
        Self { input: initial }
    }

    pub fn input(&self) -> AdcInput {
        self.input
    }
}

impl<D> Dispatcher<D> for InputSelect
where
    D: PeripheralDriver<Config = AdcInput>,
{
    fn config(&self) -> AdcInput {
        self.input
    }

    fn dispatch(&mut self, byte: u8, driver: &mut D) -> Result<Dispatch, D::Error> {
        let Some(input) = AdcInput::from_command(byte) else {
            return Ok(Dispatch::Ignored);
        };

        driver.configure(input)?;
        self.input = input;
        Ok(Dispatch::Applied)
    }
}
