//! `Mock` facade
//!
//! Groups the core calls as associated functions on a zero-sized type, for
//! sketches written in the `Mock::millis()` style. Every function forwards to the
//! free function of the selected backend; constructing or dropping a `Mock` does
//! nothing.

use crate::math::{self, MapResult};

/// Zero-sized handle to the core API
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mock;

impl Mock {
    pub fn new() -> Self {
        Self
    }

    #[cfg(feature = "time")]
    pub fn millis() -> u32 {
        crate::time::millis()
    }

    #[cfg(feature = "gpio")]
    pub fn pin_mode(pin: u8, mode: u8) {
        crate::gpio::pin_mode(pin, mode)
    }

    #[cfg(feature = "gpio")]
    pub fn digital_write(pin: u8, value: u8) {
        crate::gpio::digital_write(pin, value)
    }

    #[cfg(feature = "gpio")]
    pub fn digital_read(pin: u8) -> u16 {
        crate::gpio::digital_read(pin)
    }

    #[cfg(feature = "analog")]
    pub fn analog_write(pin: u8, value: u16) {
        crate::analog::analog_write(pin, value)
    }

    #[cfg(feature = "analog")]
    pub fn analog_read(pin: u8) -> u16 {
        crate::analog::analog_read(pin)
    }

    /// See [`math::map`]
    pub fn map(
        in_value: u32,
        in_min: u32,
        in_max: u32,
        out_min: u32,
        out_max: u32,
    ) -> MapResult<u32> {
        math::map(in_value, in_min, in_max, out_min, out_max)
    }
}
