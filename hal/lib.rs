//! Hardware Abstraction Layer
//!
//! Mirrors the Arduino core API so sketches written against it can be built
//! and exercised on a development machine without a board attached.
//!
//! Platform-specific implementations are selected at compile time via Cargo features:
//! - `platform-arduino`: links against the real Arduino core and avr-libc
//! - no platform feature: stub backends that do nothing and read back zero

#![cfg_attr(feature = "platform-arduino", no_std)]

pub mod lang;
pub mod math;
pub mod mock;

#[cfg(feature = "analog")]
pub mod analog;
#[cfg(feature = "eeprom")]
pub mod eeprom;
#[cfg(feature = "gpio")]
pub mod gpio;
#[cfg(feature = "time")]
pub mod time;

pub use lang::*;
pub use math::{map, MapError, MapResult};
pub use mock::Mock;

#[cfg(feature = "analog")]
pub use analog::{analog_read, analog_write};
#[cfg(feature = "gpio")]
pub use gpio::{digital_read, digital_write, pin_mode};
#[cfg(feature = "time")]
pub use time::millis;
