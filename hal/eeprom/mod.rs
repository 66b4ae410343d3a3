//! EEPROM HAL
//!
//! Byte-addressed persistent storage in the shape of the Arduino `EEPROM`
//! library: cell access (`read`, `write`, `update`), word access (`get`, `put`)
//! and the cell range (`length`, `begin`, `end`).
//! Implementation is selected at compile time based on platform feature.
//!
//! - Arduino: Uses avr-libc `eeprom_*` routines
//! - Stub: Nothing is stored, every read returns 0
//!
//! ```
//! use mockduino_hal::eeprom;
//!
//! eeprom::update(0, 42);
//! assert_eq!(eeprom::read(0), 0);
//! ```

#[cfg(feature = "platform-arduino")]
mod arduino;
#[cfg(feature = "platform-arduino")]
pub use arduino::*;

#[cfg(not(feature = "platform-arduino"))]
mod none;
#[cfg(not(feature = "platform-arduino"))]
pub use none::*;
