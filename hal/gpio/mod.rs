//! Digital I/O HAL
//!
//! Pin mode selection and digital pin read/write, using the constants from
//! [`crate::lang`] (`INPUT`, `OUTPUT`, `INPUT_PULLUP`, `HIGH`, `LOW`).
//! Implementation is selected at compile time based on platform feature.
//!
//! - Arduino: Calls `pinMode`/`digitalWrite`/`digitalRead` from the core
//! - Stub: Writes are dropped, reads return 0

#[cfg(feature = "platform-arduino")]
mod arduino;
#[cfg(feature = "platform-arduino")]
pub use arduino::*;

#[cfg(not(feature = "platform-arduino"))]
mod none;
#[cfg(not(feature = "platform-arduino"))]
pub use none::*;
