//! Analog I/O HAL
//!
//! ADC reads and PWM writes. Implementation is selected at compile time based
//! on platform feature.
//!
//! - Arduino: Calls `analogRead`/`analogWrite` from the core
//! - Stub: Writes are dropped, reads return 0

#[cfg(feature = "platform-arduino")]
mod arduino;
#[cfg(feature = "platform-arduino")]
pub use arduino::*;

#[cfg(not(feature = "platform-arduino"))]
mod none;
#[cfg(not(feature = "platform-arduino"))]
pub use none::*;

/// Full-scale reading of the 10-bit ADC
pub const ANALOG_READ_MAX: u16 = 1023;

/// Duty cycle that keeps a PWM pin always on
pub const ANALOG_WRITE_MAX: u16 = 255;
