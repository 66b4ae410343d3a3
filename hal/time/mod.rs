//! Timing HAL
//!
//! Milliseconds since the program started. Implementation is selected at compile
//! time based on platform feature.
//!
//! - Arduino: Uses the core's Timer0 overflow counter
//! - Stub: Time never advances

#[cfg(feature = "platform-arduino")]
mod arduino;
#[cfg(feature = "platform-arduino")]
pub use arduino::*;

#[cfg(not(feature = "platform-arduino"))]
mod none;
#[cfg(not(feature = "platform-arduino"))]
pub use none::*;
