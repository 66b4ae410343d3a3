//! Arduino language constants and typedefs
//!
//! Logic levels, pin modes, interrupt trigger modes and the `word`/`byte`/`boolean`
//! aliases, with the values from `Arduino.h`. Only `Word` depends on the
//! platform: the core defines it as the C `unsigned int`.

/// Logic level HIGH
pub const HIGH: u8 = 0x1;
/// Logic level LOW
pub const LOW: u8 = 0x0;

/// Pin mode INPUT
pub const INPUT: u8 = 0x0;
/// Pin mode OUTPUT
pub const OUTPUT: u8 = 0x1;
/// Pin mode INPUT_PULLUP
pub const INPUT_PULLUP: u8 = 0x2;

/// Interrupt on any edge
pub const CHANGE: u8 = 1;
/// Interrupt on falling edge
pub const FALLING: u8 = 2;
/// Interrupt on rising edge
pub const RISING: u8 = 3;

/// Arduino `word` (16 bits on AVR)
#[cfg(feature = "platform-arduino")]
pub type Word = core::ffi::c_uint;
/// Arduino `word`
#[cfg(not(feature = "platform-arduino"))]
pub type Word = u16;

/// Arduino `boolean`
pub type Boolean = bool;
/// Arduino `byte`
pub type Byte = u8;
