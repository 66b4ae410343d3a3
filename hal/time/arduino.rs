//! Arduino core timing

use core::ffi::c_ulong;

extern "C" {
    #[link_name = "millis"]
    fn arduino_millis() -> c_ulong;
}

/// Milliseconds since the board began running the current program
///
/// Wraps around after roughly 49.7 days.
pub fn millis() -> u32 {
    // c_ulong is 32 bits on AVR
    unsafe { arduino_millis() as u32 }
}
