//! Arduino core digital I/O

use core::ffi::c_int;

extern "C" {
    #[link_name = "pinMode"]
    fn arduino_pin_mode(pin: u8, mode: u8);
    #[link_name = "digitalWrite"]
    fn arduino_digital_write(pin: u8, val: u8);
    #[link_name = "digitalRead"]
    fn arduino_digital_read(pin: u8) -> c_int;
}

/// Configure a pin as INPUT, OUTPUT or INPUT_PULLUP
pub fn pin_mode(pin: u8, mode: u8) {
    unsafe { arduino_pin_mode(pin, mode) }
}

/// Drive a pin HIGH or LOW
pub fn digital_write(pin: u8, value: u8) {
    unsafe { arduino_digital_write(pin, value) }
}

/// Read a digital pin, returning HIGH or LOW
pub fn digital_read(pin: u8) -> u16 {
    let level = unsafe { arduino_digital_read(pin) };
    level as u16
}
