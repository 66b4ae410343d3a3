//! Arduino core analog I/O

use core::ffi::c_int;

extern "C" {
    #[link_name = "analogWrite"]
    fn arduino_analog_write(pin: u8, val: c_int);
    #[link_name = "analogRead"]
    fn arduino_analog_read(pin: u8) -> c_int;
}

/// Write a PWM duty cycle, 0 (always off) to 255 (always on)
pub fn analog_write(pin: u8, value: u16) {
    unsafe { arduino_analog_write(pin, value as c_int) }
}

/// Read the ADC on a pin, 0 to 1023
pub fn analog_read(pin: u8) -> u16 {
    let raw = unsafe { arduino_analog_read(pin) };
    raw as u16
}
