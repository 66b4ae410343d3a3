//! Analog I/O HAL stub for builds without hardware

use log::trace;

/// Write a PWM duty cycle, 0 (always off) to 255 (always on) (stub - no action)
pub fn analog_write(pin: u8, value: u16) {
    trace!("analog_write({}, {}) ignored", pin, value);
}

/// Read the ADC on a pin (stub - always 0)
pub fn analog_read(_pin: u8) -> u16 {
    0
}
