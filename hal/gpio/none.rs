//! Digital I/O HAL stub for builds without hardware

use log::trace;

/// Configure a pin as INPUT, OUTPUT or INPUT_PULLUP (stub - no action)
pub fn pin_mode(pin: u8, mode: u8) {
    trace!("pin_mode({}, {}) ignored", pin, mode);
}

/// Drive a pin HIGH or LOW (stub - no action)
pub fn digital_write(pin: u8, value: u8) {
    trace!("digital_write({}, {}) ignored", pin, value);
}

/// Read a digital pin (stub - always 0)
pub fn digital_read(_pin: u8) -> u16 {
    0
}
