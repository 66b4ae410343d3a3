//! EEPROM HAL stub for builds without hardware
//!
//! There is no backing store. Writes are logged and dropped so a sketch that
//! reads back what it wrote sees 0, exactly like a blank emulated device.

use log::trace;

/// Read the cell at `address` (stub - always 0)
pub fn read(_address: u16) -> u16 {
    0
}

/// Write a cell (stub - no action)
pub fn write(address: u16, value: u16) {
    trace!("eeprom::write({}, {}) ignored", address, value);
}

/// Write a cell only if it differs (stub - no action)
pub fn update(address: u16, value: u16) {
    trace!("eeprom::update({}, {}) ignored", address, value);
}

/// Read a value starting at `address` (stub - always 0)
pub fn get(_address: u16, _data: u16) -> u16 {
    0
}

/// Store a value starting at `address` (stub - no action)
pub fn put(address: u16, data: u16) {
    trace!("eeprom::put({}, {}) ignored", address, data);
}

/// Number of cells (stub - always 0)
pub fn length() -> u16 {
    0
}

/// Index of the first cell (stub - always 0)
pub fn begin() -> u16 {
    0x0
}

/// Index one past the last cell (stub - always 0)
pub fn end() -> u16 {
    0
}
