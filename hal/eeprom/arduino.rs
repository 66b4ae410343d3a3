//! avr-libc EEPROM access

/// EEPROM size of the ATmega328P (`E2END + 1`)
pub const EEPROM_SIZE: u16 = 1024;

extern "C" {
    fn eeprom_read_byte(p: *const u8) -> u8;
    fn eeprom_write_byte(p: *mut u8, value: u8);
    fn eeprom_update_byte(p: *mut u8, value: u8);
    fn eeprom_read_word(p: *const u16) -> u16;
    fn eeprom_update_word(p: *mut u16, value: u16);
}

/// Read the cell at `address`
pub fn read(address: u16) -> u16 {
    let cell = unsafe { eeprom_read_byte(address as usize as *const u8) };
    u16::from(cell)
}

/// Write the low byte of `value` to a cell
pub fn write(address: u16, value: u16) {
    unsafe { eeprom_write_byte(address as usize as *mut u8, value as u8) }
}

/// Write the low byte of `value` only if the cell differs, saving a write cycle
pub fn update(address: u16, value: u16) {
    unsafe { eeprom_update_byte(address as usize as *mut u8, value as u8) }
}

/// Read a word starting at `address`; `data` only selects the width
pub fn get(address: u16, _data: u16) -> u16 {
    unsafe { eeprom_read_word(address as usize as *const u16) }
}

/// Store a word starting at `address`, skipping cells that already match
pub fn put(address: u16, data: u16) {
    unsafe { eeprom_update_word(address as usize as *mut u16, data) }
}

pub fn length() -> u16 {
    EEPROM_SIZE
}

pub fn begin() -> u16 {
    0x0
}

pub fn end() -> u16 {
    EEPROM_SIZE
}
