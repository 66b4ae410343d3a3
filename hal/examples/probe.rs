//! Walks the HAL surface and prints what each call returns

use mockduino_hal::{analog, eeprom, gpio, lang, map, time};

fn main() {
    println!("Mock HAL Probe");
    println!("==============\n");

    println!("millis()            = {}", time::millis());

    println!("\nDigital I/O");
    gpio::pin_mode(13, lang::OUTPUT);
    gpio::digital_write(13, lang::HIGH);
    println!(
        "  digital_read(13)  = {} (after writing HIGH)",
        gpio::digital_read(13)
    );

    println!("\nAnalog I/O");
    analog::analog_write(9, analog::ANALOG_WRITE_MAX);
    println!(
        "  analog_read(9)    = {} (after writing {})",
        analog::analog_read(9),
        analog::ANALOG_WRITE_MAX
    );

    println!("\nEEPROM");
    println!(
        "  length/begin/end  = {}/{}/{}",
        eeprom::length(),
        eeprom::begin(),
        eeprom::end()
    );
    eeprom::put(0, 0xBEEF);
    println!("  get(0)            = {:#06x} (after put 0xbeef)", eeprom::get(0, 0));

    println!("\nRange mapping");
    for (value, in_max) in [(512, 1023), (5, 10), (3, 0)] {
        match map(value, 0, in_max, 0, 255) {
            Ok(mapped) => println!("  map({}, 0, {}, 0, 255) = {}", value, in_max, mapped),
            Err(e) => println!("  map({}, 0, {}, 0, 255) FAIL: {}", value, in_max, e),
        }
    }
}
