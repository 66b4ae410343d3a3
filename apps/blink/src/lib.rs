//! Blink - sample sketch written against the HAL
//!
//! Toggles the builtin LED and drives a PWM pin from a potentiometer. The pot's
//! lower dead zone is calibrated once and kept in EEPROM.
//!
//! On the host the stub HAL reads every input as 0, so the sketch runs through
//! its cycles with the LED never observed lit and the PWM held at 0.

#![cfg_attr(feature = "platform-arduino", no_std)]

use hal::analog::{self, ANALOG_READ_MAX, ANALOG_WRITE_MAX};
use hal::{eeprom, gpio, map, time, MapResult, HIGH, LOW, OUTPUT};
use log::{debug, info, warn};

/// Builtin LED on the Uno
pub const LED_PIN: u8 = 13;
/// PWM capable pin driving the dimmed load
pub const PWM_PIN: u8 = 9;
/// ADC channel of the potentiometer
pub const POT_CHANNEL: u8 = 0;
/// EEPROM address of the stored dead-zone floor
pub const FLOOR_ADDRESS: u16 = 0;

pub const DEFAULT_CYCLES: u32 = 3;

/// Configure the pins used by the sketch
pub fn setup() {
    gpio::pin_mode(LED_PIN, OUTPUT);
    gpio::pin_mode(PWM_PIN, OUTPUT);
}

/// Load the calibrated floor, resetting it when the stored value is out of range
pub fn load_floor() -> u16 {
    let floor = eeprom::get(FLOOR_ADDRESS, 0);
    if floor > ANALOG_READ_MAX {
        warn!("stored floor {} out of range, resetting", floor);
        eeprom::put(FLOOR_ADDRESS, 0);
        return 0;
    }
    floor
}

/// PWM duty for a pot reading above the dead-zone `floor`
///
/// Readings inside the dead zone produce 0. Fails when the floor leaves no
/// usable range.
pub fn duty_for(reading: u16, floor: u16) -> MapResult<u16> {
    let reading = reading.max(floor);
    let duty = map(
        u32::from(reading),
        u32::from(floor),
        u32::from(ANALOG_READ_MAX),
        0,
        u32::from(ANALOG_WRITE_MAX),
    )?;
    Ok(duty as u16)
}

fn cycle(level: u8, floor: u16) -> MapResult<u16> {
    gpio::digital_write(LED_PIN, level);

    let reading = analog::analog_read(POT_CHANNEL);
    let duty = duty_for(reading, floor)?;
    analog::analog_write(PWM_PIN, duty);

    debug!(
        "led={} readback={} pot={} duty={}",
        level,
        gpio::digital_read(LED_PIN),
        reading,
        duty
    );
    Ok(duty)
}

/// Run the sketch for `cycles` LED toggles - portable entry point
pub fn run(cycles: u32) -> i32 {
    setup();
    let floor = load_floor();
    info!("blink: {} cycles, floor {}", cycles, floor);

    let mut level = LOW;
    for n in 0..cycles {
        level = if level == LOW { HIGH } else { LOW };
        match cycle(level, floor) {
            Ok(duty) => info!("cycle {} at {} ms: duty {}", n, time::millis(), duty),
            Err(e) => {
                warn!("cycle {} failed: {}", n, e);
                return 1;
            }
        }
    }
    0
}

#[cfg(feature = "platform-arduino")]
#[no_mangle]
pub extern "C" fn blink_main() -> i32 {
    run(DEFAULT_CYCLES)
}

#[cfg(feature = "platform-arduino")]
#[panic_handler]
fn panic(_info: &core::panic::PanicInfo) -> ! {
    loop {}
}
