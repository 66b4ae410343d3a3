//! Behaviour of the host stub backends
#![cfg(not(feature = "platform-arduino"))]

use mockduino_hal::{analog, eeprom, gpio, lang, map, time, MapError};

const BOUNDARY_PINS: [u8; 4] = [0, 1, 13, u8::MAX];
const BOUNDARY_ADDRESSES: [u16; 4] = [0, 1, 1023, u16::MAX];

#[test]
fn test_millis_is_zero() {
    assert_eq!(time::millis(), 0);
}

#[test]
fn test_digital_stubs_return_zero() {
    for pin in BOUNDARY_PINS {
        for mode in [lang::INPUT, lang::OUTPUT, lang::INPUT_PULLUP, u8::MAX] {
            gpio::pin_mode(pin, mode);
        }
        for level in [lang::HIGH, lang::LOW, u8::MAX] {
            gpio::digital_write(pin, level);
            assert_eq!(gpio::digital_read(pin), 0);
        }
    }
}

#[test]
fn test_analog_stubs_return_zero() {
    for pin in BOUNDARY_PINS {
        for value in [0, 1, analog::ANALOG_WRITE_MAX, u16::MAX] {
            analog::analog_write(pin, value);
            assert_eq!(analog::analog_read(pin), 0);
        }
    }
}

#[test]
fn test_eeprom_write_then_read_returns_zero() {
    for address in BOUNDARY_ADDRESSES {
        eeprom::write(address, 0x5A);
        assert_eq!(eeprom::read(address), 0);

        eeprom::update(address, 0xA5);
        assert_eq!(eeprom::read(address), 0);

        eeprom::put(address, u16::MAX);
        assert_eq!(eeprom::get(address, u16::MAX), 0);
        assert_eq!(eeprom::get(address, 0), 0);
    }
}

#[test]
fn test_eeprom_bounds_are_zero() {
    assert_eq!(eeprom::length(), 0);
    assert_eq!(eeprom::begin(), 0);
    assert_eq!(eeprom::end(), 0);
}

#[test]
fn test_constants() {
    assert_eq!(lang::HIGH, 1);
    assert_eq!(lang::LOW, 0);
    assert_ne!(lang::HIGH, lang::LOW);

    assert_eq!(lang::INPUT, 0);
    assert_eq!(lang::OUTPUT, 1);
    assert_eq!(lang::INPUT_PULLUP, 2);
    assert_ne!(lang::INPUT_PULLUP, lang::INPUT);
    assert_ne!(lang::INPUT_PULLUP, lang::OUTPUT);

    let edges = [lang::CHANGE, lang::FALLING, lang::RISING];
    assert_eq!(edges, [1, 2, 3]);
    for (i, a) in edges.iter().enumerate() {
        for b in &edges[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_type_aliases() {
    let w: lang::Word = u16::MAX;
    let b: lang::Byte = u8::MAX;
    let flag: lang::Boolean = true;
    assert_eq!(core::mem::size_of_val(&w), 2);
    assert_eq!(core::mem::size_of_val(&b), 1);
    assert!(flag);
}

#[test]
fn test_map_endpoints_and_bounds() {
    let ranges: [(u32, u32, u32, u32); 6] = [
        (0, 10, 0, 100),
        (0, 1023, 0, 255),
        (100, 200, 0, 1),
        (3, 7, 50, 51),
        (0, u32::MAX, 0, u32::MAX),
        (1_000, 1_000_000, 7, 4_000_000_000),
    ];

    for (in_min, in_max, out_min, out_max) in ranges {
        assert_eq!(map(in_min, in_min, in_max, out_min, out_max), Ok(out_min));
        assert_eq!(map(in_max, in_min, in_max, out_min, out_max), Ok(out_max));

        let step = ((in_max - in_min) / 64).max(1);
        let mut value = in_min;
        loop {
            let mapped = map(value, in_min, in_max, out_min, out_max).unwrap();
            assert!(
                (out_min..=out_max).contains(&mapped),
                "map({}, {}, {}, {}, {}) = {} out of bounds",
                value,
                in_min,
                in_max,
                out_min,
                out_max,
                mapped
            );
            match value.checked_add(step) {
                Some(next) if next <= in_max => value = next,
                _ => break,
            }
        }
    }
}

#[test]
fn test_map_is_monotonic() {
    let mut previous = 0;
    for value in 0..=1023 {
        let mapped = map(value, 0, 1023, 0, 255).unwrap();
        assert!(mapped >= previous);
        previous = mapped;
    }
    assert_eq!(previous, 255);
}

#[test]
fn test_map_rejects_empty_range() {
    for value in [0, 1, 50, u32::MAX] {
        assert_eq!(map(value, 0, 0, 0, 100), Err(MapError::InvalidRange));
    }
}

#[test]
fn test_package_is_mit_licensed() {
    assert_eq!(env!("CARGO_PKG_LICENSE"), "MIT");
}
