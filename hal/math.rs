//! Math helpers
//!
//! Platform independent, so unlike the other HAL modules there is no backend
//! selection here.

use core::fmt;

use log::debug;

/// Range mapping errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapError {
    /// Source range is empty (`in_min == in_max`), so there is nothing to divide by
    InvalidRange,
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::InvalidRange => write!(f, "Invalid range: in_min equals in_max"),
        }
    }
}

/// Result type for range mapping
pub type MapResult<T> = Result<T, MapError>;

/// Re-map a number from one range to another
///
/// For ordered ranges a value of `in_min` maps to `out_min`, a value of `in_max`
/// to `out_max`, and values in between to values in between. The result is
/// truncated, never rounded, and neither inputs nor output are clamped.
///
/// When any difference would go negative (`in_value < in_min`, `in_max < in_min`
/// or `out_max < out_min`) the whole expression is evaluated with wrapping `u32`
/// arithmetic, giving exactly what the unsigned C formula gives. Otherwise the
/// product is carried in 64 bits, so an in-range value always lands in
/// `[out_min, out_max]` even where the 32-bit product would overflow.
///
/// ```
/// use mockduino_hal::{map, MapError};
///
/// assert_eq!(map(512, 0, 1023, 0, 255), Ok(127));
/// assert_eq!(map(7, 3, 3, 0, 100), Err(MapError::InvalidRange));
/// ```
pub fn map(
    in_value: u32,
    in_min: u32,
    in_max: u32,
    out_min: u32,
    out_max: u32,
) -> MapResult<u32> {
    let in_span = in_max.wrapping_sub(in_min);
    if in_span == 0 {
        debug!("map: empty source range [{}, {}]", in_min, in_max);
        return Err(MapError::InvalidRange);
    }

    let offset = in_value.wrapping_sub(in_min);
    let out_span = out_max.wrapping_sub(out_min);

    if in_value < in_min || in_max < in_min || out_max < out_min {
        return Ok((offset.wrapping_mul(out_span) / in_span).wrapping_add(out_min));
    }

    // offset and out_span both fit in 32 bits, so the product fits in 64
    let scaled = u64::from(offset) * u64::from(out_span) / u64::from(in_span);
    Ok((scaled as u32).wrapping_add(out_min))
}
