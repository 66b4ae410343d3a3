//! Timing HAL stub for builds without hardware

/// Milliseconds since start (stub - always 0)
pub fn millis() -> u32 {
    0
}
