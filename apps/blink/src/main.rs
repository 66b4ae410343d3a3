//! Blink entry point
//!
//! For the host: standard main() function
//! For Arduino: entry point is blink_main() in lib.rs (built as staticlib)

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cycles = std::env::var("BLINK_CYCLES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(blink::DEFAULT_CYCLES);

    std::process::exit(blink::run(cycles));
}
