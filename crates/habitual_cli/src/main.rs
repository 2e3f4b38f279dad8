//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `habitual_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("habitual_core ping={}", habitual_core::ping());
    println!("habitual_core version={}", habitual_core::core_version());
}
