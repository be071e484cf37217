//! # Time Capability
//!
//! Time access behind a port: [`clock::Clock`] abstracts "now" so
//! repositories stamp records without touching system time directly, and
//! tests can pin the clock.

pub mod clock;
pub mod local;
pub mod system_clock;

pub use clock::Clock;
pub use system_clock::SystemClock;
