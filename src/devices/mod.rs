//! Implementation of multiple [`crate::serial::SerialDevice`] backends.
//!
//! These are purely virtual, used for testing and host-side inspection of
//! serial traffic rather than to emulate a physical link-cable peripheral.

pub mod buffer;
pub mod stdout;
