//! Adapter implementations for keyword discovery ports.

pub mod memory;
