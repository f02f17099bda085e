//! Shared utilities for render drivers.

pub mod frame_timing;
