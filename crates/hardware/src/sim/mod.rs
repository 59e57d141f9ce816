//! Program loading and simulation driver.
//!
//! Provides the loader that turns program text into a memory image, and the
//! `Simulator` that owns a CPU together with its console.

/// Program text parsing and memory loading.
pub mod loader;

/// CPU plus console, driven as one unit.
pub mod simulator;
