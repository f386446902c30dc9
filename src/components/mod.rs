//! Kernel components
//!
//! Minimal components built into the kernel for essential functionality.
//! These are NOT full-featured drivers - the console components provide
//! only what the multiplexer needs: one byte out, one byte in.
//!
//! Full-featured UART drivers with interrupts, DMA, and buffering belong
//! in user-space; they observe console traffic by registering an observer
//! with the multiplexer instead of living here.
//!
//! Components are composed at compile time via cargo features; see
//! `crate::config`.

pub mod console;
