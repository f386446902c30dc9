//! Console output fan-out and standard stream layer
//!
//! Every byte written to the system console can be observed by an
//! arbitrary number of logging consumers, and the console itself is
//! exposed as the three standard streams so generic formatted-I/O code can
//! use it. The write path is safe from interrupt context, on any CPU, with
//! observers registering and unregistering while output is in flight.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//! - `arch`: architecture-specific interrupt masking (AArch64 + host mock)
//! - `sync`: the interrupt-masking spin lock guarding shared state
//! - `components`: minimal console device components (PL011, null, mock)
//! - `mux`: the console multiplexer and its observer registry
//! - `stdio`: the standard stream table and `core::fmt` bridging
//! - `debug`: `kprint!` / `kprintln!` and the leveled log macros
//! - `config`: compile-time component composition
//!
//! # Usage
//!
//! ```ignore
//! conmux::config::init_console();
//! conmux::config::CONSOLE_MUX.register_observer(&MY_LOGGER)?;
//! conmux::kprintln!("console up");
//! ```
//!
//! This layer does not buffer, does not format beyond `core::fmt`
//! bridging, and does not guarantee delivery to any observer; it is a
//! best-effort fan-out in front of a byte device.

#![no_std]

#[cfg(test)]
extern crate std;

pub mod arch;
pub mod components;
pub mod config;
pub mod debug;
pub mod mux;
pub mod stdio;
pub mod sync;


pub use components::console::{ConsoleDevice, ConsoleError};
pub use mux::{ConsoleMux, ConsoleObserver, RegistryError, MAX_OBSERVERS};
pub use stdio::{StdStream, Stdio, Stream, StreamId, StreamWriter};
