//! efirt is the runtime support of the `hello` UEFI application: a thin services-access layer
//! between the firmware and the image's entrypoint.
//!
//! Everything except the [`firmware`] module is target-independent, so the entrypoint logic can be
//! exercised on the host against a fake [`Runtime`].

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![deny(missing_debug_implementations)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod config;
pub mod console;
pub mod entry;
pub mod error;
pub mod handle;
pub mod runtime;
pub mod status;
pub mod text;

#[cfg(target_os = "uefi")]
pub mod firmware;

pub use config::{Config, WritePolicy, GREETING};
pub use console::Console;
pub use entry::{run, Entrypoint, State};
pub use error::InitError;
pub use handle::{ImageHandle, ServicesTable};
pub use runtime::Runtime;
pub use status::Status;
