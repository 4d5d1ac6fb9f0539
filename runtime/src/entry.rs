//! The image entrypoint handler.

use core::fmt;

use log::{debug, trace};

use crate::{
    config::{Config, WritePolicy},
    console::Console,
    handle::{ImageHandle, ServicesTable},
    runtime::Runtime,
    status::Status,
};

/// Progress of a single entrypoint invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Nothing has happened yet.
    Start,
    /// The services-access layer is set up.
    Initialized,
    /// The message was handed to the console.
    MessagePrinted,
    /// The status for the firmware is decided.
    Done,
}

/// Runs the image with the default configuration.
///
/// Initializes `runtime`, prints the greeting on its console and returns the status to hand
/// back to the firmware.
pub fn run<R: Runtime>(image: ImageHandle, table: ServicesTable, runtime: &mut R) -> Status {
    Entrypoint::new(runtime, Config::default()).run(image, table)
}

/// A single invocation of the image entrypoint.
pub struct Entrypoint<'r, R: Runtime> {
    runtime: &'r mut R,
    config: Config,
    state: State,
}

impl<R: Runtime> fmt::Debug for Entrypoint<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entrypoint")
            .field("config", &self.config)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<'r, R: Runtime> Entrypoint<'r, R> {
    /// Creates a new entrypoint invocation over `runtime`.
    pub fn new(runtime: &'r mut R, config: Config) -> Self {
        Self {
            runtime,
            config,
            state: State::Start,
        }
    }

    /// Returns how far the invocation got.
    pub fn state(&self) -> State {
        self.state
    }

    /// Runs the invocation to completion and returns the status for the firmware.
    ///
    /// A failure to initialize the services-access layer aborts the image right away with the
    /// initialization error's status and nothing is printed; [`Entrypoint::state`] is left at
    /// [`State::Start`].
    pub fn run(&mut self, image: ImageHandle, table: ServicesTable) -> Status {
        if let Err(e) = self.runtime.init(image, table) {
            debug!("entrypoint: {}", e);
            return e.status();
        }
        self.advance(State::Initialized);

        let written = self.runtime.console().write_str(self.config.message);
        self.advance(State::MessagePrinted);

        let status = match written {
            Ok(()) => Status::Success,
            Err(status) if !status.is_error() => {
                debug!("entrypoint: console warning: {}", status);
                Status::Success
            }
            Err(status) => match self.config.write_policy {
                WritePolicy::Propagate => status,
                WritePolicy::BestEffort => {
                    debug!("entrypoint: ignoring console error: {}", status);
                    Status::Success
                }
            },
        };
        self.advance(State::Done);

        status
    }

    fn advance(&mut self, next: State) {
        trace!("entrypoint: {:?} -> {:?}", self.state, next);
        self.state = next;
    }
}
