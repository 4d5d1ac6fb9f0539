//! Binding to the UEFI firmware through the `uefi` crate.

use core::fmt;

use log::debug;
use uefi::{
    proto::console::text::Output,
    table::{Boot, SystemTable},
    CStr16,
};

use crate::{
    console::Console,
    error::InitError,
    handle::{ImageHandle, ServicesTable},
    runtime::Runtime,
    status::Status,
    text,
};

impl From<uefi::Status> for Status {
    fn from(status: uefi::Status) -> Self {
        Status::from(status.0)
    }
}

impl From<Status> for uefi::Status {
    fn from(status: Status) -> Self {
        uefi::Status(usize::from(status))
    }
}

/// Services of the UEFI firmware the image was started by.
pub struct UefiRuntime {
    system_table: SystemTable<Boot>,
    initialized: bool,
}

impl UefiRuntime {
    /// Wraps the system table handed to the image's entrypoint.
    ///
    /// [`Runtime::init`] rejects any [`ServicesTable`] other than this one.
    pub fn new(system_table: SystemTable<Boot>) -> Self {
        Self {
            system_table,
            initialized: false,
        }
    }
}

impl fmt::Debug for UefiRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UefiRuntime")
            .field("initialized", &self.initialized)
            .finish_non_exhaustive()
    }
}

impl Runtime for UefiRuntime {
    type Console = Output;

    fn init(&mut self, image: ImageHandle, table: ServicesTable) -> Result<(), InitError> {
        if self.initialized {
            return Ok(());
        }

        if !table.refers_to(self.system_table.as_ptr()) {
            return Err(InitError::Runtime(Status::InvalidParameter));
        }

        uefi_services::init(&mut self.system_table)
            .map_err(|e| InitError::Runtime(e.status().into()))?;
        self.initialized = true;

        debug!("services initialized for {:?} ({:?})", image, table);
        Ok(())
    }

    fn console(&mut self) -> &mut Output {
        self.system_table.stdout()
    }
}

impl Console for Output {
    fn write_str(&mut self, s: &str) -> Result<(), Status> {
        text::write(s, |chunk| {
            let string = CStr16::from_u16_with_nul(chunk).map_err(|_| Status::InvalidParameter)?;
            self.output_string(string).map_err(|e| Status::from(e.status()))
        })
    }
}
