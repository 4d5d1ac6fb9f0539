//! The services-access layer.

use crate::{
    console::Console,
    error::InitError,
    handle::{ImageHandle, ServicesTable},
};

/// Access to the services a firmware runtime provides to a running image.
///
/// The entrypoint receives this as an explicit capability instead of reaching for global state,
/// which lets tests substitute their own console.
pub trait Runtime {
    /// The console exposed by the runtime.
    type Console: Console;

    /// Performs the one-time setup of the services-access layer.
    ///
    /// `image` and `table` must be the handles the image was started with; a binding that
    /// already owns its table rejects a different one. Calling this again after a successful
    /// initialization must be a no-op.
    fn init(&mut self, image: ImageHandle, table: ServicesTable) -> Result<(), InitError>;

    /// Returns the standard output console.
    fn console(&mut self) -> &mut Self::Console;
}
