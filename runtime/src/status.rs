//! UEFI status codes.

use core::fmt;

/// Bit marking a status code as an error rather than a warning.
const ERROR_BIT: usize = 1 << (usize::BITS - 1);

/// A standard UEFI status code, as returned by firmware services and by the image entrypoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The operation completed successfully.
    Success,
    /// The string contained characters that the device could not render.
    WarnUnknownGlyph,
    /// The handle was closed, but the file was not deleted.
    WarnDeleteFailure,
    /// The handle was closed, but the data was not flushed properly.
    WarnWriteFailure,
    /// The resulting buffer was too small, and the data was truncated.
    WarnBufferTooSmall,
    /// The image failed to load.
    LoadError,
    /// A parameter was incorrect.
    InvalidParameter,
    /// The operation is not supported.
    Unsupported,
    /// The buffer was not the proper size for the request.
    BadBufferSize,
    /// The buffer is not large enough to hold the requested data.
    BufferTooSmall,
    /// There is no data pending upon return.
    NotReady,
    /// The physical device reported an error while attempting the operation.
    DeviceError,
    /// The device cannot be written to.
    WriteProtected,
    /// A resource has run out.
    OutOfResources,
    /// The item was not found.
    NotFound,
    /// The operation was aborted.
    Aborted,
    /// Any other status code.
    ///
    /// [`Status::from`] never produces this for a code that has a named variant. A hand-built
    /// `Other` holding such a code is still classified by its numeric value.
    Other(usize),
}

impl Status {
    /// Returns true if the status is `Success`.
    pub fn is_success(self) -> bool {
        usize::from(self) == 0
    }

    /// Returns true if the status is a warning: the operation completed, with caveats.
    pub fn is_warning(self) -> bool {
        let code = usize::from(self);
        code != 0 && code & ERROR_BIT == 0
    }

    /// Returns true if the status is an error.
    pub fn is_error(self) -> bool {
        usize::from(self) & ERROR_BIT != 0
    }
}

impl From<usize> for Status {
    fn from(code: usize) -> Self {
        match code {
            0 => Status::Success,
            1 => Status::WarnUnknownGlyph,
            2 => Status::WarnDeleteFailure,
            3 => Status::WarnWriteFailure,
            4 => Status::WarnBufferTooSmall,
            c if c == ERROR_BIT | 1 => Status::LoadError,
            c if c == ERROR_BIT | 2 => Status::InvalidParameter,
            c if c == ERROR_BIT | 3 => Status::Unsupported,
            c if c == ERROR_BIT | 4 => Status::BadBufferSize,
            c if c == ERROR_BIT | 5 => Status::BufferTooSmall,
            c if c == ERROR_BIT | 6 => Status::NotReady,
            c if c == ERROR_BIT | 7 => Status::DeviceError,
            c if c == ERROR_BIT | 8 => Status::WriteProtected,
            c if c == ERROR_BIT | 9 => Status::OutOfResources,
            c if c == ERROR_BIT | 14 => Status::NotFound,
            c if c == ERROR_BIT | 21 => Status::Aborted,
            c => Status::Other(c),
        }
    }
}

impl From<Status> for usize {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => 0,
            Status::WarnUnknownGlyph => 1,
            Status::WarnDeleteFailure => 2,
            Status::WarnWriteFailure => 3,
            Status::WarnBufferTooSmall => 4,
            Status::LoadError => ERROR_BIT | 1,
            Status::InvalidParameter => ERROR_BIT | 2,
            Status::Unsupported => ERROR_BIT | 3,
            Status::BadBufferSize => ERROR_BIT | 4,
            Status::BufferTooSmall => ERROR_BIT | 5,
            Status::NotReady => ERROR_BIT | 6,
            Status::DeviceError => ERROR_BIT | 7,
            Status::WriteProtected => ERROR_BIT | 8,
            Status::OutOfResources => ERROR_BIT | 9,
            Status::NotFound => ERROR_BIT | 14,
            Status::Aborted => ERROR_BIT | 21,
            Status::Other(code) => code,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Status::Success => "success",
            Status::WarnUnknownGlyph => "unknown glyph",
            Status::WarnDeleteFailure => "delete failure",
            Status::WarnWriteFailure => "write failure",
            Status::WarnBufferTooSmall => "buffer too small, data truncated",
            Status::LoadError => "load error",
            Status::InvalidParameter => "invalid parameter",
            Status::Unsupported => "unsupported",
            Status::BadBufferSize => "bad buffer size",
            Status::BufferTooSmall => "buffer too small",
            Status::NotReady => "not ready",
            Status::DeviceError => "device error",
            Status::WriteProtected => "write protected",
            Status::OutOfResources => "out of resources",
            Status::NotFound => "not found",
            Status::Aborted => "aborted",
            Status::Other(code) => return write!(f, "status 0x{:x}", code),
        };
        f.write_str(msg)
    }
}
