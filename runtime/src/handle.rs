//! Opaque handles passed to the image by the firmware.
//!
//! Neither handle is ever dereferenced here: they are only carried from the entrypoint to the
//! services-access layer, which knows what they point to.

use core::{
    ffi::c_void,
    fmt,
    ptr::{self, NonNull},
};

use crate::error::InitError;

/// Identifies the running image.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ImageHandle(NonNull<c_void>);

impl ImageHandle {
    /// Wraps a raw image handle, rejecting null.
    pub fn from_ptr(ptr: *mut c_void) -> Result<Self, InitError> {
        NonNull::new(ptr).map(Self).ok_or(InitError::NullImageHandle)
    }

    /// Returns the raw handle.
    pub fn as_ptr(&self) -> *mut c_void {
        self.0.as_ptr()
    }
}

impl fmt::Debug for ImageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ImageHandle").field(&self.0).finish()
    }
}

/// Refers to the firmware's table of boot and runtime services.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ServicesTable(NonNull<c_void>);

impl ServicesTable {
    /// Wraps a raw system table pointer, rejecting null.
    pub fn from_ptr(ptr: *const c_void) -> Result<Self, InitError> {
        NonNull::new(ptr as *mut c_void)
            .map(Self)
            .ok_or(InitError::NullServicesTable)
    }

    /// Returns the raw table pointer.
    pub fn as_ptr(&self) -> *const c_void {
        self.0.as_ptr()
    }

    /// Returns true if this is the table at `ptr`.
    pub fn refers_to(&self, ptr: *const c_void) -> bool {
        ptr::eq(self.as_ptr(), ptr)
    }
}

impl fmt::Debug for ServicesTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ServicesTable").field(&self.0).finish()
    }
}
