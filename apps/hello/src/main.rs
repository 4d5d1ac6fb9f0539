//! Prints a greeting on the firmware console and returns to the firmware.

#![no_std]
#![no_main]

use efirt::{firmware::UefiRuntime, ImageHandle, ServicesTable};
use uefi::prelude::*;

#[entry]
fn efi_main(image_handle: Handle, system_table: SystemTable<Boot>) -> Status {
    let image = match ImageHandle::from_ptr(image_handle.as_ptr()) {
        Ok(image) => image,
        Err(e) => return e.status().into(),
    };
    let table = match ServicesTable::from_ptr(system_table.as_ptr()) {
        Ok(table) => table,
        Err(e) => return e.status().into(),
    };

    let mut runtime = UefiRuntime::new(system_table);
    efirt::run(image, table, &mut runtime).into()
}
