// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Mapped register blocks.
//!
//! A peripheral's registers are modeled by a `#[repr(C)]` structure (or a
//! plain array of 32-bit registers). `Mapped` holds the virtual address the
//! platform handed back for that structure and dereferences to it, much like
//! a `StaticRef`, except that the mapping is returned to the platform when
//! the `Mapped` is dropped.

use core::mem;
use core::ops::Deref;
use core::ptr::NonNull;

use tock_registers::registers::ReadWrite;

use crate::platform::Platform;
use crate::ErrorCode;

pub(crate) struct Mapped<'a, P: Platform, T: ?Sized> {
    platform: &'a P,
    base: NonNull<T>,
    length: usize,
}

impl<'a, P: Platform, T> Mapped<'a, P, T> {
    /// Map a register structure at `physical_address`.
    ///
    /// `T` must describe the device's register layout with `tock_registers`
    /// register types only.
    pub(crate) fn new(platform: &'a P, physical_address: u64) -> Result<Self, ErrorCode> {
        let length = mem::size_of::<T>();
        let base = map(platform, physical_address, length)?;
        Ok(Mapped {
            platform,
            base: base.cast(),
            length,
        })
    }
}

impl<'a, P: Platform> Mapped<'a, P, [ReadWrite<u32>]> {
    /// Map `length` bytes as an array of 32-bit registers.
    pub(crate) fn new_words(
        platform: &'a P,
        physical_address: u64,
        length: usize,
    ) -> Result<Self, ErrorCode> {
        let base = map(platform, physical_address, length)?;
        let words = NonNull::slice_from_raw_parts(base.cast::<ReadWrite<u32>>(), length / 4);
        Ok(Mapped {
            platform,
            base: words,
            length,
        })
    }

    /// Register at byte offset `offset`.
    pub(crate) fn at(&self, offset: u16) -> &ReadWrite<u32> {
        &(**self)[usize::from(offset) / 4]
    }
}

fn map<P: Platform>(
    platform: &P,
    physical_address: u64,
    length: usize,
) -> Result<NonNull<u8>, ErrorCode> {
    match platform.map_io_space(physical_address, length) {
        Some(base) => {
            debug_assert!(base.as_ptr() as usize % mem::align_of::<u32>() == 0);
            Ok(base)
        }
        None => {
            log::error!(
                "failed to map {:#x} bytes at {:#x}",
                length,
                physical_address
            );
            Err(ErrorCode::NOMEM)
        }
    }
}

impl<P: Platform, T: ?Sized> Deref for Mapped<'_, P, T> {
    type Target = T;

    fn deref(&self) -> &T {
        // The platform keeps the mapping alive until `drop` returns it, and
        // register types only use volatile accesses through shared refs.
        unsafe { self.base.as_ref() }
    }
}

impl<P: Platform, T: ?Sized> Drop for Mapped<'_, P, T> {
    fn drop(&mut self) {
        self.platform
            .unmap_io_space(self.base.cast::<u8>(), self.length);
    }
}
