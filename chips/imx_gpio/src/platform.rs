// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Services the controller borrows from its environment.

use core::ptr::NonNull;

/// Services provided by the bus-class framework and the OS.
pub trait Platform {
    /// Map `length` bytes of device memory starting at `physical_address`.
    /// Returns `None` if the mapping could not be created.
    fn map_io_space(&self, physical_address: u64, length: usize) -> Option<NonNull<u8>>;

    /// Undo a mapping returned by `map_io_space`.
    fn unmap_io_space(&self, base: NonNull<u8>, length: usize);

    /// Acquire the interrupt lock of a physical bank. Must not fail and must
    /// not be taken recursively.
    fn acquire_interrupt_lock(&self, physical_bank: usize);

    fn release_interrupt_lock(&self, physical_bank: usize);
}

/// Hardware resource assigned to the controller, in the order the OS
/// reported it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    Memory { start: u64, length: usize },
    Interrupt { vector: u32 },
}

/// Holds a physical bank's interrupt lock until dropped.
pub(crate) struct InterruptLockGuard<'a, P: Platform> {
    platform: &'a P,
    physical_bank: usize,
}

impl<'a, P: Platform> InterruptLockGuard<'a, P> {
    pub(crate) fn acquire(platform: &'a P, physical_bank: usize) -> Self {
        platform.acquire_interrupt_lock(physical_bank);
        InterruptLockGuard {
            platform,
            physical_bank,
        }
    }
}

impl<P: Platform> Drop for InterruptLockGuard<'_, P> {
    fn drop(&mut self) {
        self.platform.release_interrupt_lock(self.physical_bank);
    }
}
