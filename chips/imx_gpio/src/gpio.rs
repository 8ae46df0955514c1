// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! General-purpose I/O banks.
//!
//! Each physical bank drives 32 pins and is shared by two logical banks. The
//! data, direction, interrupt mask and interrupt configuration registers are
//! shadowed in memory: a logical bank only updates its half of the shadow
//! with atomic AND/OR and then writes the whole shadow to the hardware, so the
//! other half is never read back from the device.

use core::sync::atomic::{AtomicU32, Ordering};

use tock_registers::interfaces::{Readable, Writeable};
use tock_registers::register_structs;
use tock_registers::registers::{ReadOnly, ReadWrite};

use crate::hil::{InterruptMode, Polarity};
use crate::mmio::Mapped;
use crate::platform::Platform;
use crate::ErrorCode;

register_structs! {
    /// General-purpose I/Os
    pub(crate) GpioRegisters {
        // GPIO data register
        (0x00 => dr: ReadWrite<u32>),
        // GPIO direction register
        (0x04 => gdir: ReadWrite<u32>),
        // GPIO pad status register
        (0x08 => psr: ReadOnly<u32>),
        // GPIO Interrupt configuration register 1
        (0x0c => icr1: ReadWrite<u32>),
        // GPIO Interrupt configuration register 2
        (0x10 => icr2: ReadWrite<u32>),
        // GPIO interrupt mask register
        (0x14 => imr: ReadWrite<u32>),
        // GPIO interrupt status register -- W1C - Write 1 to clear
        (0x18 => isr: ReadWrite<u32>),
        // GPIO edge select register
        (0x1c => edge_sel: ReadWrite<u32>),
        (0x20 => @END),
    }
}

/// Bytes of register space used by one bank.
pub const BANK_REGISTERS_SIZE: usize = 0x20;

// ICR encodings
const LOW_LEVEL_SENSITIVE: u32 = 0b00;
const HIGH_LEVEL_SENSITIVE: u32 = 0b01;
const RISING_EDGE_SENSITIVE: u32 = 0b10;
const FALLING_EDGE_SENSITIVE: u32 = 0b11;

trait U32Ext {
    fn set_bit(self, offset: usize) -> Self;
    fn clear_bit(self, offset: usize) -> Self;
    fn is_bit_set(self, offset: usize) -> bool;
}

impl U32Ext for u32 {
    #[inline(always)]
    fn set_bit(self, offset: usize) -> u32 {
        self | (1 << offset)
    }
    #[inline(always)]
    fn clear_bit(self, offset: usize) -> u32 {
        self & !(1 << offset)
    }
    #[inline(always)]
    fn is_bit_set(self, offset: usize) -> bool {
        (self & (1 << offset)) != 0
    }
}

/// ICR value for a mode/polarity pair.
///
/// Both-edge interrupts are emulated by the framework, so `ActiveBoth` is
/// `NOSUPPORT` for edges. A level cannot be both high and low, which makes
/// it `INVAL` for level interrupts.
pub fn icr_value(mode: InterruptMode, polarity: Polarity) -> Result<u32, ErrorCode> {
    match (mode, polarity) {
        (InterruptMode::LevelSensitive, Polarity::ActiveLow) => Ok(LOW_LEVEL_SENSITIVE),
        (InterruptMode::LevelSensitive, Polarity::ActiveHigh) => Ok(HIGH_LEVEL_SENSITIVE),
        (InterruptMode::EdgeTriggered, Polarity::ActiveHigh) => Ok(RISING_EDGE_SENSITIVE),
        (InterruptMode::EdgeTriggered, Polarity::ActiveLow) => Ok(FALLING_EDGE_SENSITIVE),
        (InterruptMode::EdgeTriggered, Polarity::ActiveBoth) => Err(ErrorCode::NOSUPPORT),
        (InterruptMode::LevelSensitive, Polarity::ActiveBoth) => Err(ErrorCode::INVAL),
    }
}

pub(crate) struct Bank<'a, P: Platform> {
    registers: Mapped<'a, P, GpioRegisters>,
    data: AtomicU32,
    direction: AtomicU32,
    /// GDIR as the boot firmware left it.
    boot_direction: u32,
    imr: AtomicU32,
    icr1: AtomicU32,
    icr2: AtomicU32,
}

impl<'a, P: Platform> Bank<'a, P> {
    /// Map the bank at `physical_address` and load the shadows.
    ///
    /// Interrupt state is left alone; call `reset_interrupts` before use.
    pub(crate) fn new(platform: &'a P, physical_address: u64) -> Result<Self, ErrorCode> {
        let registers: Mapped<'a, P, GpioRegisters> = Mapped::new(platform, physical_address)?;
        let direction = registers.gdir.get();
        Ok(Bank {
            data: AtomicU32::new(registers.dr.get()),
            direction: AtomicU32::new(direction),
            boot_direction: direction,
            imr: AtomicU32::new(registers.imr.get()),
            icr1: AtomicU32::new(registers.icr1.get()),
            icr2: AtomicU32::new(registers.icr2.get()),
            registers,
        })
    }

    /// Mask and unconfigure every interrupt and clear pending status.
    pub(crate) fn reset_interrupts(&self) {
        self.imr.store(0, Ordering::Release);
        self.registers.imr.set(0);
        self.icr1.store(0, Ordering::Release);
        self.registers.icr1.set(0);
        self.icr2.store(0, Ordering::Release);
        self.registers.icr2.set(0);
        self.registers.edge_sel.set(0);
        self.registers.isr.set(u32::MAX); // W1C
    }

    /// Set the trigger of physical pin `pin`. ICR1 holds pins 0 to 15 and
    /// ICR2 pins 16 to 31, two bits per pin.
    pub(crate) fn configure_interrupt(
        &self,
        pin: usize,
        mode: InterruptMode,
        polarity: Polarity,
    ) -> Result<(), ErrorCode> {
        let sensitive = icr_value(mode, polarity)?;
        let icr_offset = (pin % 16) * 2;
        let icr_mask = 0b11 << icr_offset;
        let sensitive = sensitive << icr_offset;

        let (shadow, register) = if pin < 16 {
            (&self.icr1, &self.registers.icr1)
        } else {
            (&self.icr2, &self.registers.icr2)
        };
        shadow.fetch_and(!icr_mask, Ordering::AcqRel);
        let icr = shadow.fetch_or(sensitive, Ordering::AcqRel) | sensitive;
        register.set(icr);

        log::trace!("pin {}: {:?} {:?}, icr {:#010x}", pin, mode, polarity, icr);
        Ok(())
    }

    /// Unmask `pin` after dropping a stale pending interrupt.
    pub(crate) fn enable_interrupt(&self, pin: usize) {
        let imr = self.imr.fetch_or(1 << pin, Ordering::AcqRel).set_bit(pin);
        self.registers.isr.set(1 << pin); // W1C
        self.registers.imr.set(imr);
    }

    /// Mask `pin` and acknowledge anything it left pending.
    pub(crate) fn disable_interrupt(&self, pin: usize) {
        let imr = self.imr.fetch_and(!(1 << pin), Ordering::AcqRel).clear_bit(pin);
        self.registers.imr.set(imr);
        self.registers.isr.set(1 << pin); // W1C
    }

    pub(crate) fn mask_interrupts(&self, mask: u32) {
        let imr = self.imr.fetch_and(!mask, Ordering::AcqRel) & !mask;
        self.registers.imr.set(imr);
    }

    pub(crate) fn unmask_interrupts(&self, mask: u32) {
        let imr = self.imr.fetch_or(mask, Ordering::AcqRel) | mask;
        self.registers.imr.set(imr);
    }

    /// Pending and unmasked interrupts, as the hardware reports them.
    pub(crate) fn active_interrupts(&self) -> u32 {
        self.registers.isr.get() & self.registers.imr.get()
    }

    pub(crate) fn clear_interrupts(&self, mask: u32) {
        self.registers.isr.set(mask); // W1C
    }

    pub(crate) fn enabled_interrupts(&self) -> u32 {
        self.imr.load(Ordering::Acquire)
    }

    pub(crate) fn make_output(&self, pin: usize) {
        let gdir = self.direction.fetch_or(1 << pin, Ordering::AcqRel).set_bit(pin);
        self.registers.gdir.set(gdir);
    }

    pub(crate) fn make_input(&self, pin: usize) {
        let gdir = self
            .direction
            .fetch_and(!(1 << pin), Ordering::AcqRel)
            .clear_bit(pin);
        self.registers.gdir.set(gdir);
    }

    /// Put the direction of `pin` back to its boot value.
    pub(crate) fn restore_direction(&self, pin: usize) {
        if self.boot_direction.is_bit_set(pin) {
            self.make_output(pin);
        } else {
            self.make_input(pin);
        }
    }

    /// Input pins read the pad, output pins the value being driven.
    pub(crate) fn read(&self) -> u32 {
        let outputs = self.direction.load(Ordering::Acquire);
        (self.registers.psr.get() & !outputs) | (self.data.load(Ordering::Acquire) & outputs)
    }

    /// Drive `set` high and `clear` low. Pins that are not outputs keep their
    /// data bit; `clear` wins over `set`.
    pub(crate) fn write(&self, set: u32, clear: u32) {
        let outputs = self.direction.load(Ordering::Acquire);
        let set = set & outputs;
        let clear = clear & outputs;
        self.data.fetch_or(set, Ordering::AcqRel);
        let dr = self.data.fetch_and(!clear, Ordering::AcqRel) & !clear;
        self.registers.dr.set(dr);
    }
}
