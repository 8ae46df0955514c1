// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! IOMUX Controller: pin functions, pad control and input select ownership.
//!
//! Every pad has a mux register (`SW_MUX_CTL_PAD_*`) selecting one of up to
//! eight alternate functions and a pad control register (`SW_PAD_CTL_PAD_*`).
//! Some functions are peripheral inputs that several pads can drive. Which pad
//! is connected is decided by a `*_SELECT_INPUT` (daisy chain) register, and
//! only one pad can be routed at a time. Each of those registers is an
//! [`InputSelectSlot`] with an atomic owner. A pin claims the slot before its
//! mux is switched and gives it back when it moves to another function.
//!
//! The engine works on absolute pin numbers. Translation and validation of
//! logical bank/pin pairs happens in the controller.

use alloc::vec::Vec;
use core::sync::atomic::{AtomicU32, Ordering};

use tock_registers::interfaces::{Readable, Writeable};
use tock_registers::register_bitfields;
use tock_registers::registers::ReadWrite;

use crate::hil::{PinFunction, PullMode};
use crate::mmio::Mapped;
use crate::platform::Platform;
use crate::soc::SocProfile;
use crate::ErrorCode;

register_bitfields![u32,
    SW_MUX_CTL_PAD [
        // MUX Mode Select Field
        MUX_MODE OFFSET(0) NUMBITS(3) []
    ]
];

/// Owner value of a slot nobody has claimed.
const UNOWNED: u32 = u32::MAX;

/// Largest `ALTn` the mux field can encode.
pub const MAX_ALTERNATE_FUNCTION: u32 = 7;

/// A pad as found when the controller was prepared.
#[derive(Clone, Copy, Debug)]
pub(crate) struct CapturedPin {
    pad_mux: u16,
    pad_ctl: u16,
    default_mux: u32,
    default_pad: u32,
    /// Index of the pin's first entry in the input select table.
    first_select: Option<usize>,
}

/// A `SELECT_INPUT` register shared by several pins.
#[derive(Debug)]
pub(crate) struct InputSelectSlot {
    register: u16,
    default_value: u32,
    owner: AtomicU32,
}

impl InputSelectSlot {
    fn owner(&self) -> Option<usize> {
        match self.owner.load(Ordering::Acquire) {
            UNOWNED => None,
            pin => Some(pin as usize),
        }
    }
}

pub(crate) struct Iomuxc<'a, P: Platform> {
    profile: &'static SocProfile,
    registers: Mapped<'a, P, [ReadWrite<u32>]>,
    /// Indexed by absolute pin.
    pins: Vec<Option<CapturedPin>>,
    slots: Vec<InputSelectSlot>,
    /// Slot used by each input select table entry.
    entry_slots: Vec<usize>,
}

impl<'a, P: Platform> Iomuxc<'a, P> {
    /// Map the IOMUXC block and capture the current pad configuration as the
    /// hardware defaults.
    pub(crate) fn new(
        platform: &'a P,
        profile: &'static SocProfile,
        physical_address: u64,
        length: usize,
    ) -> Result<Self, ErrorCode> {
        let registers = Mapped::new_words(platform, physical_address, length)?;

        let mut pins = Vec::new();
        pins.resize(profile.pin_count, None);
        for range in profile.pins {
            for i in 0..range.count {
                let pad_mux = range.pad_mux + 4 * i;
                let pad_ctl = range.pad_ctl + 4 * i;
                if let Some(pin) = pins.get_mut(usize::from(range.first_pin + i)) {
                    *pin = Some(CapturedPin {
                        pad_mux,
                        pad_ctl,
                        default_mux: registers.at(pad_mux).get(),
                        default_pad: registers.at(pad_ctl).get(),
                        first_select: None,
                    });
                }
            }
        }

        let mut slots: Vec<InputSelectSlot> = Vec::new();
        let mut entry_slots = Vec::with_capacity(profile.input_selects.len());
        for (index, entry) in profile.input_selects.iter().enumerate() {
            let slot = match slots.iter().position(|s| s.register == entry.register) {
                Some(slot) => slot,
                None => {
                    slots.push(InputSelectSlot {
                        register: entry.register,
                        default_value: registers.at(entry.register).get(),
                        owner: AtomicU32::new(UNOWNED),
                    });
                    slots.len() - 1
                }
            };
            entry_slots.push(slot);

            if let Some(Some(pin)) = pins.get_mut(usize::from(entry.pin)) {
                pin.first_select.get_or_insert(index);
            }
        }

        log::debug!(
            "captured {} pads and {} input select registers",
            pins.iter().flatten().count(),
            slots.len()
        );

        Ok(Iomuxc {
            profile,
            registers,
            pins,
            slots,
            entry_slots,
        })
    }

    fn captured(&self, pin: usize) -> Result<&CapturedPin, ErrorCode> {
        match self.pins.get(pin) {
            Some(Some(captured)) => Ok(captured),
            _ => {
                log::debug!("pin {} has no pad data", pin);
                Err(ErrorCode::NOSUPPORT)
            }
        }
    }

    /// Whether the pin has a mux and pad control register.
    pub(crate) fn is_muxable(&self, pin: usize) -> bool {
        matches!(self.pins.get(pin), Some(Some(_)))
    }

    /// Pin currently owning the input select register at `register`.
    pub(crate) fn input_select_owner(&self, register: u16) -> Option<usize> {
        self.slots
            .iter()
            .find(|slot| slot.register == register)
            .and_then(InputSelectSlot::owner)
    }

    /// Table entry routing `pin` to a peripheral when its mux holds `mux`.
    fn find_alternate_input_select(
        &self,
        captured: &CapturedPin,
        pin: usize,
        mux: u32,
    ) -> Option<usize> {
        let function = SW_MUX_CTL_PAD::MUX_MODE.read(mux);
        let first = captured.first_select?;
        self.profile.input_selects[first..]
            .iter()
            .take_while(|entry| usize::from(entry.pin) == pin)
            .position(|entry| u32::from(entry.function) == function)
            .map(|offset| first + offset)
    }

    fn set_pull_mode(&self, captured: &CapturedPin, mode: PullMode) -> Result<(), ErrorCode> {
        let pull = &self.profile.pull;
        let value = match mode {
            PullMode::Default => (captured.default_pad >> pull.shift) & pull.mask,
            PullMode::Disabled => pull.disabled,
            PullMode::PullUp => pull.up,
            PullMode::PullDown => pull.down.ok_or_else(|| {
                log::debug!("{:?} pads have no pull-down", self.profile.family);
                ErrorCode::NOSUPPORT
            })?,
        };

        let pad = self.registers.at(captured.pad_ctl);
        pad.set((pad.get() & !(pull.mask << pull.shift)) | (value << pull.shift));
        Ok(())
    }

    /// Overwrite the pad control register of `pin`.
    pub(crate) fn set_pad_control(&self, pin: usize, value: u32) -> Result<(), ErrorCode> {
        let captured = self.captured(pin)?;
        self.registers.at(captured.pad_ctl).set(value);
        Ok(())
    }

    /// Route `pin` to `function` with the requested pull.
    ///
    /// If the function needs an input select register, the register is
    /// claimed first. A register owned by another pin fails the call with
    /// `BUSY` before anything is written. A register the pin held for its
    /// previous function is restored and given back.
    pub(crate) fn set_pin_function(
        &self,
        pin: usize,
        pull: PullMode,
        function: PinFunction,
    ) -> Result<(), ErrorCode> {
        let captured = self.captured(pin)?;
        let mux = self.registers.at(captured.pad_mux);

        let current = self.find_alternate_input_select(captured, pin, mux.get());
        let mux_value = match function {
            PinFunction::Default => captured.default_mux,
            PinFunction::Alt(alt) if alt <= MAX_ALTERNATE_FUNCTION => alt,
            PinFunction::Alt(alt) => {
                log::debug!("ALT{} does not fit the mux field", alt);
                return Err(ErrorCode::INVAL);
            }
        };
        let new = self.find_alternate_input_select(captured, pin, mux_value);
        let new_slot = new.map(|entry| self.entry_slots[entry]);

        // `Some(previous)` if this call took the slot.
        let mut claimed = None;
        if let Some(slot) = new_slot {
            let slot = &self.slots[slot];
            match slot.owner.compare_exchange(
                UNOWNED,
                pin as u32,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(previous) => claimed = Some(previous),
                Err(owner) if owner == pin as u32 => {}
                Err(owner) => {
                    log::warn!(
                        "pin {}: input select {:#x} is owned by pin {}",
                        pin,
                        slot.register,
                        owner
                    );
                    return Err(ErrorCode::BUSY);
                }
            }
        }

        if let Err(e) = self.set_pull_mode(captured, pull) {
            if let (Some(slot), Some(previous)) = (new_slot, claimed) {
                self.slots[slot].owner.store(previous, Ordering::Release);
            }
            return Err(e);
        }

        if let Some(entry) = current {
            let slot = self.entry_slots[entry];
            if new_slot != Some(slot) {
                self.release(slot, pin);
            }
        }

        if let (Some(entry), Some(slot)) = (new, new_slot) {
            let value = u32::from(self.profile.input_selects[entry].value);
            let slot = &self.slots[slot];
            self.registers.at(slot.register).set(value);
            log::debug!("pin {}: input select {:#x} = {}", pin, slot.register, value);
        }

        mux.set(mux_value);
        Ok(())
    }

    /// Put `pin` back in the state it had when the controller was prepared.
    ///
    /// An input select register is only touched if `pin` owns it. Calling
    /// this on a pin that is already reset changes nothing.
    pub(crate) fn reset_pin_function(&self, pin: usize) -> Result<(), ErrorCode> {
        let captured = self.captured(pin)?;
        let mux = self.registers.at(captured.pad_mux);
        let current = self.find_alternate_input_select(captured, pin, mux.get());

        mux.set(captured.default_mux);
        self.registers.at(captured.pad_ctl).set(captured.default_pad);

        if let Some(entry) = current {
            let slot = self.entry_slots[entry];
            match self.slots[slot].owner() {
                Some(owner) if owner == pin => self.release(slot, pin),
                Some(owner) => log::warn!(
                    "pin {}: input select {:#x} now belongs to pin {}",
                    pin,
                    self.slots[slot].register,
                    owner
                ),
                None => log::debug!(
                    "pin {}: input select {:#x} already released",
                    pin,
                    self.slots[slot].register
                ),
            }
        }
        Ok(())
    }

    /// Restore a slot owned by `pin` and mark it free. The register holds its
    /// default again before any other pin can claim it.
    fn release(&self, slot: usize, pin: usize) {
        let slot = &self.slots[slot];
        if slot.owner.load(Ordering::Acquire) != pin as u32 {
            return;
        }
        self.registers.at(slot.register).set(slot.default_value);
        if slot
            .owner
            .compare_exchange(pin as u32, UNOWNED, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            log::debug!("pin {}: released input select {:#x}", pin, slot.register);
        }
    }
}
