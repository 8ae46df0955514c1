// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! The controller instance handed to the bus-class framework.
//!
//! A pin can be opened for I/O, for interrupts, or both. Whoever opens it
//! first configures the pad; the pad goes back to its prepare-time defaults
//! only when the last of the two is closed.

use alloc::vec::Vec;
use core::sync::atomic::{AtomicU32, Ordering};

use crate::bank::{
    physical_bank, physical_pin, to_logical_mask, to_physical_mask, validate_bank,
    validate_bank_and_pin,
};
use crate::gpio::{self, Bank, BANK_REGISTERS_SIZE};
use crate::hil::{
    BankId, BankMask, BasicInformation, ConnectMode, ControllerFlags, GpioController,
    InterruptMode, PinFunction, PinNumber, Polarity, PullMode, PINS_PER_BANK,
};
use crate::iomuxc::Iomuxc;
use crate::platform::{InterruptLockGuard, Platform, Resource};
use crate::soc::{self, SocProfile};
use crate::vendor_data;
use crate::ErrorCode;

/// One bit per absolute pin.
struct PinSet {
    words: Vec<AtomicU32>,
}

impl PinSet {
    fn new(pin_count: usize) -> Self {
        let mut words = Vec::new();
        words.resize_with(pin_count.div_ceil(32), || AtomicU32::new(0));
        PinSet { words }
    }

    fn insert(&self, pin: usize) {
        self.words[pin / 32].fetch_or(1 << (pin % 32), Ordering::AcqRel);
    }

    fn remove(&self, pin: usize) {
        self.words[pin / 32].fetch_and(!(1 << (pin % 32)), Ordering::AcqRel);
    }

    fn contains(&self, pin: usize) -> bool {
        self.words[pin / 32].load(Ordering::Acquire) & (1 << (pin % 32)) != 0
    }
}

/// GPIO and IOMUXC controller of one i.MX SoC.
///
/// Dropping the controller unmaps every register block.
pub struct ImxGpio<'a, P: Platform> {
    platform: &'a P,
    profile: &'static SocProfile,
    banks: Vec<Bank<'a, P>>,
    iomuxc: Iomuxc<'a, P>,
    open_io_pins: PinSet,
    open_interrupt_pins: PinSet,
}

// SAFETY: the mapped register blocks are only accessed through
// `tock_registers` types, which use volatile accesses of whole registers, and
// every piece of software state shared between callers is atomic. Sections
// that need more than one access to stay consistent run under the platform's
// per-bank interrupt lock.
unsafe impl<P: Platform + Sync> Sync for ImxGpio<'_, P> {}

/// GPIO and IOMUXC windows taken from the resource list.
fn memory_resources(
    profile: &SocProfile,
    resources: &[Resource],
) -> Result<((u64, usize), (u64, usize)), ErrorCode> {
    let mut memory = Vec::with_capacity(2);
    let mut interrupts = 0;
    for resource in resources {
        match *resource {
            Resource::Memory { start, length } => memory.push((start, length)),
            Resource::Interrupt { .. } => interrupts += 1,
        }
    }

    if memory.len() != 2 || interrupts != 2 * profile.bank_count {
        log::error!(
            "expected 2 memory and {} interrupt resources, got {} and {}",
            2 * profile.bank_count,
            memory.len(),
            interrupts
        );
        return Err(ErrorCode::CONFIG);
    }

    let (gpio, iomuxc) = (memory[0], memory[1]);
    let gpio_size = (profile.bank_count - 1) * profile.bank_stride + BANK_REGISTERS_SIZE;
    if gpio.1 < gpio_size {
        log::error!("GPIO window {:#x} is smaller than {:#x}", gpio.1, gpio_size);
        return Err(ErrorCode::CONFIG);
    }
    let iomuxc_size = profile.iomuxc_span();
    if iomuxc.1 < iomuxc_size {
        log::error!(
            "IOMUXC window {:#x} is smaller than {:#x}",
            iomuxc.1,
            iomuxc_size
        );
        return Err(ErrorCode::CONFIG);
    }
    Ok((gpio, iomuxc))
}

impl<'a, P: Platform> ImxGpio<'a, P> {
    /// Build the controller for the CPU reporting `cpu_revision`.
    ///
    /// `resources` must list the GPIO window, then the IOMUXC window, and two
    /// interrupts per physical bank. On error every mapping made so far has
    /// been undone.
    pub fn prepare(
        platform: &'a P,
        cpu_revision: u32,
        resources: &[Resource],
    ) -> Result<Self, ErrorCode> {
        let profile = soc::resolve(cpu_revision)?;
        Self::with_profile(platform, profile, resources)
    }

    /// Build the controller for an already resolved profile.
    pub(crate) fn with_profile(
        platform: &'a P,
        profile: &'static SocProfile,
        resources: &[Resource],
    ) -> Result<Self, ErrorCode> {
        let ((gpio_start, _), (iomuxc_start, iomuxc_length)) =
            memory_resources(profile, resources)?;

        let mut banks = Vec::with_capacity(profile.bank_count);
        for bank in 0..profile.bank_count {
            let offset = (bank * profile.bank_stride) as u64;
            banks.push(Bank::new(platform, gpio_start + offset)?);
        }
        let iomuxc = Iomuxc::new(platform, profile, iomuxc_start, iomuxc_length)?;

        let gpio = ImxGpio {
            platform,
            profile,
            banks,
            iomuxc,
            open_io_pins: PinSet::new(profile.pin_count),
            open_interrupt_pins: PinSet::new(profile.pin_count),
        };

        if !profile.tables_are_consistent() {
            log::error!("{:?} pin tables failed the self-check", profile.family);
            return Err(ErrorCode::FAIL);
        }

        gpio.reset_all_banks();
        log::debug!(
            "{:?}: {} banks at {:#x}, IOMUXC at {:#x}",
            profile.family,
            profile.bank_count,
            gpio_start,
            iomuxc_start
        );
        Ok(gpio)
    }

    /// Pin owning the input select register at IOMUXC offset `register`.
    pub fn input_select_owner(&self, register: u16) -> Option<usize> {
        self.iomuxc.input_select_owner(register)
    }

    pub fn is_open_for_io(&self, bank: BankId, pin: PinNumber) -> Result<bool, ErrorCode> {
        let absolute = validate_bank_and_pin(self.profile, bank, pin)?;
        Ok(self.open_io_pins.contains(absolute))
    }

    pub fn is_open_for_interrupt(&self, bank: BankId, pin: PinNumber) -> Result<bool, ErrorCode> {
        let absolute = validate_bank_and_pin(self.profile, bank, pin)?;
        Ok(self.open_interrupt_pins.contains(absolute))
    }

    fn reset_all_banks(&self) {
        for bank in &self.banks {
            bank.reset_interrupts();
        }
    }

    fn bank(&self, bank: BankId) -> &Bank<'a, P> {
        &self.banks[physical_bank(bank)]
    }

    /// Absolute pin numbers of a batch, or an error if any of them is not
    /// usable.
    fn validate_pins(&self, bank: BankId, pins: &[PinNumber]) -> Result<Vec<usize>, ErrorCode> {
        pins.iter()
            .map(|&pin| {
                let absolute = validate_bank_and_pin(self.profile, bank, pin)?;
                if self.iomuxc.is_muxable(absolute) {
                    Ok(absolute)
                } else {
                    log::debug!("bank {} pin {} cannot be muxed", bank, pin);
                    Err(ErrorCode::NOSUPPORT)
                }
            })
            .collect()
    }

    /// Return already configured pins of a failed batch to their defaults.
    fn roll_back(&self, pins: &[usize]) {
        for &pin in pins.iter().rev() {
            if let Err(e) = self.iomuxc.reset_pin_function(pin) {
                log::error!("pin {}: rollback failed: {:?}", pin, e);
            }
        }
    }

    /// GPIO function, pull and optional pad control for one pin.
    fn configure_gpio_pad(
        &self,
        pin: usize,
        pull: PullMode,
        pad_control: Option<u32>,
    ) -> Result<(), ErrorCode> {
        self.iomuxc
            .set_pin_function(pin, pull, PinFunction::Alt(self.profile.gpio_function))?;
        if let Some(value) = pad_control {
            self.iomuxc.set_pad_control(pin, value)?;
        }
        Ok(())
    }

    /// Apply `configure` to every pin that `skip` does not exclude. If one
    /// fails, the pins configured before it are reset.
    fn configure_batch(
        &self,
        pins: &[usize],
        skip: impl Fn(usize) -> bool,
        configure: impl Fn(usize) -> Result<(), ErrorCode>,
    ) -> Result<(), ErrorCode> {
        let mut configured = Vec::with_capacity(pins.len());
        for &pin in pins {
            if skip(pin) {
                continue;
            }
            if let Err(e) = configure(pin) {
                self.roll_back(&configured);
                return Err(e);
            }
            configured.push(pin);
        }
        Ok(())
    }
}

impl<P: Platform> GpioController for ImxGpio<'_, P> {
    fn start(&self) -> Result<(), ErrorCode> {
        self.reset_all_banks();
        log::debug!("started");
        Ok(())
    }

    fn stop(&self) -> Result<(), ErrorCode> {
        Ok(())
    }

    fn query_controller_basic_information(&self) -> BasicInformation {
        BasicInformation {
            total_pins: self.profile.pin_count,
            bank_count: 2 * self.profile.bank_count,
            pins_per_bank: PINS_PER_BANK,
            flags: ControllerFlags::MEMORY_MAPPED
                | ControllerFlags::FORMAT_IO_REQUESTS_AS_MASKS
                | ControllerFlags::EMULATE_ACTIVE_BOTH,
        }
    }

    fn connect_io_pins(
        &self,
        bank: BankId,
        pins: &[PinNumber],
        mode: ConnectMode,
        pull: PullMode,
        vendor_data: &[u8],
    ) -> Result<(), ErrorCode> {
        let pad_control = vendor_data::parse(vendor_data)?;
        let absolute = self.validate_pins(bank, pins)?;

        self.configure_batch(
            &absolute,
            |pin| self.open_interrupt_pins.contains(pin),
            |pin| self.configure_gpio_pad(pin, pull, pad_control),
        )?;

        let gpio = self.bank(bank);
        for (&pin, &absolute) in pins.iter().zip(&absolute) {
            match mode {
                ConnectMode::Input => gpio.make_input(physical_pin(bank, pin)),
                ConnectMode::Output => gpio.make_output(physical_pin(bank, pin)),
            }
            self.open_io_pins.insert(absolute);
        }
        log::debug!("bank {}: connected {:?} as {:?}", bank, pins, mode);
        Ok(())
    }

    fn disconnect_io_pins(&self, bank: BankId, pins: &[PinNumber]) -> Result<(), ErrorCode> {
        let absolute = self.validate_pins(bank, pins)?;

        let gpio = self.bank(bank);
        for (&pin, &absolute) in pins.iter().zip(&absolute) {
            self.open_io_pins.remove(absolute);
            if !self.open_interrupt_pins.contains(absolute) {
                self.iomuxc.reset_pin_function(absolute)?;
                gpio.restore_direction(physical_pin(bank, pin));
            }
        }
        log::debug!("bank {}: disconnected {:?}", bank, pins);
        Ok(())
    }

    fn connect_function_config_pins(
        &self,
        bank: BankId,
        pins: &[PinNumber],
        function: PinFunction,
        pull: PullMode,
        vendor_data: &[u8],
    ) -> Result<(), ErrorCode> {
        let pad_control = vendor_data::parse(vendor_data)?;
        let absolute = self.validate_pins(bank, pins)?;

        self.configure_batch(
            &absolute,
            |_| false,
            |pin| {
                self.iomuxc.set_pin_function(pin, pull, function)?;
                if let Some(value) = pad_control {
                    self.iomuxc.set_pad_control(pin, value)?;
                }
                Ok(())
            },
        )?;
        log::debug!("bank {}: {:?} on {:?}", bank, function, pins);
        Ok(())
    }

    fn disconnect_function_config_pins(
        &self,
        bank: BankId,
        pins: &[PinNumber],
    ) -> Result<(), ErrorCode> {
        let absolute = self.validate_pins(bank, pins)?;
        for &pin in &absolute {
            self.iomuxc.reset_pin_function(pin)?;
        }
        Ok(())
    }

    fn read_gpio_pins_using_mask(&self, bank: BankId) -> Result<BankMask, ErrorCode> {
        validate_bank(self.profile, bank)?;
        Ok(to_logical_mask(bank, self.bank(bank).read()))
    }

    fn write_gpio_pins_using_mask(
        &self,
        bank: BankId,
        set_mask: BankMask,
        clear_mask: BankMask,
    ) -> Result<(), ErrorCode> {
        validate_bank(self.profile, bank)?;
        self.bank(bank).write(
            to_physical_mask(bank, set_mask),
            to_physical_mask(bank, clear_mask),
        );
        Ok(())
    }

    fn enable_interrupt(
        &self,
        bank: BankId,
        pin: PinNumber,
        mode: InterruptMode,
        polarity: Polarity,
        pull: PullMode,
        vendor_data: &[u8],
    ) -> Result<(), ErrorCode> {
        let absolute = validate_bank_and_pin(self.profile, bank, pin)?;
        let pad_control = vendor_data::parse(vendor_data)?;
        gpio::icr_value(mode, polarity)?;
        if !self.iomuxc.is_muxable(absolute) {
            return Err(ErrorCode::NOSUPPORT);
        }

        let physical = physical_pin(bank, pin);
        let gpio = self.bank(bank);
        let _lock = InterruptLockGuard::acquire(self.platform, physical_bank(bank));

        if !self.open_io_pins.contains(absolute) {
            self.configure_gpio_pad(absolute, pull, pad_control)?;
            gpio.make_input(physical);
        }
        gpio.configure_interrupt(physical, mode, polarity)?;
        gpio.enable_interrupt(physical);
        self.open_interrupt_pins.insert(absolute);

        log::debug!("bank {} pin {}: interrupt enabled", bank, pin);
        Ok(())
    }

    fn disable_interrupt(&self, bank: BankId, pin: PinNumber) -> Result<(), ErrorCode> {
        let absolute = validate_bank_and_pin(self.profile, bank, pin)?;
        if !self.iomuxc.is_muxable(absolute) {
            log::debug!("bank {} pin {} cannot be muxed", bank, pin);
            return Err(ErrorCode::NOSUPPORT);
        }

        let physical = physical_pin(bank, pin);
        let gpio = self.bank(bank);
        let _lock = InterruptLockGuard::acquire(self.platform, physical_bank(bank));

        gpio.disable_interrupt(physical);
        if !self.open_io_pins.contains(absolute) {
            self.iomuxc.reset_pin_function(absolute)?;
            gpio.restore_direction(physical);
        }
        self.open_interrupt_pins.remove(absolute);

        log::debug!("bank {} pin {}: interrupt disabled", bank, pin);
        Ok(())
    }

    fn mask_interrupts(&self, bank: BankId, mask: BankMask) -> Result<(), ErrorCode> {
        validate_bank(self.profile, bank)?;
        self.bank(bank).mask_interrupts(to_physical_mask(bank, mask));
        Ok(())
    }

    fn unmask_interrupt(&self, bank: BankId, pin: PinNumber) -> Result<(), ErrorCode> {
        validate_bank_and_pin(self.profile, bank, pin)?;
        self.bank(bank).unmask_interrupts(to_physical_mask(bank, 1 << pin));
        Ok(())
    }

    fn query_active_interrupts(&self, bank: BankId) -> Result<BankMask, ErrorCode> {
        validate_bank(self.profile, bank)?;
        Ok(to_logical_mask(bank, self.bank(bank).active_interrupts()))
    }

    fn clear_active_interrupts(&self, bank: BankId, mask: BankMask) -> Result<(), ErrorCode> {
        validate_bank(self.profile, bank)?;
        self.bank(bank).clear_interrupts(to_physical_mask(bank, mask));
        Ok(())
    }

    fn query_enabled_interrupts(&self, bank: BankId) -> Result<BankMask, ErrorCode> {
        validate_bank(self.profile, bank)?;
        Ok(to_logical_mask(bank, self.bank(bank).enabled_interrupts()))
    }

    fn reconfigure_interrupt(
        &self,
        bank: BankId,
        pin: PinNumber,
        mode: InterruptMode,
        polarity: Polarity,
    ) -> Result<(), ErrorCode> {
        validate_bank_and_pin(self.profile, bank, pin)?;
        gpio::icr_value(mode, polarity)?;

        let _lock = InterruptLockGuard::acquire(self.platform, physical_bank(bank));
        self.bank(bank)
            .configure_interrupt(physical_pin(bank, pin), mode, polarity)
    }
}
