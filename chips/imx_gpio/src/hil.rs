// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Interface between the bus-class framework and the controller.
//!
//! The framework addresses pins as `(bank, pin)` pairs where `bank` is a
//! logical 16-pin bank and `pin` is in `0..16`. Pin masks are therefore 16
//! bits wide.

use bitflags::bitflags;

use crate::ErrorCode;

/// Logical bank identifier, `0..2 * physical_bank_count`.
pub type BankId = usize;

/// Pin number inside a logical bank, `0..16`.
pub type PinNumber = usize;

/// One bit per pin of a logical bank.
pub type BankMask = u16;

/// Number of pins in a logical bank.
pub const PINS_PER_BANK: usize = 16;

/// Enum for selecting how an interrupt is triggered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InterruptMode {
    LevelSensitive,
    EdgeTriggered,
}

/// Active level or edge of an interrupt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Polarity {
    ActiveHigh,
    ActiveLow,
    /// Both edges. The hardware path does not support this; the framework
    /// emulates it by flipping the polarity with `reconfigure_interrupt`.
    ActiveBoth,
}

/// Pull resistor requested for a pin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PullMode {
    /// Keep the pull setting the pad had when the controller was prepared.
    Default,
    Disabled,
    PullUp,
    PullDown,
}

/// Alternate function requested for a pin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinFunction {
    /// The mux value the pad had when the controller was prepared.
    Default,
    /// A specific `MUX_MODE` value (`ALTn`).
    Alt(u32),
}

/// Direction requested when connecting GPIO pins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectMode {
    Input,
    Output,
}

bitflags! {
    /// Capabilities reported to the framework.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ControllerFlags: u32 {
        /// Registers are memory mapped and may be accessed at interrupt level.
        const MEMORY_MAPPED = 1 << 0;
        /// Read/write requests are passed as pin masks.
        const FORMAT_IO_REQUESTS_AS_MASKS = 1 << 1;
        /// Both-edge interrupts are emulated by the framework.
        const EMULATE_ACTIVE_BOTH = 1 << 2;
    }
}

/// Controller description returned by
/// [`GpioController::query_controller_basic_information`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BasicInformation {
    /// Number of absolute pins.
    pub total_pins: usize,
    /// Number of logical banks.
    pub bank_count: usize,
    pub pins_per_bank: usize,
    pub flags: ControllerFlags,
}

/// Callback set invoked by the bus-class framework.
///
/// Preparing and releasing the controller are not part of this trait: they
/// are [`crate::ImxGpio::prepare`] and dropping the controller.
pub trait GpioController {
    /// Reset the interrupt state of every bank. Called on power-up.
    fn start(&self) -> Result<(), ErrorCode>;

    /// Called on power-down. Nothing needs saving.
    fn stop(&self) -> Result<(), ErrorCode>;

    fn query_controller_basic_information(&self) -> BasicInformation;

    /// Claim `pins` of `bank` for manual I/O.
    ///
    /// Either every pin is connected or, on error, every pin is left in its
    /// captured default state.
    fn connect_io_pins(
        &self,
        bank: BankId,
        pins: &[PinNumber],
        mode: ConnectMode,
        pull: PullMode,
        vendor_data: &[u8],
    ) -> Result<(), ErrorCode>;

    fn disconnect_io_pins(&self, bank: BankId, pins: &[PinNumber]) -> Result<(), ErrorCode>;

    /// Switch `pins` to a peripheral function. The GPIO direction is left
    /// untouched.
    fn connect_function_config_pins(
        &self,
        bank: BankId,
        pins: &[PinNumber],
        function: PinFunction,
        pull: PullMode,
        vendor_data: &[u8],
    ) -> Result<(), ErrorCode>;

    fn disconnect_function_config_pins(
        &self,
        bank: BankId,
        pins: &[PinNumber],
    ) -> Result<(), ErrorCode>;

    /// Input pins report the pad level, output pins the driven value.
    fn read_gpio_pins_using_mask(&self, bank: BankId) -> Result<BankMask, ErrorCode>;

    /// Drive output pins in `set_mask` high and output pins in `clear_mask`
    /// low. Bits of input pins are ignored.
    fn write_gpio_pins_using_mask(
        &self,
        bank: BankId,
        set_mask: BankMask,
        clear_mask: BankMask,
    ) -> Result<(), ErrorCode>;

    fn enable_interrupt(
        &self,
        bank: BankId,
        pin: PinNumber,
        mode: InterruptMode,
        polarity: Polarity,
        pull: PullMode,
        vendor_data: &[u8],
    ) -> Result<(), ErrorCode>;

    fn disable_interrupt(&self, bank: BankId, pin: PinNumber) -> Result<(), ErrorCode>;

    fn mask_interrupts(&self, bank: BankId, mask: BankMask) -> Result<(), ErrorCode>;

    fn unmask_interrupt(&self, bank: BankId, pin: PinNumber) -> Result<(), ErrorCode>;

    /// Pins that are both pending and unmasked.
    fn query_active_interrupts(&self, bank: BankId) -> Result<BankMask, ErrorCode>;

    fn clear_active_interrupts(&self, bank: BankId, mask: BankMask) -> Result<(), ErrorCode>;

    fn query_enabled_interrupts(&self, bank: BankId) -> Result<BankMask, ErrorCode>;

    fn reconfigure_interrupt(
        &self,
        bank: BankId,
        pin: PinNumber,
        mode: InterruptMode,
        polarity: Polarity,
    ) -> Result<(), ErrorCode>;
}
