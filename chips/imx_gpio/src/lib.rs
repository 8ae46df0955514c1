// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! GPIO and IOMUXC controller for the NXP i.MX6, i.MX7 and i.MX8M families.
//!
//! The controller sits between a bus-class framework and the GPIO/IOMUXC
//! register blocks. The framework sees banks of 16 pins ("logical" banks),
//! while the hardware groups 32 pins per bank and raises two interrupt lines
//! per bank. Every request is therefore translated from the logical bank/pin
//! pair to the physical one before it touches a register.
//!
//! The IOMUXC "input select" (daisy chain) registers route one of several
//! pads to a peripheral input. A register can be used by one pad at a time,
//! so the controller tracks an owner per register and refuses to hand a
//! register to a second pin.
//!
//! Usage
//! -----
//!
//! ```rust,ignore
//! let gpio = ImxGpio::prepare(&platform, cpu_revision, &resources)?;
//! gpio.connect_io_pins(6, &[3], ConnectMode::Output, PullMode::Default, &[])?;
//! gpio.write_gpio_pins_using_mask(6, 1 << 3, 0)?;
//! ```

#![no_std]

extern crate alloc;

// Host tests run with std.
#[cfg(test)]
#[macro_use]
extern crate std;

pub mod bank;
pub mod controller;
pub mod errorcode;
pub mod gpio;
pub mod hil;
pub mod iomuxc;
mod mmio;
pub mod platform;
pub mod soc;
pub mod vendor_data;


#[doc(inline)]
pub use crate::controller::ImxGpio;
#[doc(inline)]
pub use crate::errorcode::ErrorCode;
#[doc(inline)]
pub use crate::hil::GpioController;
#[doc(inline)]
pub use crate::platform::{Platform, Resource};
