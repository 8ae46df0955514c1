// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! i.MX8M Quad/Dual/QuadLite
//!
//! Five GPIO banks 64 KiB apart; GPIO1 stops at GPIO1_IO29 and GPIO5 at
//! GPIO5_IO29. Every pad from SD1_CLK on is GPIO-routable in order, and
//! pad control registers sit a fixed 0x268 above their mux registers. The
//! I2C and ECSPI inputs have no select register.

use super::{Family, InputSelectEntry, PullEncoding, SocProfile, SparsePinRange};

// Only PUE (bit 6); the pads have a pull-up but no pull-down.
const PULL: PullEncoding = PullEncoding {
    shift: 6,
    mask: 0x1,
    disabled: 0x0,
    up: 0x1,
    down: None,
};

static PINS: [SparsePinRange; 5] = [
    // GPIO1_IO00 .. GPIO1_IO15
    SparsePinRange { first_pin: 0, count: 16, pad_mux: 0x028, pad_ctl: 0x290 },
    // ENET_MDC .. ENET_RD3 (GPIO1_IO16 .. GPIO1_IO29)
    SparsePinRange { first_pin: 16, count: 14, pad_mux: 0x068, pad_ctl: 0x2d0 },
    // SD1_CLK .. SD2_WP (GPIO2_IO00 .. GPIO2_IO20)
    SparsePinRange { first_pin: 32, count: 21, pad_mux: 0x0a0, pad_ctl: 0x308 },
    // NAND_ALE .. SAI5_MCLK (GPIO3_IO00 .. GPIO3_IO25)
    SparsePinRange { first_pin: 64, count: 26, pad_mux: 0x0f4, pad_ctl: 0x35c },
    // SAI1_RXFS .. UART4_TXD (GPIO4_IO00 .. GPIO5_IO29)
    SparsePinRange { first_pin: 96, count: 62, pad_mux: 0x15c, pad_ctl: 0x3c4 },
];

static INPUT_SELECTS: [InputSelectEntry; 12] = [
    // ECSPI1_SCLK ALT1 UART3_RXD, ECSPI1_MOSI ALT1 UART3_TXD (DTE mode)
    InputSelectEntry { pin: 134, function: 1, register: 0x504, value: 0 },
    InputSelectEntry { pin: 135, function: 1, register: 0x504, value: 1 },
    // ECSPI2_SCLK ALT1 UART4_RXD, ECSPI2_MOSI ALT1 UART4_TXD (DTE mode)
    InputSelectEntry { pin: 138, function: 1, register: 0x50c, value: 0 },
    InputSelectEntry { pin: 139, function: 1, register: 0x50c, value: 1 },
    // UARTn_RXD ALT0 and UARTn_TXD ALT0 (DTE mode) both feed UARTn_RXD_SELECT_INPUT
    InputSelectEntry { pin: 150, function: 0, register: 0x4f4, value: 2 },
    InputSelectEntry { pin: 151, function: 0, register: 0x4f4, value: 3 },
    InputSelectEntry { pin: 152, function: 0, register: 0x4fc, value: 2 },
    InputSelectEntry { pin: 153, function: 0, register: 0x4fc, value: 3 },
    InputSelectEntry { pin: 154, function: 0, register: 0x504, value: 2 },
    InputSelectEntry { pin: 155, function: 0, register: 0x504, value: 3 },
    InputSelectEntry { pin: 156, function: 0, register: 0x50c, value: 2 },
    InputSelectEntry { pin: 157, function: 0, register: 0x50c, value: 3 },
];

pub static PROFILE: SocProfile = SocProfile {
    family: Family::Imx8M,
    bank_count: 5,
    bank_stride: 0x10000,
    pin_count: 4 * 32 + 30,
    gpio_function: 5,
    pull: PULL,
    pins: &PINS,
    input_selects: &INPUT_SELECTS,
};
