// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! i.MX6SoloX
//!
//! Seven GPIO banks 16 KiB apart; GPIO7 stops at GPIO7_IO11. Pad control
//! registers sit a fixed 0x348 above their mux registers.

use super::{Family, InputSelectEntry, PullEncoding, SocProfile, SparsePinRange};

const PULL: PullEncoding = PullEncoding {
    shift: 12,
    mask: 0xf,
    disabled: 0x0,
    up: 0xb,
    down: Some(0x3),
};

static PINS: [SparsePinRange; 9] = [
    // GPIO1_IO00 .. GPIO1_IO13, CSI_DATA00 .. CSI_VSYNC (GPIO1_IO14 .. GPIO1_IO25)
    SparsePinRange { first_pin: 0, count: 26, pad_mux: 0x014, pad_ctl: 0x35c },
    // ENET1_COL .. KEY_ROW4 (GPIO2_IO00 .. GPIO2_IO19)
    SparsePinRange { first_pin: 32, count: 20, pad_mux: 0x07c, pad_ctl: 0x3c4 },
    // LCD1_CLK .. LCD1_VSYNC (GPIO3_IO00 .. GPIO3_IO28)
    SparsePinRange { first_pin: 64, count: 29, pad_mux: 0x0cc, pad_ctl: 0x414 },
    // NAND_ALE .. QSPI1B_SS1_B (GPIO4_IO00 .. GPIO4_IO31)
    SparsePinRange { first_pin: 96, count: 32, pad_mux: 0x140, pad_ctl: 0x488 },
    // RGMII1_RD0 .. RGMII2_TXC (GPIO5_IO00 .. GPIO5_IO23)
    SparsePinRange { first_pin: 128, count: 24, pad_mux: 0x1c0, pad_ctl: 0x508 },
    // SD1_CLK .. SD2_DATA3 (GPIO6_IO00 .. GPIO6_IO11)
    SparsePinRange { first_pin: 160, count: 12, pad_mux: 0x220, pad_ctl: 0x568 },
    // SD4_CLK .. SD4_RESET_B (GPIO6_IO12 .. GPIO6_IO22)
    SparsePinRange { first_pin: 172, count: 11, pad_mux: 0x278, pad_ctl: 0x5c0 },
    // SD3_CLK .. SD3_DATA7 (GPIO7_IO00 .. GPIO7_IO09)
    SparsePinRange { first_pin: 192, count: 10, pad_mux: 0x250, pad_ctl: 0x598 },
    // USB_H_DATA .. USB_H_STROBE (GPIO7_IO10 .. GPIO7_IO11)
    SparsePinRange { first_pin: 202, count: 2, pad_mux: 0x2a4, pad_ctl: 0x5ec },
];

static INPUT_SELECTS: [InputSelectEntry; 12] = [
    // GPIO1_IO00 ALT0 I2C1_SCL
    InputSelectEntry { pin: 0, function: 0, register: 0x7a8, value: 1 },
    // GPIO1_IO01 ALT0 I2C1_SDA
    InputSelectEntry { pin: 1, function: 0, register: 0x7ac, value: 1 },
    // GPIO1_IO02 ALT0 I2C2_SCL
    InputSelectEntry { pin: 2, function: 0, register: 0x7b0, value: 1 },
    // GPIO1_IO03 ALT0 I2C2_SDA
    InputSelectEntry { pin: 3, function: 0, register: 0x7b4, value: 1 },
    // UART1 TX/RX share UART1_IPP_UART_RXD_MUX_SELECT_INPUT
    InputSelectEntry { pin: 4, function: 0, register: 0x830, value: 0 },
    InputSelectEntry { pin: 5, function: 0, register: 0x830, value: 1 },
    // UART2 TX/RX
    InputSelectEntry { pin: 6, function: 0, register: 0x838, value: 0 },
    InputSelectEntry { pin: 7, function: 0, register: 0x838, value: 1 },
    // KEY_COL3 ALT2 UART5_TX_DATA
    InputSelectEntry { pin: 45, function: 2, register: 0x850, value: 2 },
    // KEY_COL4 ALT2 I2C3_SCL
    InputSelectEntry { pin: 46, function: 2, register: 0x7b8, value: 2 },
    // KEY_ROW3 ALT2 UART5_RX_DATA
    InputSelectEntry { pin: 50, function: 2, register: 0x850, value: 3 },
    // KEY_ROW4 ALT2 I2C3_SDA
    InputSelectEntry { pin: 51, function: 2, register: 0x7bc, value: 2 },
];

pub static PROFILE: SocProfile = SocProfile {
    family: Family::Imx6Sx,
    bank_count: 7,
    bank_stride: 0x4000,
    pin_count: 6 * 32 + 12,
    gpio_function: 5,
    pull: PULL,
    pins: &PINS,
    input_selects: &INPUT_SELECTS,
};
