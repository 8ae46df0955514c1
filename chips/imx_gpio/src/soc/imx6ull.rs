// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! i.MX6ULL
//!
//! Five GPIO banks 16 KiB apart; GPIO5 stops at GPIO5_IO11. The SNVS pads
//! of GPIO5 live in a separate IOMUXC and are not described here. Pad
//! control registers sit a fixed 0x28c above their mux registers.

use super::{Family, InputSelectEntry, PullEncoding, SocProfile, SparsePinRange};

// Same PKE/PUE/PUS layout as the i.MX6 Dual/Quad.
const PULL: PullEncoding = PullEncoding {
    shift: 12,
    mask: 0xf,
    disabled: 0x0,
    up: 0xb,
    down: Some(0x3),
};

static PINS: [SparsePinRange; 8] = [
    // GPIO1_IO00 .. GPIO1_IO09
    SparsePinRange { first_pin: 0, count: 10, pad_mux: 0x05c, pad_ctl: 0x2e8 },
    // JTAG_MOD .. JTAG_TRST_B (GPIO1_IO10 .. GPIO1_IO15)
    SparsePinRange { first_pin: 10, count: 6, pad_mux: 0x044, pad_ctl: 0x2d0 },
    // UART1_TX_DATA .. UART5_RX_DATA (GPIO1_IO16 .. GPIO1_IO31)
    SparsePinRange { first_pin: 16, count: 16, pad_mux: 0x084, pad_ctl: 0x310 },
    // ENET1_RX_DATA0 .. ENET2_RX_ER (GPIO2_IO00 .. GPIO2_IO15)
    SparsePinRange { first_pin: 32, count: 16, pad_mux: 0x0c4, pad_ctl: 0x350 },
    // SD1_CMD .. SD1_DATA3 (GPIO2_IO16 .. GPIO2_IO21)
    SparsePinRange { first_pin: 48, count: 6, pad_mux: 0x1bc, pad_ctl: 0x448 },
    // LCD_CLK .. LCD_DATA23 (GPIO3_IO00 .. GPIO3_IO28)
    SparsePinRange { first_pin: 64, count: 29, pad_mux: 0x104, pad_ctl: 0x390 },
    // NAND_RE_B .. NAND_DQS (GPIO4_IO00 .. GPIO4_IO16)
    SparsePinRange { first_pin: 96, count: 17, pad_mux: 0x178, pad_ctl: 0x404 },
    // CSI_MCLK .. CSI_DATA07 (GPIO4_IO17 .. GPIO4_IO28)
    SparsePinRange { first_pin: 113, count: 12, pad_mux: 0x1d4, pad_ctl: 0x460 },
];

static INPUT_SELECTS: [InputSelectEntry; 26] = [
    // GPIO1_IO00 ALT0 I2C2_SCL
    InputSelectEntry { pin: 0, function: 0, register: 0x5ac, value: 1 },
    // GPIO1_IO01 ALT0 I2C2_SDA
    InputSelectEntry { pin: 1, function: 0, register: 0x5b0, value: 1 },
    // GPIO1_IO02 ALT0 I2C1_SCL
    InputSelectEntry { pin: 2, function: 0, register: 0x5a4, value: 0 },
    // GPIO1_IO03 ALT0 I2C1_SDA
    InputSelectEntry { pin: 3, function: 0, register: 0x5a8, value: 1 },
    // UART1_TX_DATA ALT0 UART1_DCE_TX, ALT2 I2C3_SCL
    InputSelectEntry { pin: 16, function: 0, register: 0x624, value: 2 },
    InputSelectEntry { pin: 16, function: 2, register: 0x5b4, value: 0 },
    // UART1_RX_DATA ALT0 UART1_DCE_RX, ALT2 I2C3_SDA
    InputSelectEntry { pin: 17, function: 0, register: 0x624, value: 3 },
    InputSelectEntry { pin: 17, function: 2, register: 0x5b8, value: 0 },
    // UART2_TX_DATA ALT0 UART2_DCE_TX, ALT2 I2C4_SCL
    InputSelectEntry { pin: 20, function: 0, register: 0x62c, value: 0 },
    InputSelectEntry { pin: 20, function: 2, register: 0x5bc, value: 0 },
    // UART2_RX_DATA ALT0 UART2_DCE_RX, ALT2 I2C4_SDA
    InputSelectEntry { pin: 21, function: 0, register: 0x62c, value: 1 },
    InputSelectEntry { pin: 21, function: 2, register: 0x5c0, value: 0 },
    // UART3_TX_DATA ALT0 UART3_DCE_TX
    InputSelectEntry { pin: 24, function: 0, register: 0x634, value: 0 },
    // UART3_RX_DATA ALT0 UART3_DCE_RX
    InputSelectEntry { pin: 25, function: 0, register: 0x634, value: 1 },
    // UART4_TX_DATA ALT0 UART4_DCE_TX, ALT2 I2C1_SCL
    InputSelectEntry { pin: 28, function: 0, register: 0x63c, value: 0 },
    InputSelectEntry { pin: 28, function: 2, register: 0x5a4, value: 1 },
    // UART4_RX_DATA ALT0 UART4_DCE_RX, ALT2 I2C1_SDA
    InputSelectEntry { pin: 29, function: 0, register: 0x63c, value: 1 },
    InputSelectEntry { pin: 29, function: 2, register: 0x5a8, value: 2 },
    // UART5_TX_DATA ALT0 UART5_DCE_TX, ALT2 I2C2_SCL
    InputSelectEntry { pin: 30, function: 0, register: 0x644, value: 4 },
    InputSelectEntry { pin: 30, function: 2, register: 0x5ac, value: 2 },
    // UART5_RX_DATA ALT0 UART5_DCE_RX, ALT2 I2C2_SDA
    InputSelectEntry { pin: 31, function: 0, register: 0x644, value: 5 },
    InputSelectEntry { pin: 31, function: 2, register: 0x5b0, value: 2 },
    // CSI_DATA04 ALT3 ECSPI1_SCLK
    InputSelectEntry { pin: 121, function: 3, register: 0x534, value: 1 },
    // CSI_DATA05 ALT3 ECSPI1_SS0
    InputSelectEntry { pin: 122, function: 3, register: 0x540, value: 1 },
    // CSI_DATA06 ALT3 ECSPI1_MOSI
    InputSelectEntry { pin: 123, function: 3, register: 0x53c, value: 1 },
    // CSI_DATA07 ALT3 ECSPI1_MISO
    InputSelectEntry { pin: 124, function: 3, register: 0x538, value: 1 },
];

pub static PROFILE: SocProfile = SocProfile {
    family: Family::Imx6Ull,
    bank_count: 5,
    bank_stride: 0x4000,
    pin_count: 4 * 32 + 12,
    gpio_function: 5,
    pull: PULL,
    pins: &PINS,
    input_selects: &INPUT_SELECTS,
};
