// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! i.MX7Dual/Solo
//!
//! GPIO1_IO00 .. GPIO1_IO07 are muxed by the LPSR IOMUXC, which this
//! controller does not map. GPIO6_IO00 .. GPIO6_IO11 have no pad. Pad
//! control registers sit a fixed 0x270 above their mux registers.

use super::{Family, InputSelectEntry, PullEncoding, SocProfile, SparsePinRange};

// PE (bit 4) and PS (bits 6:5).
const PULL: PullEncoding = PullEncoding {
    shift: 4,
    mask: 0x7,
    disabled: 0x0,
    // 100K pull-up
    up: 0x7,
    // 100K pull-down
    down: Some(0x1),
};

static PINS: [SparsePinRange; 7] = [
    // GPIO1_IO08 .. GPIO1_IO15
    SparsePinRange { first_pin: 8, count: 8, pad_mux: 0x014, pad_ctl: 0x284 },
    // EPDC_DATA00 .. EPDC_PWR_STAT (GPIO2_IO00 .. GPIO2_IO31)
    SparsePinRange { first_pin: 32, count: 32, pad_mux: 0x034, pad_ctl: 0x2a4 },
    // LCD_CLK .. LCD_DATA23 (GPIO3_IO00 .. GPIO3_IO28)
    SparsePinRange { first_pin: 64, count: 29, pad_mux: 0x0b4, pad_ctl: 0x324 },
    // UART1_RX_DATA .. ECSPI2_SS0 (GPIO4_IO00 .. GPIO4_IO23)
    SparsePinRange { first_pin: 96, count: 24, pad_mux: 0x128, pad_ctl: 0x398 },
    // SD1_CD_B .. SD3_RESET_B (GPIO5_IO00 .. GPIO5_IO29)
    SparsePinRange { first_pin: 128, count: 30, pad_mux: 0x188, pad_ctl: 0x3f8 },
    // SAI1_RX_DATA .. SAI2_TX_DATA (GPIO6_IO12 .. GPIO6_IO22)
    SparsePinRange { first_pin: 172, count: 11, pad_mux: 0x200, pad_ctl: 0x470 },
    // ENET1_RGMII_RD0 .. ENET1_COL (GPIO7_IO00 .. GPIO7_IO15)
    SparsePinRange { first_pin: 192, count: 16, pad_mux: 0x22c, pad_ctl: 0x49c },
];

static INPUT_SELECTS: [InputSelectEntry; 22] = [
    // UART1_RX_DATA, UART1_TX_DATA ALT0
    InputSelectEntry { pin: 96, function: 0, register: 0x6f4, value: 0 },
    InputSelectEntry { pin: 97, function: 0, register: 0x6f4, value: 1 },
    // UART2_RX_DATA, UART2_TX_DATA ALT0
    InputSelectEntry { pin: 98, function: 0, register: 0x6fc, value: 2 },
    InputSelectEntry { pin: 99, function: 0, register: 0x6fc, value: 3 },
    // UART3_RX_DATA, UART3_TX_DATA ALT0
    InputSelectEntry { pin: 100, function: 0, register: 0x704, value: 2 },
    InputSelectEntry { pin: 101, function: 0, register: 0x704, value: 3 },
    // I2C1_SCL .. I2C4_SDA ALT0
    InputSelectEntry { pin: 104, function: 0, register: 0x5d4, value: 1 },
    InputSelectEntry { pin: 105, function: 0, register: 0x5d8, value: 1 },
    InputSelectEntry { pin: 106, function: 0, register: 0x5dc, value: 1 },
    InputSelectEntry { pin: 107, function: 0, register: 0x5e0, value: 1 },
    InputSelectEntry { pin: 108, function: 0, register: 0x5e4, value: 1 },
    InputSelectEntry { pin: 109, function: 0, register: 0x5e8, value: 1 },
    InputSelectEntry { pin: 110, function: 0, register: 0x5ec, value: 1 },
    InputSelectEntry { pin: 111, function: 0, register: 0x5f0, value: 1 },
    // ECSPI1_SCLK, MOSI, MISO, SS0 ALT0
    InputSelectEntry { pin: 112, function: 0, register: 0x524, value: 0 },
    InputSelectEntry { pin: 113, function: 0, register: 0x52c, value: 0 },
    InputSelectEntry { pin: 114, function: 0, register: 0x528, value: 0 },
    InputSelectEntry { pin: 115, function: 0, register: 0x530, value: 0 },
    // ECSPI2_SCLK, MOSI, MISO, SS0 ALT0
    InputSelectEntry { pin: 116, function: 0, register: 0x534, value: 0 },
    InputSelectEntry { pin: 117, function: 0, register: 0x53c, value: 0 },
    InputSelectEntry { pin: 118, function: 0, register: 0x538, value: 0 },
    InputSelectEntry { pin: 119, function: 0, register: 0x540, value: 0 },
];

pub static PROFILE: SocProfile = SocProfile {
    family: Family::Imx7D,
    bank_count: 7,
    bank_stride: 0x10000,
    pin_count: 6 * 32 + 16,
    gpio_function: 5,
    pull: PULL,
    pins: &PINS,
    input_selects: &INPUT_SELECTS,
};
