// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! i.MX6 Dual/Quad/Solo/DualLite
//!
//! Seven GPIO banks 16 KiB apart; GPIO7 stops at GPIO7_IO13. The IOMUXC
//! orders pads by name rather than by GPIO, so several ranges hold a single
//! pin. GPIO5_IO01, GPIO5_IO03, GPIO6_IO12 and GPIO6_IO13 have no pad.

use super::{Family, InputSelectEntry, PullEncoding, SocProfile, SparsePinRange};

// PKE (bit 12), PUE (bit 13) and PUS (bits 15:14) taken as one field.
const PULL: PullEncoding = PullEncoding {
    shift: 12,
    mask: 0xf,
    disabled: 0x0,
    // 100K pull-up
    up: 0xb,
    // 100K pull-down
    down: Some(0x3),
};

static PINS: [SparsePinRange; 40] = [
    // GPIO_0 .. GPIO_1 (GPIO1_IO00 .. GPIO1_IO01)
    SparsePinRange { first_pin: 0, count: 2, pad_mux: 0x220, pad_ctl: 0x5f0 },
    // GPIO_2 (GPIO1_IO02)
    SparsePinRange { first_pin: 2, count: 1, pad_mux: 0x234, pad_ctl: 0x604 },
    // GPIO_3 (GPIO1_IO03)
    SparsePinRange { first_pin: 3, count: 1, pad_mux: 0x22c, pad_ctl: 0x5fc },
    // GPIO_4 .. GPIO_5 (GPIO1_IO04 .. GPIO1_IO05)
    SparsePinRange { first_pin: 4, count: 2, pad_mux: 0x238, pad_ctl: 0x608 },
    // GPIO_6 (GPIO1_IO06)
    SparsePinRange { first_pin: 6, count: 1, pad_mux: 0x230, pad_ctl: 0x600 },
    // GPIO_7 .. GPIO_8 (GPIO1_IO07 .. GPIO1_IO08)
    SparsePinRange { first_pin: 7, count: 2, pad_mux: 0x240, pad_ctl: 0x610 },
    // GPIO_9 (GPIO1_IO09)
    SparsePinRange { first_pin: 9, count: 1, pad_mux: 0x228, pad_ctl: 0x5f8 },
    // SD2_CLK .. SD2_DAT3 (GPIO1_IO10 .. GPIO1_IO12)
    SparsePinRange { first_pin: 10, count: 3, pad_mux: 0x354, pad_ctl: 0x73c },
    // SD2_DAT2 (GPIO1_IO13)
    SparsePinRange { first_pin: 13, count: 1, pad_mux: 0x050, pad_ctl: 0x364 },
    // SD2_DAT1 (GPIO1_IO14)
    SparsePinRange { first_pin: 14, count: 1, pad_mux: 0x04c, pad_ctl: 0x360 },
    // SD2_DAT0 (GPIO1_IO15)
    SparsePinRange { first_pin: 15, count: 1, pad_mux: 0x054, pad_ctl: 0x368 },
    // SD1_DAT0 (GPIO1_IO16)
    SparsePinRange { first_pin: 16, count: 1, pad_mux: 0x340, pad_ctl: 0x728 },
    // SD1_DAT1 (GPIO1_IO17)
    SparsePinRange { first_pin: 17, count: 1, pad_mux: 0x33c, pad_ctl: 0x724 },
    // SD1_CMD .. SD1_CLK (GPIO1_IO18 .. GPIO1_IO20)
    SparsePinRange { first_pin: 18, count: 3, pad_mux: 0x348, pad_ctl: 0x730 },
    // SD1_DAT3 (GPIO1_IO21)
    SparsePinRange { first_pin: 21, count: 1, pad_mux: 0x344, pad_ctl: 0x72c },
    // ENET_MDIO .. ENET_MDC (GPIO1_IO22 .. GPIO1_IO31)
    SparsePinRange { first_pin: 22, count: 10, pad_mux: 0x1d0, pad_ctl: 0x4e4 },
    // NANDF_D0 .. SD4_DAT7 (GPIO2_IO00 .. GPIO2_IO15)
    SparsePinRange { first_pin: 32, count: 16, pad_mux: 0x2fc, pad_ctl: 0x6e4 },
    // EIM_A22 .. EIM_EB1 (GPIO2_IO16 .. GPIO2_IO29)
    SparsePinRange { first_pin: 48, count: 14, pad_mux: 0x0dc, pad_ctl: 0x3f0 },
    // EIM_EB2 (GPIO2_IO30)
    SparsePinRange { first_pin: 62, count: 1, pad_mux: 0x08c, pad_ctl: 0x3a0 },
    // EIM_EB3 (GPIO2_IO31)
    SparsePinRange { first_pin: 63, count: 1, pad_mux: 0x0b0, pad_ctl: 0x3c4 },
    // EIM_DA0 .. EIM_DA15 (GPIO3_IO00 .. GPIO3_IO15)
    SparsePinRange { first_pin: 64, count: 16, pad_mux: 0x114, pad_ctl: 0x428 },
    // EIM_D16 .. EIM_D23 (GPIO3_IO16 .. GPIO3_IO23)
    SparsePinRange { first_pin: 80, count: 8, pad_mux: 0x090, pad_ctl: 0x3a4 },
    // EIM_D24 .. EIM_D31 (GPIO3_IO24 .. GPIO3_IO31)
    SparsePinRange { first_pin: 88, count: 8, pad_mux: 0x0b4, pad_ctl: 0x3c8 },
    // GPIO_19 (GPIO4_IO05)
    SparsePinRange { first_pin: 101, count: 1, pad_mux: 0x254, pad_ctl: 0x624 },
    // KEY_COL0 .. KEY_ROW4 (GPIO4_IO06 .. GPIO4_IO15)
    SparsePinRange { first_pin: 102, count: 10, pad_mux: 0x1f8, pad_ctl: 0x5c8 },
    // DI0_DISP_CLK .. DISP0_DAT10 (GPIO4_IO16 .. GPIO4_IO31)
    SparsePinRange { first_pin: 112, count: 16, pad_mux: 0x15c, pad_ctl: 0x470 },
    // EIM_WAIT (GPIO5_IO00)
    SparsePinRange { first_pin: 128, count: 1, pad_mux: 0x154, pad_ctl: 0x468 },
    // EIM_A25 (GPIO5_IO02)
    SparsePinRange { first_pin: 130, count: 1, pad_mux: 0x088, pad_ctl: 0x39c },
    // EIM_A24 (GPIO5_IO04)
    SparsePinRange { first_pin: 132, count: 1, pad_mux: 0x0d4, pad_ctl: 0x3e8 },
    // DISP0_DAT11 .. DISP0_DAT23 (GPIO5_IO05 .. GPIO5_IO17)
    SparsePinRange { first_pin: 133, count: 13, pad_mux: 0x19c, pad_ctl: 0x4b0 },
    // CSI0_PIXCLK .. CSI0_DAT19 (GPIO5_IO18 .. GPIO6_IO05)
    SparsePinRange { first_pin: 146, count: 20, pad_mux: 0x258, pad_ctl: 0x628 },
    // EIM_A23 (GPIO6_IO06)
    SparsePinRange { first_pin: 166, count: 1, pad_mux: 0x0d8, pad_ctl: 0x3ec },
    // NANDF_CLE .. NANDF_CS0 (GPIO6_IO07 .. GPIO6_IO11)
    SparsePinRange { first_pin: 167, count: 5, pad_mux: 0x2d4, pad_ctl: 0x6bc },
    // NANDF_CS1 .. NANDF_CS3 (GPIO6_IO14 .. GPIO6_IO16)
    SparsePinRange { first_pin: 174, count: 3, pad_mux: 0x2e8, pad_ctl: 0x6d0 },
    // SD3_DAT7 .. SD3_DAT6 (GPIO6_IO17 .. GPIO6_IO18)
    SparsePinRange { first_pin: 177, count: 2, pad_mux: 0x2a8, pad_ctl: 0x690 },
    // RGMII_TXC .. RGMII_RXC (GPIO6_IO19 .. GPIO6_IO30)
    SparsePinRange { first_pin: 179, count: 12, pad_mux: 0x058, pad_ctl: 0x36c },
    // EIM_BCLK (GPIO6_IO31)
    SparsePinRange { first_pin: 191, count: 1, pad_mux: 0x158, pad_ctl: 0x46c },
    // SD3_DAT5 .. SD3_RST (GPIO7_IO00 .. GPIO7_IO08)
    SparsePinRange { first_pin: 192, count: 9, pad_mux: 0x2b0, pad_ctl: 0x698 },
    // SD4_CMD .. SD4_CLK (GPIO7_IO09 .. GPIO7_IO10)
    SparsePinRange { first_pin: 201, count: 2, pad_mux: 0x2f4, pad_ctl: 0x6dc },
    // GPIO_16 .. GPIO_18 (GPIO7_IO11 .. GPIO7_IO13)
    SparsePinRange { first_pin: 203, count: 3, pad_mux: 0x248, pad_ctl: 0x618 },
];

static INPUT_SELECTS: [InputSelectEntry; 58] = [
    // GPIO_3 ALT2 I2C3_SCL
    InputSelectEntry { pin: 3, function: 2, register: 0x8a8, value: 1 },
    // GPIO_5 ALT6 I2C3_SCL
    InputSelectEntry { pin: 5, function: 6, register: 0x8a8, value: 2 },
    // GPIO_6 ALT2 I2C3_SDA
    InputSelectEntry { pin: 6, function: 2, register: 0x8ac, value: 1 },
    // GPIO_7 ALT4 UART2_TX_DATA
    InputSelectEntry { pin: 7, function: 4, register: 0x928, value: 2 },
    // GPIO_8 ALT4 UART2_RX_DATA
    InputSelectEntry { pin: 8, function: 4, register: 0x928, value: 3 },
    // SD4_DAT4 ALT2 UART2_RX_DATA
    InputSelectEntry { pin: 44, function: 2, register: 0x928, value: 6 },
    // SD4_DAT7 ALT2 UART2_TX_DATA
    InputSelectEntry { pin: 47, function: 2, register: 0x928, value: 7 },
    // EIM_CS0 ALT2 ECSPI2_SCLK
    InputSelectEntry { pin: 55, function: 2, register: 0x810, value: 2 },
    // EIM_CS1 ALT2 ECSPI2_MOSI
    InputSelectEntry { pin: 56, function: 2, register: 0x818, value: 2 },
    // EIM_OE ALT2 ECSPI2_MISO
    InputSelectEntry { pin: 57, function: 2, register: 0x814, value: 2 },
    // EIM_RW ALT2 ECSPI2_SS0
    InputSelectEntry { pin: 58, function: 2, register: 0x81c, value: 2 },
    // EIM_EB2 ALT1 ECSPI1_SS0, ALT6 I2C2_SCL
    InputSelectEntry { pin: 62, function: 1, register: 0x800, value: 1 },
    InputSelectEntry { pin: 62, function: 6, register: 0x8a0, value: 0 },
    // EIM_D16 ALT1 ECSPI1_SCLK, ALT6 I2C2_SDA
    InputSelectEntry { pin: 80, function: 1, register: 0x7f4, value: 1 },
    InputSelectEntry { pin: 80, function: 6, register: 0x8a4, value: 0 },
    // EIM_D17 ALT1 ECSPI1_MISO, ALT6 I2C3_SCL
    InputSelectEntry { pin: 81, function: 1, register: 0x7f8, value: 1 },
    InputSelectEntry { pin: 81, function: 6, register: 0x8a8, value: 0 },
    // EIM_D18 ALT1 ECSPI1_MOSI, ALT6 I2C3_SDA
    InputSelectEntry { pin: 82, function: 1, register: 0x7fc, value: 1 },
    InputSelectEntry { pin: 82, function: 6, register: 0x8ac, value: 0 },
    // EIM_D21 ALT6 I2C1_SCL
    InputSelectEntry { pin: 85, function: 6, register: 0x898, value: 1 },
    // EIM_D24 ALT2 UART3_TX_DATA
    InputSelectEntry { pin: 88, function: 2, register: 0x930, value: 0 },
    // EIM_D25 ALT2 UART3_RX_DATA
    InputSelectEntry { pin: 89, function: 2, register: 0x930, value: 1 },
    // EIM_D26 ALT4 UART2_TX_DATA
    InputSelectEntry { pin: 90, function: 4, register: 0x928, value: 0 },
    // EIM_D27 ALT4 UART2_RX_DATA
    InputSelectEntry { pin: 91, function: 4, register: 0x928, value: 1 },
    // EIM_D28 ALT1 I2C1_SDA
    InputSelectEntry { pin: 92, function: 1, register: 0x89c, value: 1 },
    // KEY_COL0 ALT0 ECSPI1_SCLK, ALT4 UART4_TX_DATA
    InputSelectEntry { pin: 102, function: 0, register: 0x7f4, value: 2 },
    InputSelectEntry { pin: 102, function: 4, register: 0x938, value: 0 },
    // KEY_ROW0 ALT0 ECSPI1_MOSI, ALT4 UART4_RX_DATA
    InputSelectEntry { pin: 103, function: 0, register: 0x7fc, value: 2 },
    InputSelectEntry { pin: 103, function: 4, register: 0x938, value: 1 },
    // KEY_COL1 ALT0 ECSPI1_MISO, ALT4 UART5_TX_DATA
    InputSelectEntry { pin: 104, function: 0, register: 0x7f8, value: 2 },
    InputSelectEntry { pin: 104, function: 4, register: 0x940, value: 0 },
    // KEY_ROW1 ALT0 ECSPI1_SS0, ALT4 UART5_RX_DATA
    InputSelectEntry { pin: 105, function: 0, register: 0x800, value: 2 },
    InputSelectEntry { pin: 105, function: 4, register: 0x940, value: 1 },
    // KEY_COL3 ALT4 I2C2_SCL
    InputSelectEntry { pin: 108, function: 4, register: 0x8a0, value: 1 },
    // KEY_ROW3 ALT4 I2C2_SDA
    InputSelectEntry { pin: 109, function: 4, register: 0x8a4, value: 1 },
    // CSI0_DAT4 ALT2 ECSPI1_SCLK
    InputSelectEntry { pin: 150, function: 2, register: 0x7f4, value: 0 },
    // CSI0_DAT5 ALT2 ECSPI1_MOSI
    InputSelectEntry { pin: 151, function: 2, register: 0x7fc, value: 0 },
    // CSI0_DAT6 ALT2 ECSPI1_MISO
    InputSelectEntry { pin: 152, function: 2, register: 0x7f8, value: 0 },
    // CSI0_DAT7 ALT2 ECSPI1_SS0
    InputSelectEntry { pin: 153, function: 2, register: 0x800, value: 0 },
    // CSI0_DAT8 ALT2 ECSPI2_SCLK, ALT4 I2C1_SDA
    InputSelectEntry { pin: 154, function: 2, register: 0x810, value: 0 },
    InputSelectEntry { pin: 154, function: 4, register: 0x89c, value: 0 },
    // CSI0_DAT9 ALT2 ECSPI2_MOSI, ALT4 I2C1_SCL
    InputSelectEntry { pin: 155, function: 2, register: 0x818, value: 0 },
    InputSelectEntry { pin: 155, function: 4, register: 0x898, value: 0 },
    // CSI0_DAT10 ALT2 ECSPI2_MISO, ALT3 UART1_TX_DATA
    InputSelectEntry { pin: 156, function: 2, register: 0x814, value: 0 },
    InputSelectEntry { pin: 156, function: 3, register: 0x920, value: 0 },
    // CSI0_DAT11 ALT2 ECSPI2_SS0, ALT3 UART1_RX_DATA
    InputSelectEntry { pin: 157, function: 2, register: 0x81c, value: 0 },
    InputSelectEntry { pin: 157, function: 3, register: 0x920, value: 1 },
    // CSI0_DAT12 ALT3 UART4_TX_DATA
    InputSelectEntry { pin: 158, function: 3, register: 0x938, value: 2 },
    // CSI0_DAT13 ALT3 UART4_RX_DATA
    InputSelectEntry { pin: 159, function: 3, register: 0x938, value: 3 },
    // CSI0_DAT14 ALT3 UART5_TX_DATA
    InputSelectEntry { pin: 160, function: 3, register: 0x940, value: 2 },
    // CSI0_DAT15 ALT3 UART5_RX_DATA
    InputSelectEntry { pin: 161, function: 3, register: 0x940, value: 3 },
    // SD3_DAT7 ALT1 UART1_TX_DATA
    InputSelectEntry { pin: 177, function: 1, register: 0x920, value: 2 },
    // SD3_DAT6 ALT1 UART1_RX_DATA
    InputSelectEntry { pin: 178, function: 1, register: 0x920, value: 3 },
    // SD3_DAT5 ALT1 UART2_TX_DATA
    InputSelectEntry { pin: 192, function: 1, register: 0x928, value: 4 },
    // SD3_DAT4 ALT1 UART2_RX_DATA
    InputSelectEntry { pin: 193, function: 1, register: 0x928, value: 5 },
    // SD4_CMD ALT2 UART3_TX_DATA
    InputSelectEntry { pin: 201, function: 2, register: 0x930, value: 2 },
    // SD4_CLK ALT2 UART3_RX_DATA
    InputSelectEntry { pin: 202, function: 2, register: 0x930, value: 3 },
    // GPIO_16 ALT6 I2C3_SDA
    InputSelectEntry { pin: 203, function: 6, register: 0x8ac, value: 2 },
];

pub static PROFILE: SocProfile = SocProfile {
    family: Family::Imx6DualQuad,
    bank_count: 7,
    bank_stride: 0x4000,
    pin_count: 6 * 32 + 14,
    gpio_function: 5,
    pull: PULL,
    pins: &PINS,
    input_selects: &INPUT_SELECTS,
};
