// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Per-SoC constants and pin tables.
//!
//! Each supported family is described by one immutable [`SocProfile`]. The
//! profile is picked once from the CPU revision word and then passed by
//! reference to everything that needs it.

use core::convert::TryFrom;

use crate::ErrorCode;

mod imx6dq;
mod imx6sx;
mod imx6ull;
mod imx7d;
mod imx8m;
mod imx8mm;

/// Pins per physical GPIO bank.
pub const PINS_PER_PHYSICAL_BANK: usize = 32;

/// A run of consecutive absolute pins whose mux and pad control registers
/// are also consecutive.
#[derive(Clone, Copy, Debug)]
pub struct SparsePinRange {
    pub first_pin: u16,
    pub count: u16,
    /// IOMUXC byte offset of `SW_MUX_CTL_PAD` for `first_pin`.
    pub pad_mux: u16,
    /// IOMUXC byte offset of `SW_PAD_CTL_PAD` for `first_pin`.
    pub pad_ctl: u16,
}

/// Selecting `function` on `pin` requires `register` (a `SELECT_INPUT`
/// daisy register) to hold `value`.
///
/// Tables are sorted by `pin`, so all entries of one pin are adjacent.
#[derive(Clone, Copy, Debug)]
pub struct InputSelectEntry {
    pub pin: u16,
    pub function: u8,
    pub register: u16,
    pub value: u8,
}

/// Location and encoding of the pull field in a pad control register.
#[derive(Clone, Copy, Debug)]
pub struct PullEncoding {
    pub shift: u32,
    pub mask: u32,
    pub disabled: u32,
    pub up: u32,
    /// `None` if the pads of this family have no pull-down.
    pub down: Option<u32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Family {
    /// i.MX6 Dual/Quad/Solo/DualLite
    Imx6DualQuad,
    Imx6Ull,
    Imx6Sx,
    Imx7D,
    Imx8M,
    Imx8MMini,
}

#[derive(Debug)]
pub struct SocProfile {
    pub family: Family,
    pub bank_count: usize,
    /// Byte distance between two GPIO bank register blocks.
    pub bank_stride: usize,
    /// Number of absolute pins, `bank * 32 + pin` of the last pin plus one.
    pub pin_count: usize,
    /// `MUX_MODE` value selecting the GPIO function.
    pub gpio_function: u32,
    pub pull: PullEncoding,
    pub pins: &'static [SparsePinRange],
    pub input_selects: &'static [InputSelectEntry],
}

impl SocProfile {
    /// Constants every profile must satisfy.
    pub fn is_valid(&self) -> bool {
        self.bank_stride != 0
            && self.pin_count != 0
            && self.bank_count != 0
            && self.pull.shift != 0
            && self.pull.mask != 0
            && self.pin_count <= self.bank_count * PINS_PER_PHYSICAL_BANK
    }

    /// Pin tables sorted by pin, inside the pin count, and every input
    /// select entry naming a pin that has pad registers.
    pub fn tables_are_consistent(&self) -> bool {
        let mut next = 0;
        for range in self.pins {
            if range.first_pin < next {
                return false;
            }
            next = range.first_pin.saturating_add(range.count);
            if usize::from(next) > self.pin_count {
                return false;
            }
        }

        let mut last = 0;
        for entry in self.input_selects {
            let has_pad = self.pins.iter().any(|range| {
                entry.pin >= range.first_pin && entry.pin - range.first_pin < range.count
            });
            if entry.pin < last || !has_pad {
                return false;
            }
            last = entry.pin;
        }
        true
    }

    /// Smallest IOMUXC window that holds every register the tables name.
    pub fn iomuxc_span(&self) -> usize {
        let pads = self.pins.iter().map(|range| {
            let last = usize::from(range.count.saturating_sub(1)) * 4;
            usize::from(range.pad_mux.max(range.pad_ctl)) + last
        });
        let selects = self
            .input_selects
            .iter()
            .map(|entry| usize::from(entry.register));
        pads.chain(selects).max().map_or(0, |offset| offset + 4)
    }
}

/// CPU types reported in bits 19:12 of the revision word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum CpuType {
    Mx6SL = 0x60,
    Mx6DL = 0x61,
    Mx6SX = 0x62,
    Mx6Q = 0x63,
    Mx6UL = 0x64,
    Mx6ULL = 0x65,
    Mx6Solo = 0x66,
    Mx6SLL = 0x67,
    Mx6DP = 0x68,
    Mx6QP = 0x69,
    Mx6D = 0x6A,
    Mx7S = 0x71,
    Mx7D = 0x72,
    Mx8MQ = 0x82,
    Mx8MD = 0x83,
    Mx8MQL = 0x84,
    Mx8MM = 0x85,
}

impl TryFrom<u32> for CpuType {
    type Error = ErrorCode;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0x60 => Ok(CpuType::Mx6SL),
            0x61 => Ok(CpuType::Mx6DL),
            0x62 => Ok(CpuType::Mx6SX),
            0x63 => Ok(CpuType::Mx6Q),
            0x64 => Ok(CpuType::Mx6UL),
            0x65 => Ok(CpuType::Mx6ULL),
            0x66 => Ok(CpuType::Mx6Solo),
            0x67 => Ok(CpuType::Mx6SLL),
            0x68 => Ok(CpuType::Mx6DP),
            0x69 => Ok(CpuType::Mx6QP),
            0x6A => Ok(CpuType::Mx6D),
            0x71 => Ok(CpuType::Mx7S),
            0x72 => Ok(CpuType::Mx7D),
            0x82 => Ok(CpuType::Mx8MQ),
            0x83 => Ok(CpuType::Mx8MD),
            0x84 => Ok(CpuType::Mx8MQL),
            0x85 => Ok(CpuType::Mx8MM),
            _ => Err(ErrorCode::NOSUPPORT),
        }
    }
}

/// Builds a revision word the way the boot firmware reports it.
pub const fn cpu_revision(cpu: CpuType, major: u32, minor: u32) -> u32 {
    ((cpu as u32) << 12) | ((major & 0xf) << 4) | (minor & 0xf)
}

/// CPU type encoded in a revision word.
pub fn cpu_type(revision: u32) -> Result<CpuType, ErrorCode> {
    CpuType::try_from((revision >> 12) & 0xff)
}

/// Pick the profile for the CPU that reported `revision`.
pub fn resolve(revision: u32) -> Result<&'static SocProfile, ErrorCode> {
    let cpu = cpu_type(revision).map_err(|e| {
        log::error!("unrecognized CPU revision {:#x}", revision);
        e
    })?;

    let profile = match cpu {
        CpuType::Mx6Q
        | CpuType::Mx6D
        | CpuType::Mx6DP
        | CpuType::Mx6QP
        | CpuType::Mx6DL
        | CpuType::Mx6Solo => &imx6dq::PROFILE,
        CpuType::Mx6ULL => &imx6ull::PROFILE,
        CpuType::Mx6SX => &imx6sx::PROFILE,
        CpuType::Mx7S | CpuType::Mx7D => &imx7d::PROFILE,
        CpuType::Mx8MQ | CpuType::Mx8MD | CpuType::Mx8MQL => &imx8m::PROFILE,
        CpuType::Mx8MM => &imx8mm::PROFILE,
        CpuType::Mx6SL | CpuType::Mx6UL | CpuType::Mx6SLL => {
            log::error!("no GPIO profile for {:?}", cpu);
            return Err(ErrorCode::NOSUPPORT);
        }
    };

    debug_assert!(profile.is_valid());
    log::debug!("{:?} uses the {:?} GPIO profile", cpu, profile.family);
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    static ALL: [&SocProfile; 6] = [
        &imx6dq::PROFILE,
        &imx6ull::PROFILE,
        &imx6sx::PROFILE,
        &imx7d::PROFILE,
        &imx8m::PROFILE,
        &imx8mm::PROFILE,
    ];

    #[test]
    fn every_profile_is_valid() {
        for profile in ALL {
            assert!(profile.is_valid(), "{:?}", profile.family);
        }
    }

    #[test]
    fn tables_are_consistent() {
        for profile in ALL {
            assert!(profile.tables_are_consistent(), "{:?}", profile.family);
        }
    }

    #[test]
    fn inconsistent_tables_are_caught() {
        static UNSORTED: [SparsePinRange; 2] = [
            SparsePinRange { first_pin: 4, count: 2, pad_mux: 0x10, pad_ctl: 0x80 },
            SparsePinRange { first_pin: 0, count: 2, pad_mux: 0x20, pad_ctl: 0x90 },
        ];
        static ORPHAN_SELECT: [InputSelectEntry; 1] =
            [InputSelectEntry { pin: 3, function: 1, register: 0x100, value: 1 }];

        let unsorted = SocProfile {
            pins: &UNSORTED,
            ..imx6sx::PROFILE
        };
        assert!(!unsorted.tables_are_consistent());

        let orphan = SocProfile {
            pins: &UNSORTED[..1],
            input_selects: &ORPHAN_SELECT,
            ..imx6sx::PROFILE
        };
        assert!(!orphan.tables_are_consistent());

        let too_short = SocProfile {
            pin_count: 10,
            ..imx6sx::PROFILE
        };
        assert!(!too_short.tables_are_consistent());
    }

    #[test]
    fn resolves_families() {
        let cases = [
            (CpuType::Mx6Q, Family::Imx6DualQuad),
            (CpuType::Mx6DL, Family::Imx6DualQuad),
            (CpuType::Mx6Solo, Family::Imx6DualQuad),
            (CpuType::Mx6ULL, Family::Imx6Ull),
            (CpuType::Mx6SX, Family::Imx6Sx),
            (CpuType::Mx7D, Family::Imx7D),
            (CpuType::Mx8MQ, Family::Imx8M),
            (CpuType::Mx8MM, Family::Imx8MMini),
        ];
        for (cpu, family) in cases {
            let profile = resolve(cpu_revision(cpu, 1, 0)).unwrap();
            assert_eq!(profile.family, family);
        }
    }

    #[test]
    fn unknown_cpu_is_unsupported() {
        assert_eq!(resolve(0x0005_0010).unwrap_err(), ErrorCode::NOSUPPORT);
        assert_eq!(
            resolve(cpu_revision(CpuType::Mx6SL, 1, 2)).unwrap_err(),
            ErrorCode::NOSUPPORT
        );
    }

    #[test]
    fn only_8m_lacks_pull_down() {
        for profile in ALL {
            assert_eq!(
                profile.pull.down.is_none(),
                profile.family == Family::Imx8M,
                "{:?}",
                profile.family
            );
        }
    }

    #[test]
    fn iomuxc_span_covers_select_registers() {
        assert_eq!(imx6dq::PROFILE.iomuxc_span(), 0x944);
        assert_eq!(imx6ull::PROFILE.iomuxc_span(), 0x648);
        assert_eq!(imx8m::PROFILE.iomuxc_span(), 0x510);
    }

    fn pads(profile: &SocProfile) -> impl Iterator<Item = (u16, u16, u16)> + '_ {
        profile.pins.iter().flat_map(|range| {
            (0..range.count).map(move |i| {
                (range.first_pin + i, range.pad_mux + 4 * i, range.pad_ctl + 4 * i)
            })
        })
    }

    #[test]
    fn gpio_pad_counts() {
        let expected = [
            (&imx6dq::PROFILE, 197),
            (&imx6ull::PROFILE, 112),
            (&imx6sx::PROFILE, 166),
            (&imx7d::PROFILE, 150),
            (&imx8m::PROFILE, 139),
            (&imx8mm::PROFILE, 139),
        ];
        for (profile, count) in expected {
            assert_eq!(pads(profile).count(), count, "{:?}", profile.family);
        }
    }

    #[test]
    fn every_bank_has_pads() {
        for profile in ALL {
            for bank in 0..profile.bank_count {
                let bank_pads = pads(profile)
                    .filter(|&(pin, _, _)| usize::from(pin) / PINS_PER_PHYSICAL_BANK == bank)
                    .count();
                // The i.MX6ULL GPIO5 pads sit in the SNVS IOMUXC.
                if profile.family == Family::Imx6Ull && bank == 4 {
                    assert_eq!(bank_pads, 0);
                } else {
                    assert!(bank_pads > 0, "{:?} GPIO{}", profile.family, bank + 1);
                }
            }
        }
    }

    #[test]
    fn pad_registers_are_distinct() {
        for profile in ALL {
            let mut registers: std::vec::Vec<u16> = pads(profile)
                .flat_map(|(_, mux, ctl)| [mux, ctl])
                .chain(profile.input_selects.iter().map(|entry| entry.register))
                .collect();
            registers.sort_unstable();
            registers.dedup();
            let slots = profile
                .input_selects
                .iter()
                .map(|entry| entry.register)
                .collect::<std::collections::BTreeSet<_>>()
                .len();
            assert_eq!(
                registers.len(),
                2 * pads(profile).count() + slots,
                "{:?}",
                profile.family
            );
        }
    }

    #[test]
    fn known_pads() {
        let cases = [
            // GPIO3_IO00, EIM_DA0
            (&imx6dq::PROFILE, 64, 0x114, 0x428),
            // GPIO7_IO13, GPIO_18
            (&imx6dq::PROFILE, 205, 0x250, 0x620),
            // GPIO2_IO21, SD1_DATA3
            (&imx6ull::PROFILE, 53, 0x1d0, 0x45c),
            // GPIO4_IO17, CSI_MCLK
            (&imx6ull::PROFILE, 113, 0x1d4, 0x460),
            // GPIO2_IO00, ENET1_COL
            (&imx6sx::PROFILE, 32, 0x07c, 0x3c4),
            // GPIO2_IO00, EPDC_DATA00
            (&imx7d::PROFILE, 32, 0x034, 0x2a4),
            // GPIO4_IO00, SAI1_RXFS
            (&imx8m::PROFILE, 96, 0x15c, 0x3c4),
            // GPIO5_IO00, SAI3_TXC
            (&imx8m::PROFILE, 128, 0x1dc, 0x444),
            // GPIO5_IO22, UART1_RXD
            (&imx8mm::PROFILE, 150, 0x234, 0x49c),
        ];
        for (profile, pin, mux, ctl) in cases {
            let pad = pads(profile).find(|&(p, _, _)| p == pin);
            assert_eq!(pad, Some((pin, mux, ctl)), "{:?} pin {}", profile.family, pin);
        }
    }
}
