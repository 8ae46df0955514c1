// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Logical to physical bank and pin translation.
//!
//! ```text
//!  logical bank   0       1       2       3     ...
//!               +-------+-------+-------+-------+
//!  physical     |  GPIO1        |  GPIO2        |
//!  pins         | 0..16 | 16..32| 0..16 | 16..32|
//!               +-------+-------+-------+-------+
//! ```

use crate::hil::{BankId, PinNumber, PINS_PER_BANK};
use crate::soc::{SocProfile, PINS_PER_PHYSICAL_BANK};
use crate::ErrorCode;

/// Physical bank holding the logical bank.
#[inline]
pub const fn physical_bank(bank: BankId) -> usize {
    bank / 2
}

/// Bit position of the logical bank's pin 0 inside the physical registers.
#[inline]
pub const fn physical_shift(bank: BankId) -> u32 {
    (PINS_PER_BANK * (bank % 2)) as u32
}

/// Pin number inside the physical bank, `0..32`.
#[inline]
pub const fn physical_pin(bank: BankId, pin: PinNumber) -> usize {
    pin + physical_shift(bank) as usize
}

/// SoC wide pin number, `physical_bank * 32 + physical_pin`.
#[inline]
pub const fn absolute_pin(physical_bank: usize, physical_pin: usize) -> usize {
    physical_bank * PINS_PER_PHYSICAL_BANK + physical_pin
}

pub fn validate_bank(profile: &SocProfile, bank: BankId) -> Result<(), ErrorCode> {
    if bank < 2 * profile.bank_count {
        Ok(())
    } else {
        log::debug!("logical bank {} out of range", bank);
        Err(ErrorCode::INVAL)
    }
}

/// Checks a logical bank/pin pair and returns the absolute pin it names.
pub fn validate_bank_and_pin(
    profile: &SocProfile,
    bank: BankId,
    pin: PinNumber,
) -> Result<usize, ErrorCode> {
    validate_bank(profile, bank)?;
    if pin >= PINS_PER_BANK {
        log::debug!("pin {} of logical bank {} out of range", pin, bank);
        return Err(ErrorCode::INVAL);
    }

    let absolute = absolute_pin(physical_bank(bank), physical_pin(bank, pin));
    if absolute >= profile.pin_count {
        log::debug!("absolute pin {} beyond the last pin", absolute);
        return Err(ErrorCode::INVAL);
    }
    Ok(absolute)
}

/// Moves a 16-bit logical mask to its place in the physical register.
#[inline]
pub const fn to_physical_mask(bank: BankId, mask: u16) -> u32 {
    (mask as u32) << physical_shift(bank)
}

/// Logical view of a physical register value.
#[inline]
pub const fn to_logical_mask(bank: BankId, value: u32) -> u16 {
    (value >> physical_shift(bank)) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::soc;

    fn imx6ull() -> &'static SocProfile {
        soc::resolve(soc::cpu_revision(soc::CpuType::Mx6ULL, 1, 1)).unwrap()
    }

    #[test]
    fn translation_round_trip() {
        for bank in 0..16 {
            let shift = physical_shift(bank);
            assert!(shift == 0 || shift == 16);
            for pin in 0..PINS_PER_BANK {
                let physical = physical_pin(bank, pin);
                assert_eq!(physical, pin + shift as usize);
                assert!(physical < PINS_PER_PHYSICAL_BANK);
                assert_eq!(physical_bank(bank), bank / 2);
            }
        }
    }

    #[test]
    fn masks_round_trip() {
        for bank in 0..4 {
            for mask in [0u16, 1, 0x8000, 0xa5a5, 0xffff] {
                assert_eq!(to_logical_mask(bank, to_physical_mask(bank, mask)), mask);
            }
        }
        assert_eq!(to_physical_mask(3, 1 << 5), 1 << 21);
        assert_eq!(to_logical_mask(2, 0xdead_beef), 0xbeef);
        assert_eq!(to_logical_mask(3, 0xdead_beef), 0xdead);
    }

    #[test]
    fn validates_bank() {
        let profile = imx6ull();
        assert_eq!(validate_bank(profile, 9), Ok(()));
        assert_eq!(validate_bank(profile, 10), Err(ErrorCode::INVAL));
    }

    #[test]
    fn validates_bank_and_pin() {
        let profile = imx6ull();
        // GPIO2_IO21
        assert_eq!(validate_bank_and_pin(profile, 3, 5), Ok(53));
        assert_eq!(validate_bank_and_pin(profile, 3, 16), Err(ErrorCode::INVAL));
        // GPIO5 stops at GPIO5_IO11
        assert_eq!(validate_bank_and_pin(profile, 8, 11), Ok(139));
        assert_eq!(validate_bank_and_pin(profile, 8, 12), Err(ErrorCode::INVAL));
        assert_eq!(validate_bank_and_pin(profile, 9, 0), Err(ErrorCode::INVAL));
        assert_eq!(validate_bank_and_pin(profile, 10, 0), Err(ErrorCode::INVAL));
    }
}
