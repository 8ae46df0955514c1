// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Standard error enum for controller operations

/// Errors returned by the GPIO/IOMUXC controller.
///
/// The framework only understands status words, so every variant also
/// converts into the status code reported for the failed request (see the
/// `From<ErrorCode> for u32` implementation).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(usize)]
pub enum ErrorCode {
    /// Internal consistency check failed
    FAIL = 0,
    /// An input select register is owned by another pin
    BUSY = 1,
    /// An invalid parameter was passed
    INVAL = 5,
    /// Mapping device memory failed
    NOMEM = 8,
    /// Operation, pin or SoC is unsupported
    NOSUPPORT = 9,
    /// Hardware resources do not match what the SoC requires
    CONFIG = 13,
}

/// `STATUS_INTERNAL_ERROR`
pub const STATUS_INTERNAL_ERROR: u32 = 0xC000_00E5;
/// `STATUS_DEVICE_BUSY`
pub const STATUS_DEVICE_BUSY: u32 = 0x8000_0011;
/// `STATUS_INVALID_PARAMETER`
pub const STATUS_INVALID_PARAMETER: u32 = 0xC000_000D;
/// `STATUS_INSUFFICIENT_RESOURCES`
pub const STATUS_INSUFFICIENT_RESOURCES: u32 = 0xC000_009A;
/// `STATUS_NOT_SUPPORTED`
pub const STATUS_NOT_SUPPORTED: u32 = 0xC000_00BB;
/// `STATUS_DEVICE_CONFIGURATION_ERROR`
pub const STATUS_DEVICE_CONFIGURATION_ERROR: u32 = 0xC000_0182;

impl From<ErrorCode> for u32 {
    fn from(err: ErrorCode) -> u32 {
        match err {
            ErrorCode::FAIL => STATUS_INTERNAL_ERROR,
            ErrorCode::BUSY => STATUS_DEVICE_BUSY,
            ErrorCode::INVAL => STATUS_INVALID_PARAMETER,
            ErrorCode::NOMEM => STATUS_INSUFFICIENT_RESOURCES,
            ErrorCode::NOSUPPORT => STATUS_NOT_SUPPORTED,
            ErrorCode::CONFIG => STATUS_DEVICE_CONFIGURATION_ERROR,
        }
    }
}

/// Converts a controller result into the status word handed back to the
/// framework. Success is `0` (`STATUS_SUCCESS`).
pub fn into_status(result: Result<(), ErrorCode>) -> u32 {
    match result {
        Ok(()) => 0,
        Err(e) => e.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn busy_is_a_warning_status() {
        // Severity bits 31:30 == 0b10
        assert_eq!(u32::from(ErrorCode::BUSY) >> 30, 0b10);
    }

    #[test]
    fn errors_are_error_statuses() {
        for err in [
            ErrorCode::FAIL,
            ErrorCode::INVAL,
            ErrorCode::NOMEM,
            ErrorCode::NOSUPPORT,
            ErrorCode::CONFIG,
        ] {
            assert_eq!(u32::from(err) >> 30, 0b11, "{:?}", err);
        }
    }

    #[test]
    fn success_maps_to_zero() {
        assert_eq!(into_status(Ok(())), 0);
        assert_eq!(into_status(Err(ErrorCode::INVAL)), STATUS_INVALID_PARAMETER);
    }
}
