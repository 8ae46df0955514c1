// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Per-pin vendor data attached to connect and interrupt requests.
//!
//! ```text
//!  byte 0     bytes 1..5
//! +-------+-------------------------+
//! |  tag  |  pad control (LE u32)   |   tag == 1
//! +-------+-------------------------+
//! ```
//!
//! An empty blob or tag 0 carries nothing.

use core::convert::TryFrom;

use crate::ErrorCode;

/// Blob tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
enum Tag {
    None = 0,
    PadControl = 1,
}

impl TryFrom<u8> for Tag {
    type Error = ErrorCode;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Tag::None),
            1 => Ok(Tag::PadControl),
            _ => Err(ErrorCode::INVAL),
        }
    }
}

/// Returns the explicit pad control value carried by `data`, if any.
pub fn parse(data: &[u8]) -> Result<Option<u32>, ErrorCode> {
    let Some((&tag, rest)) = data.split_first() else {
        return Ok(None);
    };

    match Tag::try_from(tag)? {
        Tag::None => Ok(None),
        Tag::PadControl => {
            let bytes = rest
                .get(..4)
                .and_then(|value| <[u8; 4]>::try_from(value).ok())
                .ok_or(ErrorCode::INVAL)?;
            Ok(Some(u32::from_le_bytes(bytes)))
        }
    }
}
