//! Binary layout for attribute key names.
//!
//! A string is written as its UTF-8 byte count in 7-bit groups, low group
//! first, with the high bit of each byte set while more groups follow.
//! The bytes of the string come right after.

use std::io::{Read, Write};
use std::string::FromUtf8Error;

use byteorder::{ReadBytesExt, WriteBytesExt};
use thiserror::Error;

use crate::key::KeyError;

/// The largest byte count a length prefix can describe.
pub const MAX_STRING_LEN: u32 = i32::MAX as u32;

/// A length prefix never spans more than this many bytes.
const MAX_PREFIX_BYTES: u32 = 5;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("an I/O error occurred: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid string length prefix")]
    InvalidLength,
    #[error("string truncated: expected {expected} bytes, found {found}")]
    Truncated { expected: u32, found: usize },
    #[error("string is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] FromUtf8Error),
    #[error(transparent)]
    Key(#[from] KeyError),
}

/// Writes `value` as a length-prefixed string.
pub fn write_string(mut writer: impl Write, value: &str) -> Result<(), CodecError> {
    let len = u32::try_from(value.len())
        .ok()
        .filter(|len| *len <= MAX_STRING_LEN)
        .ok_or(CodecError::InvalidLength)?;

    log::trace!("writing {len} byte string");

    write_len(&mut writer, len)?;
    writer.write_all(value.as_bytes())?;
    Ok(())
}

/// Reads a string written by [`write_string`].
pub fn read_string(mut reader: impl Read) -> Result<String, CodecError> {
    let len = read_len(&mut reader)?;

    log::trace!("reading {len} byte string");

    let mut bytes = Vec::new();
    reader.take(u64::from(len)).read_to_end(&mut bytes)?;
    if bytes.len() != len as usize {
        return Err(CodecError::Truncated { expected: len, found: bytes.len() });
    }

    Ok(String::from_utf8(bytes)?)
}

fn write_len(writer: &mut impl Write, mut len: u32) -> Result<(), CodecError> {
    while len >= 0x80 {
        writer.write_u8((len as u8) | 0x80)?;
        len >>= 7;
    }

    writer.write_u8(len as u8)?;
    Ok(())
}

fn read_len(reader: &mut impl Read) -> Result<u32, CodecError> {
    let mut len = 0u32;
    for index in 0..MAX_PREFIX_BYTES {
        let byte = reader.read_u8()?;
        let shift = index * 7;

        // The fifth group only has room for the top four bits.
        if index == MAX_PREFIX_BYTES - 1 && byte > 0x0F {
            return Err(CodecError::InvalidLength);
        }

        len |= u32::from(byte & 0x7F) << shift;
        if byte & 0x80 == 0 {
            return if len <= MAX_STRING_LEN {
                Ok(len)
            } else {
                Err(CodecError::InvalidLength)
            };
        }
    }

    Err(CodecError::InvalidLength)
}
