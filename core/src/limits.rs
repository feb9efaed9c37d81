// Payload size limits

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_BYTE_CEILING;
use crate::error::{CalldataError, Result};

/// Maximum payload size, in bytes, a flow will accept.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ByteCeiling(pub u64);

impl ByteCeiling {
    pub fn new(bytes: u64) -> Self {
        ByteCeiling(bytes)
    }

    pub fn bytes(&self) -> u64 {
        self.0
    }

    pub fn check(&self, byte_length: u64) -> SizeCheck {
        check_size_limit(byte_length, self.0)
    }
}

impl Default for ByteCeiling {
    fn default() -> Self {
        ByteCeiling(DEFAULT_BYTE_CEILING)
    }
}

/// Outcome of a size check. Carries both sizes so callers can report them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SizeCheck {
    pub ok: bool,
    pub byte_length: u64,
    pub ceiling: u64,
}

impl SizeCheck {
    /// Turns a failed check into [`CalldataError::Oversize`].
    pub fn into_result(self) -> Result<()> {
        if self.ok {
            Ok(())
        } else {
            Err(CalldataError::Oversize {
                actual: self.byte_length,
                allowed: self.ceiling,
            })
        }
    }
}

/// Pure comparison `byte_length <= ceiling_bytes`.
pub fn check_size_limit(byte_length: u64, ceiling_bytes: u64) -> SizeCheck {
    SizeCheck {
        ok: byte_length <= ceiling_bytes,
        byte_length,
        ceiling: ceiling_bytes,
    }
}
