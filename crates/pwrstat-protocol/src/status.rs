//! Device status byte.

use std::fmt;
use std::ops::BitOr;

use serde::{Serialize, Serializer};

use crate::constants::*;

/// The device status byte.
///
/// Each bit is an independent condition; every one of the 256 values is
/// valid. Bit `i` is named by `STATUS_NAMES[i]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StatusFlags(pub u8);

impl StatusFlags {
    /// No bits set.
    pub const EMPTY: StatusFlags = StatusFlags(0);
    /// Receive pending.
    pub const RX_PENDING: StatusFlags = StatusFlags(STATUS_RX_PENDING);
    /// Transmit pending.
    pub const TX_PENDING: StatusFlags = StatusFlags(STATUS_TX_PENDING);
    /// Driver error.
    pub const ERROR: StatusFlags = StatusFlags(STATUS_ERROR);
    /// Electric fault.
    pub const FAULT: StatusFlags = StatusFlags(STATUS_FAULT);
    /// Line powered.
    pub const POWERED: StatusFlags = StatusFlags(STATUS_POWERED);
    /// Termination resistor enabled.
    pub const CAN_RES: StatusFlags = StatusFlags(STATUS_CAN_RES);

    /// Create status flags from a raw byte.
    pub fn new(bits: u8) -> Self {
        StatusFlags(bits)
    }

    /// Get the raw byte.
    pub fn bits(&self) -> u8 {
        self.0
    }

    /// Check whether every bit in `mask` is set.
    pub fn contains(&self, mask: u8) -> bool {
        self.0 & mask == mask
    }

    /// Check whether a frame is waiting to be read.
    pub fn rx_pending(&self) -> bool {
        self.contains(STATUS_RX_PENDING)
    }

    /// Check whether a frame is queued for transmission.
    pub fn tx_pending(&self) -> bool {
        self.contains(STATUS_TX_PENDING)
    }

    /// Check whether the driver reported an error.
    pub fn has_driver_error(&self) -> bool {
        self.contains(STATUS_ERROR)
    }

    /// Check whether an electric fault is flagged.
    pub fn has_fault(&self) -> bool {
        self.contains(STATUS_FAULT)
    }

    /// Check whether line power is present.
    pub fn is_powered(&self) -> bool {
        self.contains(STATUS_POWERED)
    }

    /// Check whether the termination resistor is enabled.
    pub fn resistor_enabled(&self) -> bool {
        self.contains(STATUS_CAN_RES)
    }

    /// Names of the active flags, least-significant bit first.
    ///
    /// A clear power bit contributes `"unpowered"` in its place, so the
    /// result is never empty.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names = Vec::with_capacity(STATUS_NAMES.len());
        for (bit, name) in STATUS_NAMES.iter().enumerate() {
            if self.0 & (1 << bit) != 0 {
                names.push(*name);
            } else if bit == STATUS_POWERED_BIT {
                names.push(UNPOWERED_NAME);
            }
        }
        names
    }

    /// Names joined with `", "`, the form used in structured output.
    pub fn display_list(&self) -> String {
        self.names().join(", ")
    }
}

/// Each name prefixed with `+`, the form used in log lines.
impl fmt::Display for StatusFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for name in self.names() {
            write!(f, "+{}", name)?;
        }
        Ok(())
    }
}

impl Serialize for StatusFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.display_list())
    }
}

impl From<u8> for StatusFlags {
    fn from(bits: u8) -> Self {
        StatusFlags(bits)
    }
}

impl From<StatusFlags> for u8 {
    fn from(flags: StatusFlags) -> Self {
        flags.0
    }
}

impl BitOr for StatusFlags {
    type Output = StatusFlags;

    fn bitor(self, rhs: StatusFlags) -> StatusFlags {
        StatusFlags(self.0 | rhs.0)
    }
}
