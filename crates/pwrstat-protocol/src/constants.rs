//! Record sizes and status byte layout.

// ============================================================================
// Record Sizes
// ============================================================================

/// Encoded size of a power status record.
pub const POWER_STATUS_SIZE: usize = 11;
/// Encoded size of a device info record.
pub const DEVICE_INFO_SIZE: usize = 18;

/// Size of the device signature tag.
pub const SIGNATURE_SIZE: usize = 4;
/// Size of the opaque chip identifier.
pub const CHIP_ID_SIZE: usize = 12;

// ============================================================================
// Status Byte Bits
// ============================================================================

/// A frame is waiting to be read from the device.
pub const STATUS_RX_PENDING: u8 = 0x01;
/// A frame is queued for transmission.
pub const STATUS_TX_PENDING: u8 = 0x02;
/// Reserved.
pub const STATUS_UNDEF_0: u8 = 0x04;
/// Reserved.
pub const STATUS_UNDEF_1: u8 = 0x08;
/// The output driver reported an error.
pub const STATUS_ERROR: u8 = 0x10;
/// An electrical fault was detected on the line.
pub const STATUS_FAULT: u8 = 0x20;
/// Line power is present.
pub const STATUS_POWERED: u8 = 0x40;
/// The termination resistor is enabled.
pub const STATUS_CAN_RES: u8 = 0x80;

/// Bit position of [`STATUS_POWERED`].
pub const STATUS_POWERED_BIT: usize = 6;

/// Flag names indexed by bit position.
pub const STATUS_NAMES: [&str; 8] = [
    "rx-pending",
    "tx-pending",
    "undefined_0",
    "undefined_1",
    "driver error",
    "electric fault",
    "powered",
    "resistor",
];

/// Name reported in place of `powered` when the power bit is clear.
pub const UNPOWERED_NAME: &str = "unpowered";
