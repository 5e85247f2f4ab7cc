//! Peripheral Power Telemetry Records
//!
//! This crate defines the in-memory representation and wire layout of the
//! identity and power-status records a bus-attached peripheral exposes
//! through its register interface. How the bytes are fetched (bus transport,
//! polling, retries) is left to the caller.
//!
//! # Records
//!
//! - [`PowerStatus`]: status byte plus driver voltage, current sense and
//!   reference level (11 bytes, big-endian)
//! - [`DeviceInfo`]: signature, firmware version and chip identifier
//!   (18 bytes)
//!
//! Both implement [`WireRecord`], which provides the fixed-size encode and
//! decode pair.
//!
//! # Example
//!
//! ```rust
//! use pwrstat_protocol::{PowerStatus, StatusFlags, WireRecord};
//!
//! let raw = [0x40, 0x41, 0x45, 0x70, 0xA4, 0x01, 0xF4, 0x40, 0x20, 0x00, 0x00];
//! let status = PowerStatus::decode(&raw)?;
//! assert!(status.is_powered());
//! assert_eq!(status.status.to_string(), "+powered");
//! assert_eq!(status.encode(), raw);
//! # Ok::<(), pwrstat_protocol::ProtocolError>(())
//! ```

mod constants;
mod error;
mod info;
mod power;
mod record;
mod status;

pub use constants::*;
pub use error::*;
pub use info::*;
pub use power::*;
pub use record::*;
pub use status::*;
