//! Power status record.
//!
//! ```text
//! +--------+-----------+---------------+-----------+
//! | status | voltage   | current_sense | ref_level |
//! | u8     | f32 BE    | u16 BE        | f32 BE    |
//! +--------+-----------+---------------+-----------+
//!   0        1           5               7
//! ```

use std::fmt;

use bytes::{Buf, BufMut};
use serde::Serialize;

use crate::constants::POWER_STATUS_SIZE;
use crate::record::WireRecord;
use crate::status::StatusFlags;

/// Power telemetry reported by the device.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PowerStatus {
    /// Device status byte.
    pub status: StatusFlags,
    /// Driver supply voltage in volts.
    pub voltage: f32,
    /// Raw current sense reading.
    pub current_sense: u16,
    /// Reference voltage in volts.
    #[serde(rename = "reference_voltage")]
    pub ref_level: f32,
}

impl PowerStatus {
    /// Check whether line power is present.
    pub fn is_powered(&self) -> bool {
        self.status.is_powered()
    }
}

impl WireRecord for PowerStatus {
    const SIZE: usize = POWER_STATUS_SIZE;
    const NAME: &'static str = "power status";

    fn encode_fields<B: BufMut>(&self, buf: &mut B) {
        buf.put_u8(self.status.bits());
        buf.put_f32(self.voltage);
        buf.put_u16(self.current_sense);
        buf.put_f32(self.ref_level);
    }

    fn decode_fields<B: Buf>(buf: &mut B) -> Self {
        let status = PowerStatus {
            status: StatusFlags(buf.get_u8()),
            voltage: buf.get_f32(),
            current_sense: buf.get_u16(),
            ref_level: buf.get_f32(),
        };
        log::trace!("decoded {}", status);
        status
    }
}

impl fmt::Display for PowerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Driver voltage={:.1}, current sense={}, reference voltage={:.2}, status({:02x})={}.",
            self.voltage,
            self.current_sense,
            self.ref_level,
            self.status.bits(),
            self.status
        )
    }
}
