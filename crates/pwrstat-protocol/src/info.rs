//! Device identity record.

use std::fmt;

use bytes::{Buf, BufMut};
use serde::{Serialize, Serializer};

use crate::constants::*;
use crate::record::WireRecord;

/// Identity block read from the device.
///
/// Layout: signature (4) + version_major (1) + version_minor (1) + chip_id (12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct DeviceInfo {
    /// Four-byte device signature tag.
    #[serde(serialize_with = "serialize_signature")]
    pub signature: [u8; SIGNATURE_SIZE],
    /// Firmware major version.
    pub version_major: u8,
    /// Firmware minor version.
    pub version_minor: u8,
    /// Opaque chip identifier.
    #[serde(serialize_with = "serialize_hex")]
    pub chip_id: [u8; CHIP_ID_SIZE],
}

impl DeviceInfo {
    /// Get the signature as text, without trailing NULs.
    pub fn signature_str(&self) -> String {
        nul_terminated(&self.signature)
    }

    /// Get the firmware version as `major.minor`.
    pub fn version(&self) -> String {
        format!("{}.{}", self.version_major, self.version_minor)
    }

    /// Get the chip identifier as an uppercase hex string.
    pub fn chip_id_hex(&self) -> String {
        hex::encode_upper(self.chip_id)
    }
}

impl WireRecord for DeviceInfo {
    const SIZE: usize = DEVICE_INFO_SIZE;
    const NAME: &'static str = "device info";

    fn encode_fields<B: BufMut>(&self, buf: &mut B) {
        buf.put_slice(&self.signature);
        buf.put_u8(self.version_major);
        buf.put_u8(self.version_minor);
        buf.put_slice(&self.chip_id);
    }

    fn decode_fields<B: Buf>(buf: &mut B) -> Self {
        let mut info = DeviceInfo::default();
        buf.copy_to_slice(&mut info.signature);
        info.version_major = buf.get_u8();
        info.version_minor = buf.get_u8();
        buf.copy_to_slice(&mut info.chip_id);
        log::trace!("decoded {}", info);
        info
    }
}

impl fmt::Display for DeviceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Device signature={}, version={}, chip id={}.",
            self.signature_str(),
            self.version(),
            self.chip_id_hex()
        )
    }
}

fn nul_terminated(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).to_string()
}

fn serialize_signature<S>(signature: &[u8; SIGNATURE_SIZE], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&nul_terminated(signature))
}

fn serialize_hex<S>(bytes: &[u8; CHIP_ID_SIZE], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&hex::encode_upper(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProtocolError;

    fn sample() -> DeviceInfo {
        DeviceInfo {
            signature: *b"PWRS",
            version_major: 1,
            version_minor: 7,
            chip_id: [
                0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xAA, 0xBB,
            ],
        }
    }

    #[test]
    fn test_encode_layout() {
        let encoded = sample().encode();
        assert_eq!(encoded.len(), DEVICE_INFO_SIZE);
        assert_eq!(&encoded[0..4], b"PWRS");
        assert_eq!(encoded[4], 1);
        assert_eq!(encoded[5], 7);
        assert_eq!(&encoded[6..], &sample().chip_id);
    }

    #[test]
    fn test_decode_round_trip() {
        let info = sample();
        assert_eq!(DeviceInfo::decode(&info.encode()).unwrap(), info);
    }

    #[test]
    fn test_decode_truncated() {
        let encoded = sample().encode();
        let err = DeviceInfo::decode(&encoded[..17]).unwrap_err();
        assert!(matches!(
            err,
            ProtocolError::Truncated {
                record: "device info",
                expected: 18,
                actual: 17
            }
        ));
    }

    #[test]
    fn test_accessors() {
        let mut info = sample();
        assert_eq!(info.signature_str(), "PWRS");
        assert_eq!(info.version(), "1.7");
        assert_eq!(info.chip_id_hex(), "00112233445566778899AABB");

        info.signature = [b'P', b'S', 0, 0];
        assert_eq!(info.signature_str(), "PS");
    }

    #[test]
    fn test_display() {
        assert_eq!(
            sample().to_string(),
            "Device signature=PWRS, version=1.7, chip id=00112233445566778899AABB."
        );
    }

    #[test]
    fn test_serialize_json() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["signature"], "PWRS");
        assert_eq!(value["version_major"], 1);
        assert_eq!(value["chip_id"], "00112233445566778899AABB");
    }
}
