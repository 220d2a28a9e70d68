//! IR binary format definitions.
//!
//! A Tava IR binary (`.tvb`) begins with a fixed four-byte magic
//! marker. Tooling may prepend a snapshot wrapper header (for example
//! when an IR payload is embedded in a larger snapshot file); the
//! wrapper records the offset at which the real payload begins, so a
//! wrapped buffer is still recognizable without parsing anything past
//! the wrapper itself.
//!
//! All multi-byte wrapper fields are encoded little-endian.

use std::io::Write;

/// Magic marker at offset 0 of an IR payload.
pub const IR_MAGIC: [u8; 4] = [0xC7, 0x54, 0x56, 0x42];

/// Magic marker at offset 0 of a snapshot wrapper header.
pub const WRAPPER_MAGIC: [u8; 4] = *b"TVSN";

/// Current snapshot wrapper format version.
pub const WRAPPER_VERSION: u32 = 1;

/// Encoded size of a [`WrapperHeader`] in bytes.
pub const WRAPPER_HEADER_LEN: usize = 12;

/// Verdict of sniffing a byte buffer for the IR format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatVerdict {
    /// The buffer holds a recognized IR payload starting at `offset`
    /// with `len` bytes remaining from that offset.
    Ir { offset: usize, len: usize },
    /// Not an IR binary (raw source, junk, or a truncated file).
    Unrecognized,
}

impl FormatVerdict {
    /// Whether the buffer was recognized as an IR binary.
    pub fn is_ir(&self) -> bool {
        matches!(self, FormatVerdict::Ir { .. })
    }
}

/// Snapshot wrapper header (12 bytes).
///
/// `payload_offset` is the byte offset from the start of the buffer at
/// which the IR payload (and its [`IR_MAGIC`]) begins. The region
/// between the header and the payload is opaque wrapper metadata of
/// any length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrapperHeader {
    /// Wrapper format version (must be [`WRAPPER_VERSION`]).
    pub version: u32,
    /// Offset from buffer start to the IR payload.
    pub payload_offset: u32,
}

impl WrapperHeader {
    /// Create a header for a payload beginning at `payload_offset`.
    pub fn new(payload_offset: u32) -> Self {
        Self {
            version: WRAPPER_VERSION,
            payload_offset,
        }
    }

    /// Encode the header (magic included) to a writer in little-endian
    /// format.
    pub fn encode(&self, writer: &mut impl Write) -> std::io::Result<()> {
        writer.write_all(&WRAPPER_MAGIC)?;
        writer.write_all(&self.version.to_le_bytes())?;
        writer.write_all(&self.payload_offset.to_le_bytes())?;
        Ok(())
    }

    /// Decode a header from the front of `bytes`.
    ///
    /// Returns `None` when the buffer is too short, does not carry the
    /// wrapper magic, or declares an unsupported version.
    pub fn decode(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < WRAPPER_HEADER_LEN || bytes[..4] != WRAPPER_MAGIC {
            return None;
        }
        let version = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
        if version != WRAPPER_VERSION {
            return None;
        }
        let payload_offset = u32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]);
        Some(Self {
            version,
            payload_offset,
        })
    }
}

/// Classify a byte buffer as an IR binary or not.
///
/// Recognizes a bare IR payload (magic at offset 0) and a wrapped one
/// (snapshot wrapper header whose `payload_offset` points at the
/// magic). Total over all inputs: short, empty, and malformed buffers
/// yield [`FormatVerdict::Unrecognized`], never a panic or an
/// out-of-bounds read. Pure; does not allocate.
pub fn sniff(bytes: &[u8]) -> FormatVerdict {
    if payload_starts_at(bytes, 0) {
        return FormatVerdict::Ir {
            offset: 0,
            len: bytes.len(),
        };
    }
    if let Some(header) = WrapperHeader::decode(bytes) {
        let offset = header.payload_offset as usize;
        if offset >= WRAPPER_HEADER_LEN && payload_starts_at(bytes, offset) {
            return FormatVerdict::Ir {
                offset,
                len: bytes.len() - offset,
            };
        }
    }
    FormatVerdict::Unrecognized
}

/// Check for the IR magic at `offset`, guarding against overflow.
fn payload_starts_at(bytes: &[u8], offset: usize) -> bool {
    bytes
        .get(offset..offset + IR_MAGIC.len())
        .is_some_and(|head| head == IR_MAGIC)
}
