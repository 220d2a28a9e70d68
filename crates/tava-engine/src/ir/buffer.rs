//! Owned IR buffers.
//!
//! An [`IrBuffer`] is the unit of ownership in the reload pipeline:
//! created once (from a file read or from the compiler), inspected by
//! reference, and then either dropped (rejected by format detection)
//! or moved into the loader. Move semantics make "freed" and
//! "transferred" states unrepresentable as use-after bugs.

/// Where an IR buffer came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferOrigin {
    /// Read from a precompiled IR file on disk.
    FileRead,
    /// Produced by the compiler collaborator during this reload.
    FreshlyCompiled,
}

/// An owned IR byte buffer tagged with its origin.
#[derive(Debug)]
pub struct IrBuffer {
    bytes: Vec<u8>,
    origin: BufferOrigin,
}

impl IrBuffer {
    /// Wrap bytes read from a file.
    pub fn from_file(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            origin: BufferOrigin::FileRead,
        }
    }

    /// Wrap bytes produced by the compiler.
    pub fn from_compiler(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            origin: BufferOrigin::FreshlyCompiled,
        }
    }

    /// Borrow the buffer contents.
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Origin tag.
    pub fn origin(&self) -> BufferOrigin {
        self.origin
    }

    /// Narrow the buffer to `len` bytes starting at `offset`,
    /// discarding any leading wrapper header. The origin tag is kept.
    ///
    /// # Panics
    /// Panics if `offset + len` exceeds the buffer length; callers
    /// narrow only with offsets produced by a sniff verdict over this
    /// same buffer.
    pub fn narrow(mut self, offset: usize, len: usize) -> Self {
        assert!(offset + len <= self.bytes.len());
        self.bytes.drain(..offset);
        self.bytes.truncate(len);
        self
    }

    /// Consume the buffer, transferring its bytes to the caller.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
