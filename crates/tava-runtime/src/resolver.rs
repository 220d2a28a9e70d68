//! Precompiled-IR resolution.
//!
//! Checks whether a script URI already names a compiled IR binary on
//! disk. Every negative outcome here is soft: absent, empty,
//! unreadable, and non-IR files all resolve to `None`, which tells the
//! coordinator to fall back to compilation.

use std::io::Read;

use tava_engine::ir::format::{sniff, FormatVerdict};
use tava_engine::IrBuffer;

use crate::host::ScriptIo;

/// Try to read a precompiled IR buffer for `uri`.
///
/// Opens the file, reads it whole, and sniffs the contents. On a
/// recognized IR payload the buffer is narrowed past any snapshot
/// wrapper and returned; otherwise it is dropped here and `None` is
/// returned. The file handle is released on every path.
pub fn resolve_precompiled(io: &dyn ScriptIo, uri: &str) -> Option<IrBuffer> {
    let mut handle = io.open(uri)?;

    let mut bytes = Vec::new();
    if let Err(e) = handle.read_to_end(&mut bytes) {
        tracing::debug!(uri, error = %e, "script file unreadable, treating as source");
        return None;
    }
    drop(handle);

    if bytes.is_empty() {
        tracing::debug!(uri, "script file is empty, treating as source");
        return None;
    }

    let buffer = IrBuffer::from_file(bytes);
    match sniff(buffer.as_slice()) {
        FormatVerdict::Ir { offset, len } => {
            tracing::debug!(uri, offset, len, "resolved precompiled IR");
            Some(buffer.narrow(offset, len))
        }
        FormatVerdict::Unrecognized => {
            tracing::debug!(uri, "no IR magic, treating as source");
            None
        }
    }
}
