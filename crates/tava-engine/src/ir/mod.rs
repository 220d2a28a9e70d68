//! IR binary buffers and format detection.

mod buffer;
pub mod format;

pub use buffer::{BufferOrigin, IrBuffer};
pub use format::{sniff, FormatVerdict, WrapperHeader};
