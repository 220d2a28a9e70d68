//! Tava engine: IR binary format definitions and detection.
//!
//! This crate owns the format-level vocabulary of the reload pipeline:
//! the owned IR buffer value, the binary-format constants, and the
//! sniffer that classifies a byte buffer as a loadable IR binary or
//! not. Compilation, parsing, and execution contexts live behind the
//! host traits in `tava-runtime`.

pub mod ir;

pub use ir::{sniff, BufferOrigin, FormatVerdict, IrBuffer, WrapperHeader};
