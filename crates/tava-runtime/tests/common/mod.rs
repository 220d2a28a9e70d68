//! Deterministic collaborator doubles shared by the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::io::Read;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use tava_engine::{BufferOrigin, IrBuffer};
use tava_runtime::{
    CompileError, ContextKind, ExecutionContext, FinalizeError, InstallError, IrCompiler,
    IrLoader, ParseError, ProgramHandle, ProgramInstaller, ScriptIo,
};

pub fn user_context() -> ExecutionContext {
    ExecutionContext::new("main", ContextKind::User)
}

/// An IR payload: the magic marker followed by `tail`.
pub fn ir_bytes(tail: &[u8]) -> Vec<u8> {
    let mut bytes = tava_engine::ir::format::IR_MAGIC.to_vec();
    bytes.extend_from_slice(tail);
    bytes
}

/// In-memory file system double, counting opens.
pub struct MapIo {
    files: HashMap<String, Vec<u8>>,
    pub opens: AtomicUsize,
}

impl MapIo {
    pub fn new(files: impl IntoIterator<Item = (&'static str, Vec<u8>)>) -> Self {
        Self {
            files: files
                .into_iter()
                .map(|(uri, bytes)| (uri.to_string(), bytes))
                .collect(),
            opens: AtomicUsize::new(0),
        }
    }

    pub fn empty() -> Self {
        Self::new([])
    }
}

impl ScriptIo for MapIo {
    fn open(&self, uri: &str) -> Option<Box<dyn Read + '_>> {
        self.opens.fetch_add(1, Ordering::SeqCst);
        self.files
            .get(uri)
            .map(|bytes| Box::new(&bytes[..]) as Box<dyn Read>)
    }
}

/// Compiler double with a fixed result, counting invocations.
pub struct CountingCompiler {
    result: Result<Vec<u8>, String>,
    pub calls: AtomicUsize,
}

impl CountingCompiler {
    pub fn producing(bytes: Vec<u8>) -> Self {
        Self {
            result: Ok(bytes),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            result: Err(message.to_string()),
            calls: AtomicUsize::new(0),
        }
    }
}

impl IrCompiler for CountingCompiler {
    fn compile_to_ir(&self, _uri: &str) -> Result<IrBuffer, CompileError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.result {
            Ok(bytes) => Ok(IrBuffer::from_compiler(bytes.clone())),
            Err(message) => Err(CompileError(message.clone())),
        }
    }
}

/// Loader double recording every buffer it consumes.
pub struct RecordingLoader {
    fail: Option<String>,
    pub calls: AtomicUsize,
    pub received: Mutex<Vec<(Vec<u8>, BufferOrigin)>>,
}

impl RecordingLoader {
    pub fn accepting() -> Self {
        Self {
            fail: None,
            calls: AtomicUsize::new(0),
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn rejecting(message: &str) -> Self {
        Self {
            fail: Some(message.to_string()),
            ..Self::accepting()
        }
    }
}

impl IrLoader for RecordingLoader {
    fn parse(&self, buffer: IrBuffer) -> Result<ProgramHandle, ParseError> {
        let seq = self.calls.fetch_add(1, Ordering::SeqCst);
        let origin = buffer.origin();
        self.received
            .lock()
            .unwrap()
            .push((buffer.into_bytes(), origin));
        match &self.fail {
            Some(message) => Err(ParseError(message.clone())),
            None => Ok(ProgramHandle::new(seq as u64 + 1)),
        }
    }
}

/// Installer double counting install and finalize calls.
pub struct RecordingInstaller {
    install_fail: Option<String>,
    finalize_fail: Option<String>,
    pub installs: AtomicUsize,
    pub finalizes: AtomicUsize,
    pub finalize_flags: Mutex<Vec<bool>>,
}

impl RecordingInstaller {
    pub fn accepting() -> Self {
        Self {
            install_fail: None,
            finalize_fail: None,
            installs: AtomicUsize::new(0),
            finalizes: AtomicUsize::new(0),
            finalize_flags: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_install(message: &str) -> Self {
        Self {
            install_fail: Some(message.to_string()),
            ..Self::accepting()
        }
    }

    pub fn failing_finalize(message: &str) -> Self {
        Self {
            finalize_fail: Some(message.to_string()),
            ..Self::accepting()
        }
    }
}

impl ProgramInstaller for RecordingInstaller {
    fn install(
        &self,
        _context: &mut ExecutionContext,
        _program: ProgramHandle,
    ) -> Result<(), InstallError> {
        self.installs.fetch_add(1, Ordering::SeqCst);
        match &self.install_fail {
            Some(message) => Err(InstallError(message.clone())),
            None => Ok(()),
        }
    }

    fn finalize_deferred_loads(
        &self,
        _context: &mut ExecutionContext,
        complete_futures: bool,
    ) -> Result<(), FinalizeError> {
        self.finalizes.fetch_add(1, Ordering::SeqCst);
        self.finalize_flags.lock().unwrap().push(complete_futures);
        match &self.finalize_fail {
            Some(message) => Err(FinalizeError(message.clone())),
            None => Ok(()),
        }
    }
}
