//! Host collaborator contracts.
//!
//! The reload pipeline treats everything downstream of format
//! detection as an external collaborator: file I/O, the front-end
//! compiler, the IR loader, and the program installer. Each is an
//! injectable trait so embedders bind their real implementations and
//! tests substitute deterministic doubles.

use std::fs::File;
use std::io::Read;

use tava_engine::IrBuffer;

/// The kind of execution context a reload targets.
///
/// Eligibility is a pure function of this explicit tag: the runtime's
/// own service context and its kernel-compiler context may be relied
/// upon by other threads during compilation and are never reloadable
/// through this pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextKind {
    /// An ordinary user context; reloadable.
    User,
    /// The runtime's internal service context; privileged.
    Service,
    /// The runtime's kernel-compiler context; privileged.
    KernelCompiler,
}

/// A live execution context into which programs are installed.
///
/// The pipeline never inspects the context beyond its eligibility tag;
/// installation and finalization are delegated to the
/// [`ProgramInstaller`] collaborator.
#[derive(Debug)]
pub struct ExecutionContext {
    name: String,
    kind: ContextKind,
}

impl ExecutionContext {
    /// Create a context with the given name and kind.
    pub fn new(name: impl Into<String>, kind: ContextKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Context name, for diagnostics.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Context kind.
    pub fn kind(&self) -> ContextKind {
        self.kind
    }

    /// Whether this context is excluded from user-triggered reload.
    pub fn is_privileged(&self) -> bool {
        matches!(self.kind, ContextKind::Service | ContextKind::KernelCompiler)
    }
}

/// Opaque handle to a parsed program, minted by the loader
/// collaborator and consumed by the installer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramHandle(u64);

impl ProgramHandle {
    /// Wrap a loader-assigned program id.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// The loader-assigned id.
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Compiler diagnostic, forwarded verbatim to the reload outcome.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct CompileError(pub String);

/// Loader rejection of a structurally invalid IR buffer.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct ParseError(pub String);

/// Installer failure while merging a program into a context.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct InstallError(pub String);

/// Installer failure while completing deferred loads.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct FinalizeError(pub String);

/// Read-only script file access.
pub trait ScriptIo {
    /// Open the file named by `uri` for reading.
    ///
    /// Returns `None` when the file is absent — an expected outcome
    /// that triggers the compilation fallback, never an error. The
    /// returned handle is released when dropped, on every exit path.
    fn open(&self, uri: &str) -> Option<Box<dyn Read + '_>>;
}

/// [`ScriptIo`] backed by the operating system's file system.
#[derive(Debug, Default)]
pub struct OsScriptIo;

impl ScriptIo for OsScriptIo {
    fn open(&self, uri: &str) -> Option<Box<dyn Read + '_>> {
        let file = File::open(uri).ok()?;
        Some(Box::new(file))
    }
}

/// The front-end compiler collaborator.
pub trait IrCompiler {
    /// Compile the source named by `uri` into a fresh IR buffer.
    ///
    /// Invoked at most once per reload, and only when no precompiled
    /// IR file was resolved for the URI.
    fn compile_to_ir(&self, uri: &str) -> Result<IrBuffer, CompileError>;
}

/// The IR loader collaborator.
pub trait IrLoader {
    /// Parse an IR buffer into a program.
    ///
    /// The buffer is consumed regardless of outcome; on failure the
    /// loader is responsible for whatever it allocated.
    fn parse(&self, buffer: IrBuffer) -> Result<ProgramHandle, ParseError>;
}

/// The installation collaborator.
///
/// Neither operation is rolled back by the pipeline on failure; the
/// installer's own contract governs what state the context is left in.
pub trait ProgramInstaller {
    /// Merge a parsed program into the running context.
    fn install(
        &self,
        context: &mut ExecutionContext,
        program: ProgramHandle,
    ) -> Result<(), InstallError>;

    /// Complete deferred-load continuations pending on the context.
    /// `complete_futures` asks the installer to resolve the futures
    /// registered by earlier partial loads.
    fn finalize_deferred_loads(
        &self,
        context: &mut ExecutionContext,
        complete_futures: bool,
    ) -> Result<(), FinalizeError>;
}
