//! Tava runtime: the script-reload pipeline.
//!
//! Given a script URI, decide whether it already names a compiled IR
//! binary or raw source, obtain a loadable IR buffer either way, and
//! drive it through the host's loader and installer into a running
//! execution context. The compiler, loader, and installer are external
//! collaborators injected as trait objects (see [`host`]).

pub mod error;
pub mod host;
pub mod reload;
pub mod resolver;

pub use error::ReloadError;
pub use host::{
    CompileError, ContextKind, ExecutionContext, FinalizeError, InstallError, IrCompiler,
    IrLoader, OsScriptIo, ParseError, ProgramHandle, ProgramInstaller, ScriptIo,
};
pub use reload::ReloadCoordinator;
pub use resolver::resolve_precompiled;
