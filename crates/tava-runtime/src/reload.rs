//! The reload coordinator.
//!
//! Drives one script reload end to end: eligibility check, precompiled
//! resolution, compilation fallback, parse, install, finalize. The
//! pipeline is synchronous and runs to the first failure; it owns no
//! locks and performs no rollback. Callers serialize concurrent
//! reloads of the same context.

use std::sync::Arc;

use crate::error::ReloadError;
use crate::host::{ExecutionContext, IrCompiler, IrLoader, ProgramInstaller, ScriptIo};
use crate::resolver::resolve_precompiled;

/// Orchestrates script reloads against injected host collaborators.
pub struct ReloadCoordinator {
    io: Arc<dyn ScriptIo>,
    compiler: Arc<dyn IrCompiler>,
    loader: Arc<dyn IrLoader>,
    installer: Arc<dyn ProgramInstaller>,
}

impl ReloadCoordinator {
    /// Create a coordinator over the host's collaborators.
    pub fn new(
        io: Arc<dyn ScriptIo>,
        compiler: Arc<dyn IrCompiler>,
        loader: Arc<dyn IrLoader>,
        installer: Arc<dyn ProgramInstaller>,
    ) -> Self {
        Self {
            io,
            compiler,
            loader,
            installer,
        }
    }

    /// Reload the script at `uri` into `context`.
    ///
    /// If `uri` names a precompiled IR file, compilation is skipped and
    /// the file's contents are loaded directly; otherwise the compiler
    /// collaborator is invoked exactly once. The resulting buffer is
    /// parsed, installed, and pending deferred loads are finalized.
    /// Blocks until done; returns the first failure, tagged with its
    /// stage.
    pub fn reload(
        &self,
        context: &mut ExecutionContext,
        uri: &str,
    ) -> Result<(), ReloadError> {
        if context.is_privileged() {
            return Err(ReloadError::Ineligible(context.name().to_string()));
        }
        tracing::debug!(uri, context = context.name(), "reloading script");

        let buffer = match resolve_precompiled(self.io.as_ref(), uri) {
            Some(buffer) => buffer,
            None => {
                tracing::debug!(uri, "compiling source to IR");
                self.compiler.compile_to_ir(uri)?
            }
        };

        // The loader consumes the buffer whether or not parsing
        // succeeds; it is never touched again here.
        let program = self.loader.parse(buffer)?;

        self.installer.install(context, program)?;
        self.installer.finalize_deferred_loads(context, true)?;

        tracing::debug!(uri, context = context.name(), "reload complete");
        Ok(())
    }
}
