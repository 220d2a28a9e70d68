//! Reload error types.

use crate::host::{CompileError, FinalizeError, InstallError, ParseError};

/// A reload failure, tagged with the stage that produced it.
///
/// Soft conditions (absent file, non-IR file contents) never appear
/// here — they are resolved inside the resolver by falling back to
/// compilation. Only the first fatal failure is reported.
#[derive(Debug, thiserror::Error)]
pub enum ReloadError {
    /// The target context is privileged and cannot be reloaded.
    #[error("context '{0}' is privileged and cannot be reloaded")]
    Ineligible(String),

    /// The compiler collaborator failed; its diagnostic is forwarded
    /// unchanged.
    #[error("{0}")]
    Compile(#[from] CompileError),

    /// The loader rejected the IR buffer.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Installation or finalization failed. The two are deliberately
    /// not distinguished at this boundary.
    #[error("{0}")]
    Install(String),
}

impl From<InstallError> for ReloadError {
    fn from(e: InstallError) -> Self {
        ReloadError::Install(e.0)
    }
}

impl From<FinalizeError> for ReloadError {
    fn from(e: FinalizeError) -> Self {
        ReloadError::Install(e.0)
    }
}
