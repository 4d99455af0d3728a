/// Errors raised by the remote data-access layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("remote.unreachable")]
    Unreachable,
    #[error("remote.malformed_response")]
    MalformedResponse,
    #[error("remote.unauthorized")]
    Unauthorized,
    #[error("remote.not_found")]
    NotFound,
    #[error("remote.rejected")]
    Rejected,
}

/// Errors raised by the local snapshot mirror. Snapshot writes are
/// best-effort and never fail a remote operation.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot.io")]
    Io,
    #[error("snapshot.corrupted")]
    Corrupted,
}
