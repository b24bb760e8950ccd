use thiserror::Error;

/// Fatal scan setup failures. Everything past interface resolution is
/// absorbed locally and never reaches the caller.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The requested interface has no usable IPv4 address/netmask pair.
    #[error("Interface {0} was not found")]
    InterfaceNotFound(String),
}

/// Failures of the enrichment collaborators (vendor database, mDNS).
///
/// All variants render as "Unknown" in the final report; they stay distinct
/// so tests can tell a legitimately unknown host from a broken collaborator.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("no matching entry")]
    NotFound,
    #[error("lookup timed out")]
    Timeout,
    #[error("lookup failed: {0}")]
    Io(#[from] std::io::Error),
}
