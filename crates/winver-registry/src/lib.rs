//! Live registry-backed [`VersionStore`](winver_core::VersionStore) for
//! the local host, plus the one-shot [`probe_local`] convenience.

#[cfg(windows)]
mod registry;

#[cfg(windows)]
pub use registry::{RegistryStore, VERSION_KEY_PATH};

pub use winver_core::{ProbeError, WindowsVersion};

/// Probes the local host's registry for its Windows version metadata.
///
/// Opens the version key query-only, reads the values, and releases the
/// handle before returning, on success and failure alike.
///
/// # Errors
///
/// Returns [`ProbeError::Open`] when the key cannot be opened,
/// [`ProbeError::MissingValue`] when a mandatory value is unreadable, and
/// [`ProbeError::Unsupported`] on hosts without a system registry.
#[cfg(windows)]
pub fn probe_local() -> Result<WindowsVersion, ProbeError> {
    let store = RegistryStore::open()?;
    winver_core::probe(&store)
}

#[cfg(not(windows))]
pub fn probe_local() -> Result<WindowsVersion, ProbeError> {
    Err(ProbeError::Unsupported {
        os: std::env::consts::OS.into(),
    })
}
