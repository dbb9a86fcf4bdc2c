use std::io;

use winreg::enums::{HKEY_LOCAL_MACHINE, KEY_QUERY_VALUE, KEY_WOW64_64KEY};
use winreg::RegKey;

use winver_core::{ProbeError, VersionStore};

/// Registry path holding the current OS version metadata, under
/// `HKEY_LOCAL_MACHINE`.
pub const VERSION_KEY_PATH: &str = r"SOFTWARE\Microsoft\Windows NT\CurrentVersion";

/// [`VersionStore`] reading the local machine's version key.
///
/// The key is held open for the lifetime of the store and released when
/// the store is dropped, on every exit path.
pub struct RegistryStore {
    key: RegKey,
}

impl RegistryStore {
    /// Opens the version key query-only, through the 64-bit registry view
    /// regardless of process bitness.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::Open`] when the key does not exist or access
    /// is denied.
    pub fn open() -> Result<Self, ProbeError> {
        let key = RegKey::predef(HKEY_LOCAL_MACHINE)
            .open_subkey_with_flags(VERSION_KEY_PATH, KEY_QUERY_VALUE | KEY_WOW64_64KEY)
            .map_err(|source| ProbeError::Open {
                path: format!(r"HKEY_LOCAL_MACHINE\{}", VERSION_KEY_PATH),
                source,
            })?;
        tracing::debug!("opened registry key {}", VERSION_KEY_PATH);
        Ok(Self { key })
    }
}

impl VersionStore for RegistryStore {
    fn read_string(&self, name: &str) -> io::Result<String> {
        self.key.get_value(name)
    }
}
