use std::fmt;

use serde::{Deserialize, Serialize};

/// Version metadata for a Windows installation, as recorded in the
/// system registry.
///
/// Built by [`probe`](crate::probe::probe) and immutable afterwards.
/// `release` and `service_pack` are empty when the host does not record
/// them; the other fields are always non-empty on a successful probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowsVersion {
    /// Marketing name of the OS (e.g. `Windows 10 Pro`).
    pub product: String,
    /// Internal version identifier (e.g. `10.0`).
    pub version: String,
    /// Secondary release identifier (e.g. `2004`).
    pub release: String,
    /// Build number (e.g. `19041`).
    pub build: String,
    /// Service-pack label in its raw form (e.g. `Service Pack 2`).
    pub service_pack: String,
    /// Normalized architecture tag: `amd64`, `x86`, `unknown`, or a raw
    /// token taken from the build metadata.
    pub architecture: String,
}

/// One-line human-readable rendering:
///
/// ```text
/// <product> [SPn] (<arch>) [ver. <version>] [build <build>] [release <release>]
/// ```
///
/// The service-pack and release parts are omitted when empty.
impl fmt::Display for WindowsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.product)?;

        if !self.service_pack.is_empty() {
            // "Service Pack 2" renders as "SP2".
            let sp = self.service_pack.replacen("Service Pack ", "SP", 1);
            write!(f, " {}", sp)?;
        }

        write!(
            f,
            " ({}) [ver. {}] [build {}]",
            self.architecture, self.version, self.build
        )?;

        if !self.release.is_empty() {
            write!(f, " [release {}]", self.release)?;
        }

        Ok(())
    }
}
