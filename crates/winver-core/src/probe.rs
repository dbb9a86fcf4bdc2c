use crate::arch::classify_architecture;
use crate::error::ProbeError;
use crate::info::WindowsVersion;
use crate::store::VersionStore;

/// Registry value names consumed by [`probe`].
pub mod keys {
    /// Marketing name of the OS. Mandatory.
    pub const PRODUCT_NAME: &str = "ProductName";
    /// Internal version identifier. Mandatory.
    pub const CURRENT_VERSION: &str = "CurrentVersion";
    /// Build number. Mandatory.
    pub const CURRENT_BUILD_NUMBER: &str = "CurrentBuildNumber";
    /// Build-metadata label used for architecture classification. Mandatory.
    pub const BUILD_LAB_EX: &str = "BuildLabEx";
    /// Secondary release identifier. Optional.
    pub const RELEASE_ID: &str = "ReleaseId";
    /// Service-pack label. Optional.
    pub const CSD_VERSION: &str = "CSDVersion";
}

/// Collects a [`WindowsVersion`] from the given store.
///
/// The four mandatory values (`ProductName`, `CurrentVersion`,
/// `CurrentBuildNumber`, `BuildLabEx`) must all be readable; the probe
/// fails atomically on the first one that is not. The optional values
/// (`ReleaseId`, `CSDVersion`) degrade to the empty string when absent.
///
/// # Errors
///
/// Returns [`ProbeError::MissingValue`] naming the mandatory value that
/// could not be read.
pub fn probe(store: &dyn VersionStore) -> Result<WindowsVersion, ProbeError> {
    let product = read_mandatory(store, keys::PRODUCT_NAME)?;
    let version = read_mandatory(store, keys::CURRENT_VERSION)?;
    let build = read_mandatory(store, keys::CURRENT_BUILD_NUMBER)?;
    let build_lab = read_mandatory(store, keys::BUILD_LAB_EX)?;

    let architecture = classify_architecture(&build_lab);

    let release = read_optional(store, keys::RELEASE_ID);
    let service_pack = read_optional(store, keys::CSD_VERSION);

    Ok(WindowsVersion {
        product,
        version,
        release,
        build,
        service_pack,
        architecture,
    })
}

fn read_mandatory(store: &dyn VersionStore, name: &'static str) -> Result<String, ProbeError> {
    store
        .read_string(name)
        .map_err(|source| ProbeError::MissingValue { name, source })
}

fn read_optional(store: &dyn VersionStore, name: &str) -> String {
    match store.read_string(name) {
        Ok(value) => value,
        Err(err) => {
            tracing::debug!("optional value `{}` not read: {}", name, err);
            String::new()
        }
    }
}
