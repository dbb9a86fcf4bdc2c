use std::io;

use thiserror::Error;

/// Errors that can occur while probing the version store.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The store location could not be opened (not found, access denied).
    #[error("failed to open version store at `{path}`: {source}")]
    Open {
        /// Path of the store location that failed to open.
        path: String,
        #[source]
        source: io::Error,
    },

    /// A mandatory value was absent or unreadable. Optional values never
    /// raise this; they degrade to the empty string.
    #[error("missing mandatory value `{name}`: {source}")]
    MissingValue {
        /// Name of the value that could not be read.
        name: &'static str,
        #[source]
        source: io::Error,
    },

    /// A live probe was attempted on a host without a system registry.
    #[error("live version probe not supported on {os}")]
    Unsupported {
        /// The host operating system.
        os: String,
    },
}
