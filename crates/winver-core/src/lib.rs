pub mod arch;
pub mod error;
pub mod info;
pub mod probe;
pub mod store;

pub use arch::classify_architecture;
pub use error::ProbeError;
pub use info::WindowsVersion;
pub use probe::{keys, probe};
pub use store::{InMemoryStore, VersionStore};
