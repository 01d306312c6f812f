pub mod builder;
pub mod classifier;
pub mod defaults;
pub mod directory;
pub mod error;
pub mod source;
pub mod translations;

pub use builder::build_directory;
pub use defaults::builtin_directory;
pub use directory::{AddressDirectory, DirectorySource, LabelPair};
pub use error::DirectoryIngestError;
