pub mod directory_scanner;
pub mod extension;
pub mod request;

pub use directory_scanner::{DirectoryScanner, FoundFile, ScanEvent, ScanStatistics};
pub use extension::{ExtensionSet, NormalizedExtension};
pub use request::{OneOrMany, SearchRequest};
