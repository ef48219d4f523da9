pub mod bucket;
pub mod package;
pub mod report;
pub mod severity;
pub mod snapshot;

pub use bucket::*;
pub use package::*;
pub use report::*;
pub use severity::*;
pub use snapshot::*;
