pub mod builder;
pub mod search;
pub mod stats;
pub mod types;

pub use builder::SuffixIndex;
pub use search::SearchError;
pub use types::*;
