pub mod association;
pub mod replicas;
pub mod status;
pub mod verdict;

pub use association::*;
pub use replicas::*;
pub use status::*;
pub use verdict::*;
