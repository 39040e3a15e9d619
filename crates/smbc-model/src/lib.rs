pub mod comic;
pub mod metadata;

pub use comic::*;
pub use metadata::*;
