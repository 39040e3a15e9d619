pub mod archive;
pub mod download;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod sanitize;
pub mod smbc;

pub use archive::ArchivedComic;
pub use error::AcquireError;
pub use extract::PageLayout;
pub use smbc::{acquire_current_comic, AcquireConfig};
