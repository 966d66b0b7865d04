//! AWS S3 API Wrapper

// region:    --- Modules

// -- Re-exports
pub use self::bucket_ops::list_buckets;
pub use self::cred::{client_from_cred, S3Cred};

pub mod bucket_ops;
pub mod cred;

// endregion: --- Modules
