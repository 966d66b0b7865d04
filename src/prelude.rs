//! Crate prelude (crate Error, Result alias, and the `f!` format shorthand)

pub use crate::error::Error;

pub type Result<T> = core::result::Result<T, Error>;

pub use std::format as f;
