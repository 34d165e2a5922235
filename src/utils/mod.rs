pub mod hash;
pub mod paths;

pub(crate) use hash::content_digest;
pub(crate) use paths::{asset_specifier, relative_key, safe_join, strip_relative_prefix};
