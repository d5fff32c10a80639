//! Cache domain - generic caching abstraction and key derivation

pub mod key;
mod repository;

pub use repository::{Cache, CacheExt};

#[cfg(test)]
pub use repository::mock::MockCache;
