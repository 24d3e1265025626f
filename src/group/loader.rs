//! Loader Module
//!
//! The cache-miss capability: how a group obtains source data for a key
//! that is not cached.

use async_trait::async_trait;

// == Loader Trait ==
/// Loads source data for a key on a cache miss.
///
/// Implementations decide where the data comes from (a database, a file,
/// another service). Failures propagate to the caller verbatim; the cache
/// stores nothing for a failed load.
#[async_trait]
pub trait Loader: Send + Sync {
    async fn load(&self, key: &str) -> anyhow::Result<Vec<u8>>;
}

// == Function Adapter ==
/// Adapts a plain closure into a [`Loader`].
///
/// Lets callers register a group without defining a type:
///
/// ```
/// use peercache::LoaderFn;
///
/// let loader = LoaderFn::new(|key: &str| Ok(key.as_bytes().to_vec()));
/// ```
pub struct LoaderFn<F>(F);

impl<F> LoaderFn<F>
where
    F: Fn(&str) -> anyhow::Result<Vec<u8>> + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

#[async_trait]
impl<F> Loader for LoaderFn<F>
where
    F: Fn(&str) -> anyhow::Result<Vec<u8>> + Send + Sync,
{
    async fn load(&self, key: &str) -> anyhow::Result<Vec<u8>> {
        (self.0)(key)
    }
}
