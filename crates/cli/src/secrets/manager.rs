//! Concurrent resolution of lookup keys against a parameter store
//!
//! Every lookup key is fetched independently and all fetches are in flight at
//! once, optionally capped by a semaphore. Resolution is all-or-nothing: the
//! first failure aborts the batch and no partial mapping is returned.

use super::store::ParameterStore;
use ssmenv_core::{Error, EnvironmentVariables, LookupKeys, Result};
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Resolves [`LookupKeys`] into [`EnvironmentVariables`]
pub struct SecretManager {
    store: Box<dyn ParameterStore>,
    /// Caps in-flight fetches when set
    semaphore: Option<Arc<Semaphore>>,
}

impl SecretManager {
    /// Create a manager with unbounded fetch concurrency
    pub fn new(store: Box<dyn ParameterStore>) -> Self {
        Self {
            store,
            semaphore: None,
        }
    }

    /// Limit the number of concurrent fetches; `None` removes the limit
    #[must_use]
    pub fn with_max_concurrent(mut self, limit: Option<usize>) -> Self {
        self.semaphore = limit.map(|permits| Arc::new(Semaphore::new(permits)));
        self
    }

    /// Fetch the value for every lookup key.
    ///
    /// The output has exactly the input's key set, in the input's order.
    pub async fn resolve(&self, keys: &LookupKeys) -> Result<EnvironmentVariables> {
        tracing::info!(parameters = keys.len(), "Fetching parameters");

        let fetches = keys.iter().map(|(name, key)| self.fetch(name, key));
        let values = futures::future::try_join_all(fetches).await?;

        Ok(values.into_iter().collect())
    }

    async fn fetch(&self, name: &str, key: &str) -> Result<(String, String)> {
        let _permit = match &self.semaphore {
            Some(semaphore) => Some(semaphore.acquire().await.map_err(|e| {
                Error::configuration(format!("failed to acquire fetch permit: {e}"))
            })?),
            None => None,
        };

        tracing::debug!(name = %name, key = %key, "Fetching parameter");

        match self.store.get_parameter(key).await {
            Ok(value) => Ok((name.to_string(), value)),
            Err(e) => {
                tracing::warn!(name = %name, key = %key, error = %e, "Failed to fetch parameter");
                Err(attribute(e, name, key))
            }
        }
    }
}

/// Tag a store error with the output variable it was fetched for
fn attribute(error: Error, name: &str, key: &str) -> Error {
    match error {
        Error::StoreLookupFailure { message, .. } => Error::store_lookup(name, key, message),
        other => Error::store_lookup(name, key, other.to_string()),
    }
}
