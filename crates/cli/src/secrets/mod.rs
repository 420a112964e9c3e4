//! Parameter store access and concurrent resolution
//!
//! [`ParameterStore`] is the seam to the remote store; [`SecretManager`] fans
//! a whole [`LookupKeys`](ssmenv_core::LookupKeys) mapping out over it.

mod manager;
mod store;

#[cfg(test)]
pub(crate) mod tests;

pub use manager::SecretManager;
pub use store::{ParameterStore, SsmParameterStore};
