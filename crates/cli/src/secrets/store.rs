//! Parameter store backends
//!
//! The pipeline talks to the remote store through [`ParameterStore`], a single
//! read-one-value-by-name operation. [`SsmParameterStore`] is the AWS Systems
//! Manager implementation; transport, credentials and retries are left to the SDK.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_ssm::error::DisplayErrorContext;
use aws_sdk_ssm::Client;
use ssmenv_config::RuntimeSettings;
use ssmenv_core::{Error, Result};

/// Read access to a named key-value parameter store
#[async_trait]
pub trait ParameterStore: Send + Sync {
    /// Fetch the current value stored under `name`.
    ///
    /// Failures are reported as [`Error::StoreLookupFailure`]; the caller
    /// fills in which output variable the lookup was made for.
    async fn get_parameter(&self, name: &str) -> Result<String>;
}

/// AWS SSM Parameter Store backend
pub struct SsmParameterStore {
    client: Client,
    with_decryption: bool,
}

impl SsmParameterStore {
    /// Build a client for the configured region using ambient AWS credentials
    pub async fn connect(settings: &RuntimeSettings) -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(settings.region.clone()))
            .load()
            .await;

        tracing::debug!(region = %settings.region, "Created SSM client");
        Self::with_client(Client::new(&sdk_config), settings.with_decryption)
    }

    /// Wrap an existing SDK client
    pub fn with_client(client: Client, with_decryption: bool) -> Self {
        Self {
            client,
            with_decryption,
        }
    }
}

#[async_trait]
impl ParameterStore for SsmParameterStore {
    async fn get_parameter(&self, name: &str) -> Result<String> {
        let response = self
            .client
            .get_parameter()
            .name(name)
            .with_decryption(self.with_decryption)
            .send()
            .await
            .map_err(|e| Error::store_lookup(name, name, DisplayErrorContext(&e).to_string()))?;

        response
            .parameter()
            .and_then(|parameter| parameter.value())
            .map(str::to_string)
            .ok_or_else(|| Error::store_lookup(name, name, "response contained no value"))
    }
}
