//! Control a switch asynchronously
//!
use std::time::Duration;

use log::debug;
use reqwest::Client;

use crate::{
    datatypes::{decode, SwitchReport, SwitchTemperature},
    error::Result,
    protocol::{base_address, API_OFF, API_ON, API_REPORT, API_TEMP, API_TOGGLE},
};

/// Async counterpart of [`crate::Switch`], same endpoints and decode rules.
#[derive(Debug, Clone)]
pub struct AsyncSwitch {
    url: String,
    client: Client,
}

impl AsyncSwitch {
    /// Create a client without a request timeout.
    pub fn new(host: &str) -> Result<AsyncSwitch> {
        Self::build(host, None)
    }

    pub fn with_timeout(host: &str, timeout: Duration) -> Result<AsyncSwitch> {
        Self::build(host, Some(timeout))
    }

    fn build(host: &str, timeout: Option<Duration>) -> Result<AsyncSwitch> {
        let url = base_address(host)?;
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(AsyncSwitch {
            url,
            client: builder.build()?,
        })
    }

    pub fn base_address(&self) -> &str {
        &self.url
    }

    pub async fn toggle(&self) -> Result<()> {
        self.fetch(API_TOGGLE).await?;
        Ok(())
    }

    pub async fn turn_on(&self) -> Result<()> {
        self.fetch(API_ON).await?;
        Ok(())
    }

    pub async fn turn_off(&self) -> Result<()> {
        self.fetch(API_OFF).await?;
        Ok(())
    }

    pub async fn report(&self) -> Result<SwitchReport> {
        decode(&self.fetch(API_REPORT).await?)
    }

    pub async fn temperature(&self) -> Result<SwitchTemperature> {
        decode(&self.fetch(API_TEMP).await?)
    }

    async fn fetch(&self, api: &str) -> Result<String> {
        let url = format!("{}{}", self.url, api);
        debug!("GET {}", url);
        Ok(self.client.get(&url).send().await?.text().await?)
    }
}
