use std::time::Duration;

use log::debug;

use crate::{
    datatypes::{decode, SwitchReport, SwitchTemperature},
    error::Result,
    protocol::{
        base_address, DefaultProtocol, Protocol, API_OFF, API_ON, API_REPORT, API_TEMP,
        API_TOGGLE,
    },
};

/// A myStrom WiFi Switch reachable over HTTP.
pub struct Switch {
    url: String,
    protocol: Box<dyn Protocol>,
}

impl Switch {
    /// Create a client for the switch at `host` (IP or hostname, optionally with port).
    ///
    /// Requests are sent without a timeout, an unresponsive device blocks the
    /// call. Use [`Switch::with_timeout`] to bound it.
    pub fn new(host: &str) -> Result<Switch> {
        Self::with_protocol(host, Box::new(DefaultProtocol::new()?))
    }

    pub fn with_timeout(host: &str, timeout: Duration) -> Result<Switch> {
        Self::with_protocol(host, Box::new(DefaultProtocol::with_timeout(timeout)?))
    }

    /// Create a client sending its requests through a custom transport.
    pub fn with_protocol(host: &str, protocol: Box<dyn Protocol>) -> Result<Switch> {
        Ok(Switch {
            url: base_address(host)?,
            protocol,
        })
    }

    pub fn base_address(&self) -> &str {
        &self.url
    }

    /// Flip the relay. Not idempotent.
    pub fn toggle(&self) -> Result<()> {
        self.command(API_TOGGLE)
    }

    pub fn turn_on(&self) -> Result<()> {
        self.command(API_ON)
    }

    pub fn turn_off(&self) -> Result<()> {
        self.command(API_OFF)
    }

    /// Current relay state and power consumption.
    pub fn report(&self) -> Result<SwitchReport> {
        let report = decode::<SwitchReport>(&self.fetch(API_REPORT)?)?;
        debug!("{:?}", report);
        Ok(report)
    }

    /// Current temperature readings in °C.
    pub fn temperature(&self) -> Result<SwitchTemperature> {
        let temperature = decode::<SwitchTemperature>(&self.fetch(API_TEMP)?)?;
        debug!("{:?}", temperature);
        Ok(temperature)
    }

    fn command(&self, api: &str) -> Result<()> {
        self.fetch(api)?;
        Ok(())
    }

    fn fetch(&self, api: &str) -> Result<String> {
        self.protocol.get(&format!("{}{}", self.url, api))
    }
}
