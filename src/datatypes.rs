use serde::de::DeserializeOwned;

use crate::error::Result;

/// Point-in-time state of the switch as returned by `/report`.
///
/// Fields missing from the payload fall back to `0.0` / `false`.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq)]
#[serde(default)]
pub struct SwitchReport {
    /// Current power consumption in watts
    pub power: f64,
    /// Relay state, `true` is on
    pub relay: bool,
}

/// Temperature readings as returned by `/temp`, all in °C.
///
/// Fields missing from the payload fall back to `0.0`.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq)]
#[serde(default)]
pub struct SwitchTemperature {
    pub measured: f64,
    /// Assumed gap between the sensor and the room
    pub compensation: f64,
    pub compensated: f64,
}

pub(crate) fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    Ok(serde_json::from_str::<T>(body)?)
}
