//! Map action names from the command line onto switch operations
use std::{fmt, str::FromStr};

use serde_json::json;

use crate::{
    datatypes::{SwitchReport, SwitchTemperature},
    error::{Error, Result},
    switch::Switch,
};

pub const ACTIONS: [&str; 5] = ["on", "off", "toggle", "report", "temp"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Toggle,
    On,
    Off,
    Report,
    Temp,
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(name: &str) -> Result<Action> {
        match name {
            "toggle" => Ok(Action::Toggle),
            "on" => Ok(Action::On),
            "off" => Ok(Action::Off),
            "report" => Ok(Action::Report),
            "temp" => Ok(Action::Temp),
            _ => Err(Error::UnknownAction(name.to_string())),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Action::Toggle => "toggle",
            Action::On => "on",
            Action::Off => "off",
            Action::Report => "report",
            Action::Temp => "temp",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Format {
    Human,
    Json,
}

/// Parse `action` and run it against `switch`, returning the text to print if any.
///
/// Unknown actions are rejected before anything is sent to the device.
pub fn dispatch(switch: &Switch, action: &str, format: Format) -> Result<Option<String>> {
    let action = action.parse::<Action>()?;
    execute(switch, action, format)
}

pub fn execute(switch: &Switch, action: Action, format: Format) -> Result<Option<String>> {
    match action {
        Action::Toggle => switch.toggle()?,
        Action::On => switch.turn_on()?,
        Action::Off => switch.turn_off()?,
        Action::Report => return Ok(Some(render_report(&switch.report()?, format))),
        Action::Temp => return Ok(Some(render_temperature(&switch.temperature()?, format))),
    }
    Ok(None)
}

pub fn render_report(report: &SwitchReport, format: Format) -> String {
    match format {
        Format::Human if report.relay => format!(
            "The Switch is turned on, the current power consumption is {}",
            report.power
        ),
        Format::Human => String::from("The Switch is turned off"),
        Format::Json => json!({
            "power": report.power,
            "relay": report.relay,
        })
        .to_string(),
    }
}

pub fn render_temperature(temperature: &SwitchTemperature, format: Format) -> String {
    match format {
        Format::Human => format!(
            "The current Switch temperature is {}°C",
            temperature.compensated
        ),
        Format::Json => json!({
            "measured": temperature.measured,
            "compensation": temperature.compensation,
            "compensated": temperature.compensated,
        })
        .to_string(),
    }
}
