#[macro_use]
extern crate serde_derive;

pub mod command;
pub mod datatypes;
pub mod error;
pub mod protocol;
pub mod switch;
#[cfg(feature = "async")]
pub mod tokio;

pub use crate::{
    datatypes::{SwitchReport, SwitchTemperature},
    error::{Error, Result},
    switch::Switch,
};
