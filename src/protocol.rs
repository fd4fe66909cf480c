use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;

use crate::error::{Error, Result};

#[cfg(test)]
use std::{cell::RefCell, rc::Rc};

pub const API_ON: &str = "relay?state=1";
pub const API_OFF: &str = "relay?state=0";
pub const API_TOGGLE: &str = "toggle";
pub const API_REPORT: &str = "report";
pub const API_TEMP: &str = "temp";

/// Build the base URL every endpoint is appended to.
pub fn base_address(host: &str) -> Result<String> {
    if host.is_empty() {
        return Err(Error::InvalidAddress);
    }
    Ok(format!("http://{}/", host))
}

pub trait Protocol {
    /// Issue a GET request and return the response body
    fn get(&self, url: &str) -> Result<String>;
}

/// Plain HTTP transport on reqwest's blocking client.
///
/// The response status is not inspected.
pub struct DefaultProtocol {
    client: Client,
}

impl DefaultProtocol {
    /// A transport without any request timeout.
    pub fn new() -> Result<DefaultProtocol> {
        Self::build(None)
    }

    pub fn with_timeout(timeout: Duration) -> Result<DefaultProtocol> {
        Self::build(Some(timeout))
    }

    fn build(timeout: Option<Duration>) -> Result<DefaultProtocol> {
        // reqwest's blocking client defaults to 30s, override it either way
        let client = Client::builder().timeout(timeout).build()?;
        Ok(DefaultProtocol { client })
    }
}

impl Protocol for DefaultProtocol {
    fn get(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);
        let resp = self.client.get(url).send()?;
        debug!("{} answered {}", url, resp.status());
        Ok(resp.text()?)
    }
}

#[cfg(test)]
#[derive(Clone)]
pub struct ProtocolMock {
    req: Rc<RefCell<Vec<String>>>,
    resp: Rc<RefCell<String>>,
}

#[cfg(test)]
impl ProtocolMock {
    pub fn new() -> ProtocolMock {
        ProtocolMock {
            req: Rc::new(RefCell::new(vec![])),
            resp: Rc::new(RefCell::new(String::from(""))),
        }
    }

    pub fn set_get_return_value(&self, resp: &str) {
        *self.resp.borrow_mut() = String::from(resp);
    }

    pub fn requests(&self) -> Vec<String> {
        self.req.borrow().clone()
    }
}

#[cfg(test)]
impl Protocol for ProtocolMock {
    fn get(&self, url: &str) -> Result<String> {
        self.req.borrow_mut().push(url.to_string());
        Ok(self.resp.borrow().clone())
    }
}
