//! Blocking HTTP calls to the booking service
//!
//! Transport failures are returned as-is; the menu loop treats them as
//! fatal. Domain outcomes arrive as response text and are printed verbatim.

use std::time::Duration;

use eyre::{eyre, Result};
use uuid::Uuid;

pub struct HotelApi {
    http: reqwest::blocking::Client,
    base: String,
    client_id: Uuid,
}

impl HotelApi {
    /// Create an API handle for the service at `host:port`.
    pub fn new(host: &str, port: u16) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            http,
            base: format!("http://{host}:{port}/api"),
            client_id: Uuid::new_v4(),
        })
    }

    fn post(&self, path: &str, guest: &str) -> Result<String> {
        let res = self
            .http
            .post(format!("{}/{path}", self.base))
            .header("X-Client-Id", self.client_id.to_string())
            .body(guest.to_owned())
            .send()?;
        if !res.status().is_success() {
            return Err(eyre!("server rejected the request: {}", res.status()));
        }
        Ok(res.text()?)
    }

    /// Book a room for `guest`; returns the server's message text.
    pub fn book_room(&self, guest: &str) -> Result<String> {
        self.post("book_room", guest)
    }

    /// Cancel the booking held by `guest`; returns the server's message text.
    pub fn cancel_booking(&self, guest: &str) -> Result<String> {
        self.post("cancel_booking", guest)
    }

    /// Get the current bookings, one line per occupied room.
    pub fn get_bookings(&self) -> Result<Vec<String>> {
        let res = self
            .http
            .get(format!("{}/bookings", self.base))
            .header("X-Client-Id", self.client_id.to_string())
            .send()?;
        if !res.status().is_success() {
            return Err(eyre!("server rejected the request: {}", res.status()));
        }
        Ok(res.text()?.lines().map(str::to_owned).collect())
    }
}
