use super::*;
use crate::domain::contact::contacts_from_json;

use reqwest::blocking;
use std::time::Duration;
use tracing::debug;
use url::Url;

pub const DEFAULT_SEED_URL: &str = "https://jsonplaceholder.typicode.com/users";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches the initial contact list from a JSON endpoint returning an array
/// of user-like records.
pub struct RemoteSeed {
    pub url: String,
    client: blocking::Client,
}

impl RemoteSeed {
    pub fn new(url: &str) -> Result<Self, AppError> {
        if !is_valid_url(url) {
            return Err(AppError::Validation(format!("'{url}' is not a valid seed URL")));
        }

        let client = blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            url: url.to_string(),
            client,
        })
    }
}

impl SeedSource for RemoteSeed {
    fn fetch(&self) -> Result<Vec<Contact>, AppError> {
        debug!(url = %self.url, "fetching seed contacts");

        let response = self.client.get(&self.url).send()?;
        // Non-2xx turns into a reqwest::Error, which maps to SeedFetchFailed
        let response = response.error_for_status()?;
        let body = response.text()?;

        contacts_from_json(&body).map_err(|err| match err {
            AppError::Json(e) => {
                AppError::SeedFetchFailed(format!("unexpected response body: {e}"))
            }
            other => other,
        })
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

pub fn is_valid_url(url: &str) -> bool {
    Url::parse(url).is_ok_and(|parsed| matches!(parsed.scheme(), "http" | "https"))
}
