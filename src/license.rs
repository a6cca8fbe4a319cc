use chrono::{DateTime, Utc};

use crate::errors::CommandError::{self, *};
use crate::http::HTTPRequest;
use crate::types::LicenseResponse;

const STATUS_OK: i64 = 1;

pub struct License;
impl License {
    /// Submits the license key to the renewal endpoint and returns the
    /// instant through which it is entitled to updates.
    pub async fn check(
        client: reqwest::Client,
        license_key: &str,
    ) -> Result<DateTime<Utc>, CommandError> {
        let body = HTTPRequest::renew_license(client, license_key).await?;
        Self::parse_expiration(&body)
    }

    /// A missing or non-1 status means the key was rejected, not that the
    /// body is malformed.
    pub fn parse_expiration(body: &str) -> Result<DateTime<Utc>, CommandError> {
        let response = serde_json::from_str::<LicenseResponse>(body)
            .or_else(|err| Err(ParsingFailed(err)))?;

        match response.status {
            Some(STATUS_OK) => (),
            Some(status) => return Err(LicenseRejected(status)),
            None => return Err(MissingLicenseStatus),
        }

        let data = response.data.ok_or(MissingExpiration)?;

        DateTime::from_timestamp(data.current_update_expiration, 0).ok_or(MissingExpiration)
    }
}
