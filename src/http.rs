use crate::errors::CommandError::{self, *};

pub const UPDATES_URL: &str = "https://www.sketchapp.com/updates/";
pub const LICENSE_RENEW_URL: &str = "https://api.sketchapp.com/1/license/renew/";
pub const USER_AGENT: &str = "sketchversion/1.0.0";

pub struct HTTPRequest;
impl HTTPRequest {
    /// Fetch the markup of the public updates page.
    pub async fn updates_page(client: reqwest::Client) -> Result<String, CommandError> {
        client
            .get(UPDATES_URL)
            .header("User-Agent", USER_AGENT)
            .send()
            .await
            .or_else(|err| Err(HTTPFailed(err)))?
            .text()
            .await
            .or_else(|err| Err(FailedResponseText(err)))
    }

    /// Submit the license renewal form and return the raw JSON body.
    /// The endpoint reports rejections in-band, so no HTTP status is checked here.
    pub async fn renew_license(
        client: reqwest::Client,
        license_key: &str,
    ) -> Result<String, CommandError> {
        client
            .post(LICENSE_RENEW_URL)
            .form(&[("license-key", license_key), ("number_of_seats", "0")])
            .header("User-Agent", USER_AGENT)
            .header(
                "Content-Type",
                "application/x-www-form-urlencoded; charset=UTF-8",
            )
            .send()
            .await
            .or_else(|err| Err(HTTPFailed(err)))?
            .text()
            .await
            .or_else(|err| Err(FailedResponseText(err)))
    }

    /// Open a GET request for a release artifact without consuming the body,
    /// so the caller can stream it to disk.
    pub async fn get_response(
        client: reqwest::Client,
        url: String,
    ) -> Result<reqwest::Response, CommandError> {
        client
            .get(url)
            .send()
            .await
            .or_else(|err| Err(HTTPFailed(err)))
    }
}
