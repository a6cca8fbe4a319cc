use chrono::NaiveDate;
use scraper::{Html, Selector};

use crate::errors::CommandError;
use crate::http::HTTPRequest;
use crate::types::Release;
use crate::versions::Versions;

const RELEASE_DATE_FORMAT: &str = "%d-%m-%Y";

pub struct Catalog;
impl Catalog {
    /// Fetch every release published on the updates page.
    pub async fn fetch(client: reqwest::Client) -> Result<Vec<Release>, CommandError> {
        let markup = HTTPRequest::updates_page(client).await?;
        Ok(Self::parse_releases(&markup))
    }

    /// Entries missing the version, date or download link, or whose version
    /// or date fails to parse, are dropped without aborting the scrape.
    pub fn parse_releases(markup: &str) -> Vec<Release> {
        let document = Html::parse_document(markup);
        let entry_selector =
            Selector::parse(".update-version").expect("invalid release entry selector");
        let link_selector =
            Selector::parse("a.update-download").expect("invalid download link selector");

        document
            .select(&entry_selector)
            .filter_map(|entry| {
                let version = Versions::parse_lenient(entry.value().attr("data-release")?).ok()?;

                let release_date = NaiveDate::parse_from_str(
                    entry.value().attr("data-release-date")?,
                    RELEASE_DATE_FORMAT,
                )
                .ok()?
                .and_hms_opt(0, 0, 0)?
                .and_utc();

                let download_url = entry
                    .select(&link_selector)
                    .next()?
                    .value()
                    .attr("href")?
                    .to_string();

                Some(Release {
                    version,
                    release_date,
                    download_url,
                })
            })
            .collect()
    }
}
