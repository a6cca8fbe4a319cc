use async_trait::async_trait;
use std::env::Args;

use crate::catalog::Catalog;
use crate::downloader::Downloader;
use crate::errors::{AppError, CommandError, ParseError};
use crate::license::License;
use crate::types::Release;
use crate::versions::Versions;

use super::command_handler::CommandHandler;

/// Resolves the newest release the license key is entitled to, then prints
/// or downloads it.
#[derive(Default)]
pub struct CheckHandler {
    license_key: String,
    download: bool,
}

impl CheckHandler {
    async fn find_release(&self, client: reqwest::Client) -> Result<Release, CommandError> {
        let expiry = License::check(client.clone(), &self.license_key).await?;
        let releases = Catalog::fetch(client).await?;
        Versions::find_latest(expiry, releases)
    }
}

#[async_trait]
impl CommandHandler for CheckHandler {
    fn parse(&mut self, args: &mut Args) -> Result<(), ParseError> {
        for arg in args {
            match arg.as_str() {
                "--download" => self.download = true,
                flag if flag.starts_with("--") => {
                    return Err(ParseError::UnknownFlag(flag.to_string()))
                }
                key => self.license_key = key.to_string(),
            }
        }

        if self.license_key.is_empty() {
            return Err(ParseError::MissingArgument(String::from("license key")));
        }

        Ok(())
    }

    async fn execute(&self) -> Result<(), AppError> {
        let client = reqwest::Client::new();
        let release = self.find_release(client.clone()).await?;

        if self.download {
            println!("Matched to version {}, downloading", release.version);

            let path = Downloader::download(client, &release)
                .await
                .map_err(AppError::Download)?;

            println!(
                "Downloaded version {} to {}",
                release.version,
                path.display()
            );
        } else {
            println!(
                "Your most recent version is {}.\n\n\tDownload: {}\n",
                release.version, release.download_url
            );
        }

        Ok(())
    }
}
