use std::env;
use std::path::PathBuf;

use bytes::Bytes;
use futures::StreamExt;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use url::Url;

use crate::errors::CommandError::{self, *};
use crate::http::HTTPRequest;
use crate::types::Release;

pub struct Downloader;
impl Downloader {
    /// Streams the release artifact into the current working directory,
    /// overwriting any existing file of the same name. Returns the absolute
    /// path written.
    pub async fn download(
        client: reqwest::Client,
        release: &Release,
    ) -> Result<PathBuf, CommandError> {
        let cwd = env::current_dir().map_err(NoWorkingDirectory)?;
        let dest = cwd.join(Self::file_name(&release.download_url));

        let response = HTTPRequest::get_response(client, release.download_url.clone()).await?;

        let mut file = File::create(&dest).await.map_err(FailedToCreateFile)?;
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk: Bytes = chunk.or_else(|err| Err(FailedResponseChunk(err)))?;
            file.write_all(&chunk).await.map_err(FailedToWriteFile)?;
        }

        Ok(dest)
    }

    /// The artifact is named after the final path segment of its download URL.
    pub fn file_name(download_url: &str) -> String {
        Url::parse(download_url)
            .ok()
            .and_then(|url| {
                url.path_segments()
                    .and_then(|segments| segments.last())
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| String::from("tmp.bin"))
    }
}
