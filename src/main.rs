mod catalog;
mod commands;
mod downloader;
mod errors;
mod http;
mod license;
mod types;
mod versions;

use std::env;
use std::process;

use errors::AppError;

/// A failed download names its own step; everything before the match phase
/// reports as a failure to get the release.
fn error_line(error: &AppError) -> String {
    match error {
        AppError::Download(error) => format!("can't download the version: {error}"),
        error => format!("can't get the release: {error}"),
    }
}

#[tokio::main]
async fn main() {
    if let Err(error) = commands::command_handler::handle_args(env::args()).await {
        eprintln!("{}", error_line(&error));
        process::exit(1);
    }
}
