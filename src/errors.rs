use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("missing argument: '{0}'")]
    MissingArgument(String),
    #[error("unknown flag '{0}'")]
    UnknownFlag(String),
}

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("http request failed ({0})")]
    HTTPFailed(reqwest::Error),
    #[error("failed to read the response body ({0})")]
    FailedResponseText(reqwest::Error),
    #[error("failed to read the download stream ({0})")]
    FailedResponseChunk(reqwest::Error),
    #[error("couldn't parse the license response ({0})")]
    ParsingFailed(serde_json::Error),
    #[error("license key rejected by the renewal service (status {0})")]
    LicenseRejected(i64),
    #[error("license renewal response carried no status field")]
    MissingLicenseStatus,
    #[error("license renewal response carried no usable expiration date")]
    MissingExpiration,
    #[error("cannot find any valid version")]
    NoEligibleRelease,
    #[error("couldn't resolve the working directory ({0})")]
    NoWorkingDirectory(std::io::Error),
    #[error("failed to create file ({0})")]
    FailedToCreateFile(std::io::Error),
    #[error("failed to write file ({0})")]
    FailedToWriteFile(std::io::Error),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Command(#[from] CommandError),
    /// Failures after a release was matched, while fetching its artifact.
    /// Kept apart so the top level can report the download step by name.
    #[error(transparent)]
    Download(CommandError),
}
