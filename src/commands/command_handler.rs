use async_trait::async_trait;
use std::env::Args;

use crate::errors::{AppError, ParseError};

use super::check::CheckHandler;

#[async_trait]
pub trait CommandHandler {
    fn parse(&mut self, args: &mut Args) -> Result<(), ParseError>;
    async fn execute(&self) -> Result<(), AppError>;
}

pub async fn handle_args(mut args: Args) -> Result<(), AppError> {
    args.next(); // Remove initial binary argument

    let mut handler = CheckHandler::default();
    handler.parse(&mut args)?;
    handler.execute().await
}
