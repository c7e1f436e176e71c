use crate::{
    api::{google::run_consent_flow, SheetsError},
    libs::messages::Message,
    msg_bail_anyhow, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// OAuth client secrets file (defaults to credentials.json in the data directory)
    #[arg(long)]
    credentials: Option<PathBuf>,
}

pub async fn cmd(login_args: LoginArgs) -> Result<()> {
    match run_consent_flow(login_args.credentials.as_deref()).await {
        Ok(token_path) => {
            msg_success!(Message::LoginSucceeded(token_path.display().to_string()));
            Ok(())
        }
        Err(SheetsError::CredentialsNotFound(path)) => {
            msg_bail_anyhow!(Message::CredentialsNotFound(path.display().to_string()))
        }
        Err(e) => Err(e.into()),
    }
}
