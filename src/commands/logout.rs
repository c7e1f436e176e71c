use crate::{api::Credentials, libs::messages::Message, msg_info, msg_success};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    match Credentials::delete()? {
        true => msg_success!(Message::LoggedOut),
        false => msg_info!(Message::AlreadyLoggedOut),
    }

    Ok(())
}
