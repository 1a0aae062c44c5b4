//! Manager identity management.
//!
//! Managers may generate reports across all employees; everyone else gets
//! a personal report only.

use crate::{
    db::managers::Managers,
    libs::{messages::Message, view::View},
    msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct ManagerArgs {
    #[command(subcommand)]
    command: ManagerCommand,
}

#[derive(Debug, Subcommand)]
enum ManagerCommand {
    /// Grant manager rights to a contact identity
    Add { contact_id: String, full_name: String },
    /// Revoke manager rights
    Remove { contact_id: String },
    /// List managers
    List,
}

pub fn cmd(args: ManagerArgs) -> Result<()> {
    let mut managers = Managers::new()?;

    match args.command {
        ManagerCommand::Add { contact_id, full_name } => {
            managers.insert(&contact_id, &full_name)?;
            msg_success!(Message::ManagerAdded(full_name));
        }
        ManagerCommand::Remove { contact_id } => {
            managers.remove(&contact_id)?;
            msg_success!(Message::ManagerRemoved(contact_id));
        }
        ManagerCommand::List => {
            View::managers(&managers.fetch_all()?)?;
        }
    }

    Ok(())
}
