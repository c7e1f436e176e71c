pub mod init;
pub mod login;
pub mod logout;
pub mod sum;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Authorize access to Google Sheets")]
    Login(login::LoginArgs),
    #[command(about = "Remove the cached Google token")]
    Logout,
    #[command(about = "Total worked hours per person and optionally write them back")]
    Sum(sum::SumArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Login(args) => login::cmd(args).await,
            Commands::Logout => logout::cmd(),
            Commands::Sum(args) => sum::cmd(args).await,
        }
    }
}
