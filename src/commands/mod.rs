pub mod add;
pub mod delete;
pub mod edit;
pub mod init;
pub mod list;
pub mod toggle;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure the task server connection")]
    Init,
    #[command(about = "List tasks with optional status filter and search")]
    List(list::ListArgs),
    #[command(about = "Create task", arg_required_else_help = true)]
    Add(add::AddArgs),
    #[command(about = "Edit task title, description or due date", arg_required_else_help = true)]
    Edit(edit::EditArgs),
    #[command(about = "Mark task complete or incomplete", arg_required_else_help = true)]
    Toggle(toggle::ToggleArgs),
    #[command(about = "Delete task", arg_required_else_help = true)]
    Delete(delete::DeleteArgs),
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
            Commands::Init => init::cmd(),
            Commands::List(args) => list::cmd(args).await,
            Commands::Add(args) => add::cmd(args).await,
            Commands::Edit(args) => edit::cmd(args).await,
            Commands::Toggle(args) => toggle::cmd(args).await,
            Commands::Delete(args) => delete::cmd(args).await,
        }
    }
}
