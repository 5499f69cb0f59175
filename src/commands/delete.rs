use crate::{
    api::{TaskStore, TasksClient},
    libs::{config::Config, messages::Message},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task ID
    #[arg(required = true)]
    pub id: String,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

pub async fn cmd(args: DeleteArgs) -> Result<()> {
    let client = TasksClient::from_config(&Config::read()?);

    if !args.yes {
        let task = client.fetch_task(&args.id).await?;
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(task.title).to_string())
            .default(false)
            .interact()?;

        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    run(&client, &args.id).await
}

pub async fn run(store: &impl TaskStore, id: &str) -> Result<()> {
    store.delete_task(id).await?;
    msg_success!(Message::TaskDeleted);

    Ok(())
}
