use crate::{
    api::{TaskStore, TasksClient},
    libs::{config::Config, messages::Message, task::Task},
    msg_error_anyhow, msg_success,
};
use anyhow::{Context, Result};
use clap::Args;

#[derive(Debug, Args)]
pub struct ToggleArgs {
    /// Task ID
    #[arg(required = true)]
    pub id: String,
}

pub async fn cmd(args: ToggleArgs) -> Result<()> {
    let client = TasksClient::from_config(&Config::read()?);
    run(&client, &args.id).await?;

    Ok(())
}

/// Flips the completion flag, resending every other field unchanged.
pub async fn run(store: &impl TaskStore, id: &str) -> Result<Task> {
    let current = store.fetch_task(id).await?;

    let mut draft = current.to_draft();
    draft.completed = !current.completed;

    let task = store
        .update_task(&current.id, &draft)
        .await
        .with_context(|| msg_error_anyhow!(Message::ToggleStatusFailed))?;

    if current.completed {
        msg_success!(Message::TaskMarkedIncomplete);
    } else {
        msg_success!(Message::TaskMarkedComplete);
    }

    Ok(task)
}
