use crate::{
    api::{TaskStore, TasksClient},
    libs::{config::Config, messages::Message, task::Task, task::TaskDraft},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title, at least 3 characters
    #[arg(required = true)]
    pub title: String,
    #[arg(short, long, default_value = "")]
    pub description: String,
    /// Due date as YYYY-MM-DD, defaults to today
    #[arg(long)]
    pub due: Option<String>,
}

impl AddArgs {
    pub fn draft(&self) -> TaskDraft {
        let draft = TaskDraft::new(&self.title, &self.description);
        match &self.due {
            Some(due) => draft.with_due_date(due),
            None => draft,
        }
    }
}

pub async fn cmd(args: AddArgs) -> Result<()> {
    let client = TasksClient::from_config(&Config::read()?);
    run(&client, args.draft()).await?;

    Ok(())
}

/// Validates the draft locally, then creates it. Invalid drafts never reach the server.
pub async fn run(store: &impl TaskStore, draft: TaskDraft) -> Result<Task> {
    draft.validate()?;
    let task = store.create_task(&draft).await?;
    msg_success!(Message::TaskCreated);

    Ok(task)
}
