use crate::{
    api::{TaskStore, TasksClient},
    libs::{
        config::Config,
        messages::Message,
        task::{Task, TaskDraft},
    },
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args, Default)]
pub struct EditArgs {
    /// Task ID
    #[arg(required = true)]
    pub id: String,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(short, long)]
    pub description: Option<String>,
    /// Due date as YYYY-MM-DD
    #[arg(long)]
    pub due: Option<String>,
}

impl EditArgs {
    pub fn has_changes(&self) -> bool {
        self.title.is_some() || self.description.is_some() || self.due.is_some()
    }

    /// Overlays the given flags on the current task. Completion is left untouched.
    pub fn apply(&self, current: &Task) -> TaskDraft {
        let mut draft = current.to_draft();
        if let Some(title) = &self.title {
            draft.title = title.clone();
        }
        if let Some(description) = &self.description {
            draft.description = description.clone();
        }
        if let Some(due) = &self.due {
            draft = draft.with_due_date(due);
        }
        draft
    }
}

pub async fn cmd(args: EditArgs) -> Result<()> {
    let client = TasksClient::from_config(&Config::read()?);
    let current = client.fetch_task(&args.id).await?;

    let draft = if args.has_changes() { args.apply(&current) } else { prompt(&current)? };
    run(&client, &current, draft).await?;

    Ok(())
}

/// Asks for each field with the current value as default.
fn prompt(current: &Task) -> Result<TaskDraft> {
    msg_print!(Message::EditingTask(current.title.clone()), true);

    let mut draft = current.to_draft();
    draft.title = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskTitle.to_string())
        .default(current.title.clone())
        .interact_text()?;
    draft.description = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDescription.to_string())
        .default(current.description.clone())
        .allow_empty(true)
        .interact_text()?;
    let due: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDueDate.to_string())
        .default(current.due_date.clone())
        .interact_text()?;

    Ok(draft.with_due_date(&due))
}

/// Sends the update unless nothing changed. Returns the updated task, or `None` when skipped.
pub async fn run(store: &impl TaskStore, current: &Task, draft: TaskDraft) -> Result<Option<Task>> {
    if draft == current.to_draft() {
        msg_info!(Message::NoChangesDetected);
        return Ok(None);
    }

    draft.validate()?;
    let task = store.update_task(&current.id, &draft).await?;
    msg_success!(Message::TaskUpdated);

    Ok(Some(task))
}
