use crate::{
    api::{TaskStore, TasksClient},
    libs::{
        collection::{StatusFilter, TaskCollection},
        config::Config,
        date,
        messages::Message,
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args, Default)]
pub struct ListArgs {
    /// Completion bucket to show
    #[arg(short, long, value_enum, default_value_t = StatusFilter::All)]
    pub filter: StatusFilter,
    /// Case-insensitive text matched against title and description
    #[arg(short, long, default_value = "")]
    pub search: String,
}

pub async fn cmd(args: ListArgs) -> Result<()> {
    let client = TasksClient::from_config(&Config::read()?);
    run(&client, &args).await?;

    Ok(())
}

/// Fetches the collection, prints bucket counts and the filtered table.
pub async fn run(store: &impl TaskStore, args: &ListArgs) -> Result<TaskCollection> {
    let collection = TaskCollection::new(store.fetch_tasks().await?);
    msg_print!(View::counts(&collection.counts()), true);

    let visible = collection.view(args.filter, &args.search);
    if visible.is_empty() {
        if args.search.trim().is_empty() {
            msg_info!(Message::TasksNotAvailable);
        } else {
            msg_info!(Message::TasksNoSearchMatch);
        }
    } else {
        View::tasks(&visible, &date::today());
    }

    Ok(collection)
}
