use crate::libs::messages::Message;
use reqwest::StatusCode;
use thiserror::Error;

/// The request an error belongs to. Supplies the fallback message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    FetchAll,
    FetchOne,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn fallback(&self) -> Message {
        match self {
            Operation::FetchAll => Message::FetchTasksFailed,
            Operation::FetchOne => Message::FetchTaskFailed,
            Operation::Create => Message::CreateTaskFailed,
            Operation::Update => Message::UpdateTaskFailed,
            Operation::Delete => Message::DeleteTaskFailed,
        }
    }
}

/// Failure of a single API call. Displays as a human-readable line.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-success status. `message` is the server's own text when it sent one.
    #[error("{message}")]
    Server { status: StatusCode, message: String },

    #[error("{}: {source}", .operation.fallback())]
    Transport {
        operation: Operation,
        #[source]
        source: reqwest::Error,
    },

    /// Body was not one of the accepted shapes.
    #[error("{}", Message::UnexpectedResponseFormat)]
    UnexpectedFormat,
}
