/// Every user-facing message of the application.
///
/// Text lives in [`super::display`]; call sites pass variants to the
/// `msg_*!` macros or call `to_string()` for prompts.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated,
    TaskUpdated,
    TaskDeleted,
    TaskMarkedComplete,
    TaskMarkedIncomplete,
    TasksNotAvailable,
    TasksNoSearchMatch,
    TaskCounts(usize, usize, usize), // all, active, completed
    EditingTask(String),             // title
    NoChangesDetected,
    ConfirmDeleteTask(String), // title
    OperationCancelled,
    PromptTaskTitle,
    PromptTaskDescription,
    PromptTaskDueDate,

    // === VALIDATION MESSAGES ===
    TitleTooShort(usize),
    TitleTooLong(usize),
    DueDateRequired,
    DueDateInvalid(String),

    // === API MESSAGES ===
    FetchTasksFailed,
    FetchTaskFailed,
    CreateTaskFailed,
    UpdateTaskFailed,
    DeleteTaskFailed,
    ToggleStatusFailed,
    UnexpectedResponseFormat,
    ApiRequest(String, String), // method, url
    ApiWrappedEnvelope,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleServer,
    PromptServerApiUrl,
    ApiUrlResolved(String),
}
