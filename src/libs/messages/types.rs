#[derive(Debug, Clone)]
pub enum Message {
    // === SESSION MESSAGES ===
    Greeting,
    Farewell,
    UnknownCommand(String),
    EmptyDescription(String), // error detail
    TasksLoaded(usize),

    // === TASK MESSAGES ===
    TaskAdded { task: String, total: usize },
    TaskMarkedDone(String),
    TaskMarkedUndone(String),
    TaskDeleted { task: String, total: usize },
    TaskTagged(String),
    TaskUntagged(String),
    AfterTaskAttached(String),
    AfterTaskUnlocked(String),
    AfterTaskDone(String),
    AfterTaskUndone(String),
    TasksHeader,
    TasksFoundHeader(String), // search text
    TasksTaggedHeader(String), // tag
    NoTasks,
    NoTasksFound(String),

    // === ERROR MESSAGES ===
    InvalidSchedule(String),
    IndexOutOfBound(String),
    InvalidTaskNumber(String),
    AfterTaskUnavailable,
    CorruptTaskFile(String),
    TaskFileWriteFailed(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleStorage,
    PromptSelectModules,
    PromptTaskFileName,
}
