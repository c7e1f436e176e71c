#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleSheet,
    SheetIdFromEnv,
    SheetIdFromConfig,
    SheetIdNotFound,
    InvalidSheetUrl,

    // === AUTHENTICATION MESSAGES ===
    Authorizing,
    Authorized,
    TokenRefreshed,
    NotLoggedIn,
    CredentialsNotFound(String), // path
    OpenConsentUrl(String),      // url
    WaitingForConsent(u16),      // port
    LoginSucceeded(String),      // token path
    LoggedOut,
    AlreadyLoggedOut,

    // === RANGE MESSAGES ===
    InvalidCellRange,

    // === PIPELINE MESSAGES ===
    FetchingRange(String),    // range
    FetchFailed(String),      // error
    EmptyGrid(String),        // range
    NoUsersFound,
    DuplicateUserColumn(String), // user
    TotalsHeader(String),     // range
    StepCompleted(String, u128), // step, elapsed ns
    UnpairedTimestamps(String, usize), // user, dropped count
    WritingRange(String),     // range
    WriteSucceeded(u64, String), // updated cells, range
    WriteFailed(String),      // error
    Exiting,

    // === PROMPTS ===
    PromptSheetUrl,
    PromptReadRange(String),   // default
    PromptWriteRange(usize),   // user count
    PromptWriteCells,
    PromptDefaultReadRange,
    PromptDefaultWriteRange,
}
