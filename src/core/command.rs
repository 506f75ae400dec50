use crate::core::library::LibraryError;

#[derive(Debug)]
pub enum CommandError {
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    // the request conflicts with the current issue state of the book
    Conflict {
        message: String,
    },
    // nothing to show: empty catalog or a search without hits
    Empty {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl CommandError {
    pub fn message(&self) -> &str {
        match self {
            CommandError::DuplicateKey { message } => { message }
            CommandError::NotFound { message } => { message }
            CommandError::Conflict { message } => { message }
            CommandError::Empty { message } => { message }
            CommandError::Runtime { message, .. } => { message }
        }
    }
}

/// Command runs a single catalog request; commands borrow the catalog
/// only for the duration of `execute`.
pub trait Command<Request, Response> {
    fn execute(&mut self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::DuplicateKey { message } => {
                CommandError::DuplicateKey { message }
            }
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::AlreadyIssued { message } => {
                CommandError::Conflict { message }
            }
            LibraryError::NotIssued { message } => {
                CommandError::Conflict { message }
            }
            LibraryError::CurrentlyIssued { message } => {
                CommandError::Conflict { message }
            }
            LibraryError::NoMatch { message } => {
                CommandError::Empty { message }
            }
            LibraryError::EmptyCatalog { message } => {
                CommandError::Empty { message }
            }
            LibraryError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code }
            }
        }
    }
}
