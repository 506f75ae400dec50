use serde::{Deserialize, Serialize};
use crate::core::command::CommandError;
use crate::core::domain::Configuration;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppState {
    pub config: Configuration,
}

impl AppState {
    pub fn new(config: Configuration) -> AppState {
        AppState {
            config,
        }
    }
}

// ErrorKind classifies a failed request for the console
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ErrorKind {
    Conflict,
    NotFound,
    NoContent,
    Internal,
}

pub type ShellError = (ErrorKind, String);

impl From<CommandError> for ShellError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::DuplicateKey { message } => {
                (ErrorKind::Conflict, message)
            }
            CommandError::NotFound { message } => {
                (ErrorKind::NotFound, message)
            }
            CommandError::Conflict { message } => {
                (ErrorKind::Conflict, message)
            }
            CommandError::Empty { message } => {
                (ErrorKind::NoContent, message)
            }
            CommandError::Runtime { message, .. } => {
                (ErrorKind::Internal, message)
            }
        }
    }
}
