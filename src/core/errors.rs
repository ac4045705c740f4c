use thiserror::Error;

#[derive(Error, Debug)]
pub enum KaramoveError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("HTTP error {status} from {url}")]
    Http { status: u16, url: String },

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Member {member} references profile {index}, but only {count} profiles exist")]
    UnknownProfile { member: String, index: usize, count: usize },

    #[error("Member {member} references unknown technique {index}")]
    UnknownTechnique { member: String, index: usize },

    #[error("Group {group} references unknown location {index}")]
    UnknownLocation { group: String, index: usize },

    #[error("Group name appears more than once: {0}")]
    DuplicateGroup(String),

    #[error("KaramoveError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for KaramoveError {
    fn from(error: std::io::Error) -> Self {
        KaramoveError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for KaramoveError {
    fn from(error: reqwest::Error) -> Self {
        KaramoveError::Reqwest(Box::new(error))
    }
}
