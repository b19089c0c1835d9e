use std::{io, num::ParseIntError, path::PathBuf};

use thiserror::Error;

use crate::events::EventType;

#[derive(Debug, Error)]
pub enum Error {
    #[error("couldn't parse environment variable {name}")]
    EnvParse {
        name: &'static str,
        #[source]
        source: EnvVarError,
    },

    #[error("GITHUB_REPOSITORY `{0}` isn't of the form `owner/repo`")]
    RepositoryFormat(String),

    #[error("couldn't open event file `{}`", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    // the file was opened, but reading it failed midway
    #[error("couldn't read event file `{}`", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("couldn't decode event payload")]
    PayloadDecode(#[from] DecodeError),
}

/// Why a typed environment variable couldn't be read.
#[derive(Debug, Error)]
pub enum EnvVarError {
    #[error("variable is not set")]
    Missing,

    #[error("`{0}` is not a boolean")]
    InvalidBool(String),

    #[error("`{value}` is not a base-10 integer")]
    InvalidInt {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("unknown event type `{0}`")]
    UnknownEvent(String),

    #[error("payload doesn't match the `{event}` event schema")]
    Json {
        event: EventType,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
