//! Errors raised by the bundled realtime database SDK.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SdkError {
    #[error("app '{name}' already exists with different options")]
    DuplicateApp { name: String },

    #[error("app '{name}' has been deleted")]
    AppDeleted { name: String },

    #[error("invalid database URL '{url}': {source}")]
    InvalidDatabaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("unsupported database URL scheme '{scheme}'; expected https or http")]
    UnsupportedScheme { scheme: String },

    #[error("cannot determine database namespace from '{url}'")]
    MissingNamespace { url: String },
}
