use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("entry '{entry_text}' references unknown entry type '{type_name}'")]
    UnresolvedType {
        type_name: String,
        entry_text: String,
    },

    #[error("entry type '{type_name}' has unknown interaction '{interaction}'")]
    UnknownInteraction {
        type_name: String,
        interaction: String,
    },

    #[error("{what} index {index} out of range (len {len})")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },

    #[error("malformed document: {0}")]
    MalformedDocument(String),

    #[error("list uid '{uid}' derived by both {first} and {second}")]
    UidCollision {
        uid: String,
        first: String,
        second: String,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CoreResult<T> = Result<T, CoreError>;
