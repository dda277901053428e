use thiserror::Error;

/// Errors produced by the Spark/YARN configuration derivation.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SparkError {
    #[error("Invalid hardware profile: {0}")]
    InvalidHardwareProfile(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type SparkResult<T> = Result<T, SparkError>;

/// Errors produced by the sketch store and sketch items.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum SketchError {
    #[error("Unknown sketch item name: {0}")]
    UnknownItemType(String),

    #[error("Sketch item \"{0}\" already exists")]
    ItemAlreadyExists(String),

    #[error("Sketch item \"{0}\" does not exist")]
    ItemNotFound(String),

    #[error("Sketch \"{0}\" does not exist")]
    SketchNotFound(String),

    #[error("Default sketch is not a symlink")]
    DefaultNotSymlink,

    #[error("Key not found: {0}")]
    KeyNotFound(String),

    #[error("Sketch \"{0}\" is not a JSON object")]
    NotAnObject(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type SketchResult<T> = Result<T, SketchError>;
