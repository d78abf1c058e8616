use thiserror::Error;

pub type Result<T> = std::result::Result<T, DirlibError>;

#[derive(Error, Debug)]
pub enum DirlibError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parsing error")]
    Parse,
    #[error("Storage error: {0} {1}")]
    Storage(String, String),
    #[error("Please select an image file")]
    ImageType,
    #[error("Image size should be less than 1MB ({size} bytes given)")]
    ImageTooLarge { size: usize },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<serde_json::Error> for DirlibError {
    fn from(_: serde_json::Error) -> Self {
        Self::Parse
    }
}
