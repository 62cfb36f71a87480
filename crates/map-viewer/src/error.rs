use thiserror::Error;

use crate::marker::types::MarkerId;

#[derive(Error, Debug, Clone)]
pub enum MapError {
    #[error("Marker label must not be empty")]
    InvalidLabel,

    #[error("No removable marker with id {0}")]
    MarkerNotFound(MarkerId),

    #[error("Failed to load image: {0}")]
    ImageLoad(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("File write error: {0}")]
    FileWriteError(String),

    #[error("File read error: {0}")]
    FileReadError(String),
}

pub type Result<T> = std::result::Result<T, MapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_label_display() {
        let error = MapError::InvalidLabel;
        assert_eq!(format!("{}", error), "Marker label must not be empty");
    }

    #[test]
    fn test_marker_not_found_display() {
        let error = MapError::MarkerNotFound(999);
        let msg = format!("{}", error);
        assert!(msg.contains("999"));
        assert!(msg.contains("No removable marker"));
    }

    #[test]
    fn test_image_load_display() {
        let error = MapError::ImageLoad("unsupported format".to_string());
        assert_eq!(
            format!("{}", error),
            "Failed to load image: unsupported format"
        );
    }

    #[test]
    fn test_file_read_error_display() {
        let error = MapError::FileReadError("permission denied".to_string());
        assert_eq!(format!("{}", error), "File read error: permission denied");
    }

    #[test]
    fn test_error_is_cloneable() {
        let error = MapError::InvalidLabel;
        let cloned = error.clone();
        assert_eq!(format!("{}", error), format!("{}", cloned));
    }

    #[test]
    fn test_result_type() {
        let ok: Result<u64> = Ok(7);
        assert!(ok.is_ok());
        let err: Result<u64> = Err(MapError::MarkerNotFound(1));
        assert!(err.is_err());
    }
}
