// file: src/utils/validation.rs
// description: data validation utilities and helpers
// reference: input validation patterns

use crate::error::{BlogError, Result};
use std::path::Path;

pub struct Validator;

impl Validator {
    /// Uploaded image names are joined under the posts directory, so they
    /// must be bare filenames: no separators, no parent references.
    pub fn validate_image_filename(filename: &str) -> Result<()> {
        if filename.is_empty() {
            return Err(BlogError::Validation(
                "Image filename must not be empty".to_string(),
            ));
        }

        if filename.contains('/') || filename.contains('\\') || filename.contains("..") {
            return Err(BlogError::Validation(format!(
                "Image filename must not contain path components: {}",
                filename
            )));
        }

        Ok(())
    }

    pub fn validate_directory(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(BlogError::Validation(format!(
                "Directory does not exist: {}",
                path.display()
            )));
        }

        if !path.is_dir() {
            return Err(BlogError::Validation(format!(
                "Path is not a directory: {}",
                path.display()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_filename_accepted() {
        assert!(Validator::validate_image_filename("2026-01-05-test-image.jpeg").is_ok());
    }

    #[test]
    fn test_empty_filename_rejected() {
        assert!(Validator::validate_image_filename("").is_err());
    }

    #[test]
    fn test_path_components_rejected() {
        assert!(Validator::validate_image_filename("../escape.png").is_err());
        assert!(Validator::validate_image_filename("a/b.png").is_err());
        assert!(Validator::validate_image_filename("a\\b.png").is_err());
    }

    #[test]
    fn test_validate_directory() {
        let temp = tempfile::TempDir::new().unwrap();
        assert!(Validator::validate_directory(temp.path()).is_ok());
        assert!(Validator::validate_directory(&temp.path().join("missing")).is_err());
    }
}
