use crate::error::InferenceError;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// A user-selected photo, still encoded.
#[derive(Clone, PartialEq, Eq)]
pub struct LeafImage {
    pub name: String,
    pub bytes: Arc<[u8]>,
}

impl LeafImage {
    pub fn new(name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    pub fn read(path: &Path) -> Result<Self, InferenceError> {
        let bytes = std::fs::read(path).map_err(|source| InferenceError::ReadImage {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self::new(name, bytes))
    }
}

impl fmt::Debug for LeafImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeafImage")
            .field("name", &self.name)
            .field("bytes", &format_args!("<{} bytes>", self.bytes.len()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_bytes() {
        let image = LeafImage::new("leaf.jpg", vec![1u8, 2, 3]);

        assert_eq!(
            format!("{:?}", image),
            "LeafImage { name: \"leaf.jpg\", bytes: <3 bytes> }"
        );
    }

    #[test]
    fn test_read_missing_file() {
        let error = LeafImage::read(Path::new("/nonexistent/leaf.png")).unwrap_err();

        assert!(matches!(error, InferenceError::ReadImage { .. }));
        assert!(error.to_string().contains("/nonexistent/leaf.png"));
    }
}
