use crate::error::AssetLoadError;
use crate::model_host::interface::ModelHost;
use std::sync::{Arc, OnceLock};

/// Write-once slot for the loaded model, shared by cloning.
#[derive(Clone, Default)]
pub struct ModelHandle {
    inner: Arc<OnceLock<Arc<dyn ModelHost>>>,
}

impl ModelHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, host: Arc<dyn ModelHost>) -> Result<(), AssetLoadError> {
        self.inner
            .set(host)
            .map_err(|_| AssetLoadError::AlreadyLoaded)
    }

    pub fn get(&self) -> Option<Arc<dyn ModelHost>> {
        self.inner.get().cloned()
    }

    pub fn is_loaded(&self) -> bool {
        self.inner.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model_host::impl_fake::ModelHostFake;

    #[test]
    fn test_set_once_then_read_from_clones() {
        let handle = ModelHandle::new();
        let reader = handle.clone();
        assert!(!reader.is_loaded());

        handle.set(Arc::new(ModelHostFake::uniform())).unwrap();

        assert!(reader.is_loaded());
        assert!(reader.get().is_some());
    }

    #[test]
    fn test_second_set_is_rejected() {
        let handle = ModelHandle::new();
        handle.set(Arc::new(ModelHostFake::uniform())).unwrap();

        let result = handle.set(Arc::new(ModelHostFake::uniform()));

        assert!(matches!(result, Err(AssetLoadError::AlreadyLoaded)));
    }
}
