//! Core engine registry
//!
//! Process-wide, write-once slot holding the active [`IoEngine`]. The slot
//! sits behind an `RwLock`, so an activation is visible to every thread that
//! reads afterwards. Code that already holds an engine should call it
//! directly instead of going through here.

use std::sync::{Arc, PoisonError, RwLock};

use crate::{EngineError, IoEngine, Result};

static ACTIVE: RwLock<Option<Arc<dyn IoEngine>>> = RwLock::new(None);

/// Activate `engine` for the rest of the process.
///
/// Fails with [`EngineError::EngineAlreadyInitialized`] if an engine is
/// already active; the first activation stays in place.
pub fn activate(engine: Arc<dyn IoEngine>) -> Result<()> {
    let mut slot = ACTIVE.write().unwrap_or_else(PoisonError::into_inner);
    if let Some(active) = slot.as_ref() {
        tracing::warn!(active = active.name(), rejected = engine.name(), "engine already active");
        return Err(EngineError::EngineAlreadyInitialized(active.name()));
    }
    tracing::debug!(engine = engine.name(), "activating io engine");
    *slot = Some(engine);
    Ok(())
}

/// The active engine
pub fn current() -> Result<Arc<dyn IoEngine>> {
    ACTIVE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
        .ok_or(EngineError::EngineNotInitialized)
}

pub fn is_active() -> bool {
    ACTIVE.read().unwrap_or_else(PoisonError::into_inner).is_some()
}

/// Clear the slot so a test can activate its own engine
#[cfg(any(test, feature = "test-support"))]
pub fn reset() -> Option<Arc<dyn IoEngine>> {
    ACTIVE.write().unwrap_or_else(PoisonError::into_inner).take()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(&'static str);

    impl IoEngine for Named {
        fn name(&self) -> &'static str {
            self.0
        }
    }

    // One test walks the whole lifecycle; the slot is shared by every test
    // thread in this binary.
    #[test]
    fn test_lifecycle() {
        reset();
        assert!(matches!(current(), Err(EngineError::EngineNotInitialized)));
        assert!(!is_active());

        activate(Arc::new(Named("first"))).unwrap();
        assert!(is_active());
        assert_eq!(current().unwrap().name(), "first");

        let err = activate(Arc::new(Named("second"))).unwrap_err();
        assert!(matches!(err, EngineError::EngineAlreadyInitialized("first")));
        assert_eq!(current().unwrap().name(), "first");

        let previous = reset().unwrap();
        assert_eq!(previous.name(), "first");
        assert!(current().is_err());
    }
}
