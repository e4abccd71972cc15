//! Engine registry
//!
//! Holds the active [`KsoupEngine`]. Activating here also activates the
//! same instance in [`ksoup_io::registry`], so code written against the
//! core-IO facade and code written against the full facade see one engine.

use std::sync::{Arc, PoisonError, RwLock};

use ksoup_io::{EngineError, IoEngine, Result};

use crate::KsoupEngine;

static ACTIVE: RwLock<Option<Arc<dyn KsoupEngine>>> = RwLock::new(None);

/// Activate `engine` for the rest of the process
pub fn activate<E: KsoupEngine + 'static>(engine: E) -> Result<()> {
    activate_shared(Arc::new(engine))
}

/// Activate an engine the caller keeps a handle to.
///
/// Fails with [`EngineError::EngineAlreadyInitialized`] if either registry
/// already holds an engine; nothing changes in that case.
pub fn activate_shared<E: KsoupEngine + 'static>(engine: Arc<E>) -> Result<()> {
    let mut slot = ACTIVE.write().unwrap_or_else(PoisonError::into_inner);
    if let Some(active) = slot.as_ref() {
        tracing::warn!(active = active.name(), rejected = engine.name(), "engine already active");
        return Err(EngineError::EngineAlreadyInitialized(active.name()));
    }
    ksoup_io::registry::activate(engine.clone())?;
    tracing::info!(engine = engine.name(), "ksoup engine activated");
    *slot = Some(engine);
    Ok(())
}

/// The active engine
pub fn current() -> Result<Arc<dyn KsoupEngine>> {
    ACTIVE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
        .ok_or(EngineError::EngineNotInitialized)
}

pub fn is_active() -> bool {
    ACTIVE.read().unwrap_or_else(PoisonError::into_inner).is_some()
}

/// Clear both registries
#[cfg(any(test, feature = "test-support"))]
pub fn reset() -> Option<Arc<dyn KsoupEngine>> {
    ksoup_io::registry::reset();
    ACTIVE.write().unwrap_or_else(PoisonError::into_inner).take()
}
