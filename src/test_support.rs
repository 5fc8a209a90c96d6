//! Helpers shared by unit tests across modules.

use std::sync::{Mutex, MutexGuard, PoisonError};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Serialise tests that read or mutate the process environment.
pub(crate) fn env_lock() -> MutexGuard<'static, ()> {
  ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}
