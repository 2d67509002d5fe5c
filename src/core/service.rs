//! Service layer for the greeting.
//!
//! Two ways to substitute the data source are offered:
//!
//! - [`HelloService`] takes its [`GreetingSource`] through the constructor.
//!   Each test builds its own service, so nothing is shared.
//! - [`say_hello`] reads a process-wide override that tests install through
//!   [`set_override`] or, preferably, [`override_with`]. The override is
//!   absent at startup, in which case the call goes straight to
//!   [`dao::hello`].
//!
//! ```
//! use hello_service::core::service::{override_with, say_hello};
//!
//! let guard = override_with(|| "Hola".to_string());
//! assert_eq!(say_hello(), "Hola");
//! drop(guard);
//! ```

use crate::adapters::dao::{self, HelloDao};
use crate::domain::ports::GreetingSource;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

pub type GreetingFn = Arc<dyn Fn() -> String + Send + Sync>;

static OVERRIDE: RwLock<Option<GreetingFn>> = RwLock::new(None);

// Held by every OverrideGuard so tests touching the seam run one at a time.
static SEAM_LOCK: Mutex<()> = Mutex::new(());

/// Return the greeting, from the installed override if there is one,
/// otherwise from the data access layer.
pub fn say_hello() -> String {
    // Clone out of the lock so an override may itself touch the seam.
    let installed = OVERRIDE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone();

    match installed {
        Some(greet) => {
            tracing::debug!("say_hello: using installed override");
            greet()
        }
        None => {
            tracing::debug!("say_hello: delegating to data access");
            dao::hello()
        }
    }
}

/// Install (`Some`) or clear (`None`) the process-wide override.
///
/// Test seam. Concurrent tests must not call this directly; use
/// [`override_with`] so installs are serialised and always cleared.
pub fn set_override(greet: Option<GreetingFn>) {
    match &greet {
        Some(_) => tracing::debug!("installing say_hello override"),
        None => tracing::debug!("clearing say_hello override"),
    }
    *OVERRIDE.write().unwrap_or_else(PoisonError::into_inner) = greet;
}

pub fn clear_override() {
    set_override(None);
}

pub fn has_override() -> bool {
    OVERRIDE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .is_some()
}

/// Exclusive handle on the override seam. Clears the override when dropped,
/// including during a panic unwind.
pub struct OverrideGuard {
    _serial: MutexGuard<'static, ()>,
}

impl OverrideGuard {
    fn acquire() -> Self {
        let serial = SEAM_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        // A previous holder may have used set_override without clearing.
        clear_override();
        Self { _serial: serial }
    }

    pub fn set<F>(&self, greet: F)
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        set_override(Some(Arc::new(greet)));
    }

    pub fn clear(&self) {
        clear_override();
    }
}

impl Drop for OverrideGuard {
    fn drop(&mut self) {
        clear_override();
    }
}

/// Take the seam and install `greet` for as long as the guard lives.
pub fn override_with<F>(greet: F) -> OverrideGuard
where
    F: Fn() -> String + Send + Sync + 'static,
{
    let guard = OverrideGuard::acquire();
    guard.set(greet);
    guard
}

/// Take the seam with no override installed.
pub fn without_override() -> OverrideGuard {
    OverrideGuard::acquire()
}

/// Greeting service with its source injected at construction.
#[derive(Debug, Clone)]
pub struct HelloService<S: GreetingSource = HelloDao> {
    source: S,
}

impl<S: GreetingSource> HelloService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Ask the source for the greeting. Never cached.
    pub fn say_hello(&self) -> String {
        self.source.greeting()
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

impl HelloService<HelloDao> {
    /// Service wired to the data access layer.
    pub fn production() -> Self {
        Self::new(HelloDao)
    }
}

impl Default for HelloService<HelloDao> {
    fn default() -> Self {
        Self::production()
    }
}
