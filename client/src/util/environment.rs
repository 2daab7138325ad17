//! One-time browser environment setup: document title and favicon.
//!
//! Runs once per page lifetime, on the first client-side mount. The favicon
//! swap is cosmetic: if the `<link rel="icon">` element is missing (or the
//! browser rejects the update) the step is skipped and only a debug line is
//! logged. Requires a browser environment; on the server only the guard flips.

use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(test)]
#[path = "environment_test.rs"]
mod environment_test;

pub const DOCUMENT_TITLE: &str = "STAVLAV, s.r.o. | Komplexní stavební a montážní práce";

#[cfg(feature = "hydrate")]
const FAVICON_SELECTOR: &str = "link[rel~='icon']";

static ENVIRONMENT: EnvironmentGuard = EnvironmentGuard::new();

/// Result of an initialization attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitOutcome {
    Applied,
    AlreadyInitialized,
}

/// One-shot flag guarding a process-wide side effect.
#[derive(Debug)]
pub struct EnvironmentGuard {
    done: AtomicBool,
}

impl EnvironmentGuard {
    #[must_use]
    pub const fn new() -> Self {
        Self { done: AtomicBool::new(false) }
    }

    /// Run `apply` unless this guard already fired.
    pub fn run_once(&self, apply: impl FnOnce()) -> InitOutcome {
        if self.done.swap(true, Ordering::AcqRel) {
            return InitOutcome::AlreadyInitialized;
        }
        apply();
        InitOutcome::Applied
    }

    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::Acquire)
    }
}

impl Default for EnvironmentGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// Set the document title and swap in the generated favicon, once.
pub fn initialize_environment() -> InitOutcome {
    ENVIRONMENT.run_once(apply)
}

#[cfg(feature = "hydrate")]
fn apply() {
    use wasm_bindgen::JsCast;

    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        log::debug!("no document; skipping environment setup");
        return;
    };

    doc.set_title(DOCUMENT_TITLE);

    let favicon = doc
        .query_selector(FAVICON_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web_sys::HtmlLinkElement>().ok());
    match favicon {
        Some(link) => link.set_href(&super::favicon::data_uri()),
        None => log::debug!("favicon link not found; keeping default icon"),
    }
}

#[cfg(not(feature = "hydrate"))]
fn apply() {}
