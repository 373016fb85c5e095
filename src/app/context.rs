use crate::ports::{ConfigRenderer, ProjectStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: ProjectStore, R: ConfigRenderer> {
    store: S,
    renderer: R,
}

impl<S: ProjectStore, R: ConfigRenderer> AppContext<S, R> {
    /// Create a new application context.
    pub fn new(store: S, renderer: R) -> Self {
        Self { store, renderer }
    }

    /// Get a reference to the project store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a reference to the config renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
