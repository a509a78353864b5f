//! The theme currently in use, swappable at runtime.
//!
//! Readers take a cheap [`Arc`] snapshot with [`ActiveTheme::current`] and
//! keep using it for as long as they like; a concurrent
//! [`replace`](ActiveTheme::replace) or [`reload`](ActiveTheme::reload) only
//! affects later snapshots. A failed reload leaves the active model untouched.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::error::ThemeError;
use crate::loader::ThemeReference;
use crate::resolved::ResolvedStyleModel;
use crate::resolver::resolve;

#[derive(Debug)]
pub struct ActiveTheme {
    model: ArcSwap<ResolvedStyleModel>,
}

impl ActiveTheme {
    pub fn new(model: ResolvedStyleModel) -> Self {
        Self {
            model: ArcSwap::from_pointee(model),
        }
    }

    /// Resolves `reference` and makes it the initial theme.
    pub fn resolve(reference: &ThemeReference) -> Result<Self, ThemeError> {
        resolve(reference).map(Self::new)
    }

    /// A snapshot of the active model.
    pub fn current(&self) -> Arc<ResolvedStyleModel> {
        self.model.load_full()
    }

    /// Publishes `model`, returning the one it replaced.
    pub fn replace(&self, model: ResolvedStyleModel) -> Arc<ResolvedStyleModel> {
        self.model.swap(Arc::new(model))
    }

    /// Re-runs resolution for `reference` and publishes the result.
    ///
    /// # Errors
    ///
    /// Returns the resolution error. The previous model stays active.
    pub fn reload(
        &self,
        reference: &ThemeReference,
    ) -> Result<Arc<ResolvedStyleModel>, ThemeError> {
        match resolve(reference) {
            Ok(model) => {
                let model = Arc::new(model);
                self.model.store(Arc::clone(&model));
                tracing::debug!(source = %reference, "theme reloaded");
                Ok(model)
            }
            Err(err) => {
                tracing::warn!(
                    source = %reference,
                    error = %err,
                    "theme reload rejected, keeping current theme"
                );
                Err(err)
            }
        }
    }
}
