use std::sync::Arc;

use quiz_core::catalog::Catalog;
use quiz_core::gate::EntryGate;
use services::FeedbackSounds;

/// What the composition root (e.g. `crates/app`) must provide to the UI.
pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<Catalog>;
    fn entry_gate(&self) -> EntryGate;
    fn feedback_sounds(&self) -> Arc<dyn FeedbackSounds>;
    /// Base path prefixed to level images and sound files.
    fn asset_base(&self) -> String;
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<Catalog>,
    entry_gate: EntryGate,
    sounds: Arc<dyn FeedbackSounds>,
    asset_base: String,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: app.catalog(),
            entry_gate: app.entry_gate(),
            sounds: app.feedback_sounds(),
            asset_base: app.asset_base(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn entry_gate(&self) -> EntryGate {
        self.entry_gate.clone()
    }

    #[must_use]
    pub fn sounds(&self) -> Arc<dyn FeedbackSounds> {
        Arc::clone(&self.sounds)
    }

    #[must_use]
    pub fn asset_base(&self) -> &str {
        &self.asset_base
    }

    /// Resolves a catalog-relative asset reference (level image) against the
    /// configured base.
    #[must_use]
    pub fn asset_url(&self, relative: &str) -> String {
        format!("{}{relative}", self.asset_base)
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
