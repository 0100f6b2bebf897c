use std::sync::Arc;

use crate::llm_client::TextGenerator;
use crate::zero_shot::ZeroShotClassifier;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once at startup; nothing in it is mutated afterwards.
#[derive(Clone)]
pub struct AppState {
    /// Hosted model. Production: `LlmClient`.
    pub llm: Arc<dyn TextGenerator>,
    /// Behavioral zero-shot classifier. Production: `HttpZeroShotClassifier`.
    pub classifier: Arc<dyn ZeroShotClassifier>,
}
