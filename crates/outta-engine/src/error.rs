use outta_core::TriageError;
use outta_store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("triage error: {0}")]
    Triage(#[from] TriageError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
