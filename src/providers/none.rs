use crate::core::provider::{Provider, ProviderKind};

/// Registrar that performs no registrar-side management. Every domain
/// is registered with this handle.
pub struct NoneRegistrar;

impl Provider for NoneRegistrar {
    fn name(&self) -> &str {
        "none"
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Registrar
    }
}
