use crate::core::provider::Provider;
use crate::core::record::Record;
use serde_json::json;
use std::sync::Arc;

/// One domain registration: the domain name, the fixed registrar, the
/// resolved provider binding, and the records in declaration order.
pub struct DomainDecl {
    pub name: String,
    pub registrar: Arc<dyn Provider>,
    pub provider: Arc<dyn Provider>,
    pub records: Vec<Record>,
}

impl DomainDecl {
    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "name": self.name,
            "registrar": self.registrar.name(),
            "provider": self.provider.name(),
            "records": self.records.iter().map(|record| {
                json!({
                    "type": record.record_type.to_string(),
                    "name": record.name,
                    "target": record.target,
                    "modifiers": record.modifiers.iter()
                        .map(|m| m.to_string())
                        .collect::<Vec<_>>(),
                })
            }).collect::<Vec<_>>(),
        })
    }
}

/// Seam towards the downstream declaration API.
pub trait Declarator {
    fn declare(&mut self, decl: DomainDecl);
}

/// Buffers declarations so nothing is rendered until the whole mapping
/// pass has succeeded.
#[derive(Default)]
pub struct RecordingDeclarator {
    domains: Vec<DomainDecl>,
}

impl std::fmt::Debug for RecordingDeclarator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordingDeclarator")
            .field("domains", &self.domains.len())
            .finish()
    }
}

impl RecordingDeclarator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn domains(&self) -> &[DomainDecl] {
        &self.domains
    }

    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "domains": self.domains.iter().map(DomainDecl::to_json).collect::<Vec<_>>(),
        })
    }
}

impl Declarator for RecordingDeclarator {
    fn declare(&mut self, decl: DomainDecl) {
        self.domains.push(decl);
    }
}
