use crate::core::provider::Provider;
use crate::providers::cloudflare::Cloudflare;
use crate::providers::none::NoneRegistrar;
use std::collections::HashMap;
use std::sync::Arc;

/// Lookup table from provider key to handle. Seeded once at startup and
/// read-only afterwards; the mapper receives it explicitly.
pub struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn Provider>>,
}

impl ProviderRegistry {
    pub fn builtin() -> Self {
        let mut providers: HashMap<String, Arc<dyn Provider>> = HashMap::new();
        for provider in [
            Arc::new(NoneRegistrar) as Arc<dyn Provider>,
            Arc::new(Cloudflare) as Arc<dyn Provider>,
        ] {
            providers.insert(provider.name().to_string(), provider);
        }
        ProviderRegistry { providers }
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Provider>> {
        self.providers.get(name).cloned()
    }

    #[allow(dead_code)]
    pub fn list(&self) -> Vec<String> {
        self.providers.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::provider::ProviderKind;

    #[test]
    fn test_builtin_entries() {
        let registry = ProviderRegistry::builtin();
        let mut names = registry.list();
        names.sort();
        assert_eq!(names, vec!["cloudflare", "none"]);

        assert_eq!(
            registry.get("cloudflare").unwrap().kind(),
            ProviderKind::Dns
        );
        assert_eq!(
            registry.get("none").unwrap().kind(),
            ProviderKind::Registrar
        );
    }

    #[test]
    fn test_unknown_key_is_absent() {
        let registry = ProviderRegistry::builtin();
        assert!(registry.get("route53").is_none());
    }
}
