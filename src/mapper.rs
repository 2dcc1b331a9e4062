//! Maps the parsed zone configuration onto domain declarations.

use crate::core::declare::{Declarator, DomainDecl};
use crate::core::record::Record;
use crate::core::registry::ProviderRegistry;
use crate::error::Error;
use crate::providers::cloudflare;
use crate::zones::ZoneConfig;
use log::debug;

const REGISTRAR: &str = "none";

/// Single pass over `domains`. Provider lookups fail fast, record type
/// tags are validated at construction, and record order within a domain
/// follows the input. Declarations already emitted stay buffered in the
/// declarator; callers render only after the whole pass succeeds.
pub fn map_zones(
    config: &ZoneConfig,
    registry: &ProviderRegistry,
    sink: &mut dyn Declarator,
) -> Result<(), Error> {
    for (domain_name, domain) in &config.domains {
        let provider = registry.get(&domain.provider).ok_or_else(|| {
            Error::UnknownProvider(format!("{} (domain {domain_name})", domain.provider))
        })?;
        let registrar = registry
            .get(REGISTRAR)
            .ok_or_else(|| Error::UnknownProvider(REGISTRAR.to_string()))?;

        let mut records = Vec::with_capacity(domain.records.len());
        for spec in &domain.records {
            let mut modifiers = Vec::new();
            if let Some(modifier) = cloudflare::proxy_modifier(spec.proxied) {
                modifiers.push(modifier);
            }
            records.push(Record::new(
                &spec.record_type,
                &spec.name,
                &spec.target,
                modifiers,
            )?);
        }

        debug!(
            "declaring {domain_name} via {} ({} records)",
            provider.name(),
            records.len()
        );
        sink.declare(DomainDecl {
            name: domain_name.clone(),
            registrar,
            provider,
            records,
        });
    }
    Ok(())
}
