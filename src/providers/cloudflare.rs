//! Cloudflare provider handle and its proxy-toggle policy.

use crate::core::provider::{Provider, ProviderKind};
use crate::core::record::RecordModifier;

pub struct Cloudflare;

impl Provider for Cloudflare {
    fn name(&self) -> &str {
        "cloudflare"
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Dns
    }
}

/// Three-way policy: only the two boolean states carry a modifier,
/// everything else is a no-op.
pub fn proxy_modifier(proxied: Option<bool>) -> Option<RecordModifier> {
    match proxied {
        Some(true) => Some(RecordModifier::CloudflareProxyOn),
        Some(false) => Some(RecordModifier::CloudflareProxyOff),
        None => None,
    }
}
