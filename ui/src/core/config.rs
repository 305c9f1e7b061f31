//! Site configuration. Embedded with the content document; every field has a compiled-in
//! default so partial documents still produce a complete configuration.

use serde::Deserialize;

/// Delay before the splash gives way to the full page.
pub const DEFAULT_SPLASH_MS: u64 = 2_000;
/// How long the "message sent" acknowledgement stays visible.
pub const DEFAULT_ACK_MS: u64 = 3_000;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub brand: String,
    pub splash_ms: u64,
    pub ack_ms: u64,
    pub contacts: Contacts,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "Ulfa Crochet".to_string(),
            splash_ms: DEFAULT_SPLASH_MS,
            ack_ms: DEFAULT_ACK_MS,
            contacts: Contacts::default(),
        }
    }
}

/// Outbound contact points. `whatsapp_number` is digits only (the `wa.me` path format);
/// `whatsapp_display` is the human formatted variant shown on the page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Contacts {
    pub whatsapp_number: String,
    pub whatsapp_display: String,
    pub instagram_handle: String,
    pub email: String,
}

impl Default for Contacts {
    fn default() -> Self {
        Self {
            whatsapp_number: "201147825907".to_string(),
            whatsapp_display: "+20 114 782 5907".to_string(),
            instagram_handle: "__ulfa99__".to_string(),
            email: "info@ulfa.com".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_document_keeps_defaults() {
        let cfg: SiteConfig = serde_json::from_str(r#"{ "splash_ms": 500 }"#).unwrap();
        assert_eq!(cfg.splash_ms, 500);
        assert_eq!(cfg.ack_ms, DEFAULT_ACK_MS);
        assert_eq!(cfg.contacts, Contacts::default());
    }

    #[test]
    fn partial_contacts_keep_defaults() {
        let cfg: SiteConfig =
            serde_json::from_str(r#"{ "contacts": { "instagram_handle": "someone" } }"#).unwrap();
        assert_eq!(cfg.contacts.instagram_handle, "someone");
        assert_eq!(cfg.contacts.whatsapp_number, "201147825907");
    }
}
