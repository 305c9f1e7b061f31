//! Outbound links: product share deep links and the shop's contact profiles.

use crate::content::Product;

use super::config::{Contacts, SiteConfig};
use super::platform::{self, PlatformError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharePlatform {
    WhatsApp,
    Instagram,
}

/// Pre-filled order text sent through WhatsApp.
pub fn order_message(brand: &str, product_title: &str) -> String {
    format!("I'm interested in ordering {product_title} from {brand}! (via WhatsApp)")
}

pub fn whatsapp_chat_url(contacts: &Contacts) -> String {
    format!("https://wa.me/{}", contacts.whatsapp_number)
}

pub fn instagram_profile_url(contacts: &Contacts) -> String {
    format!("https://instagram.com/{}/", contacts.instagram_handle)
}

/// Destination for a product's share control. Instagram ignores the product and points
/// at the shop profile.
pub fn share_url(product: &Product, target: SharePlatform, config: &SiteConfig) -> String {
    match target {
        SharePlatform::WhatsApp => {
            let message = order_message(&config.brand, &product.title);
            format!(
                "{}?text={}",
                whatsapp_chat_url(&config.contacts),
                urlencoding::encode(&message)
            )
        }
        SharePlatform::Instagram => instagram_profile_url(&config.contacts),
    }
}

/// Build the destination and open it in a new browsing context. Returns the URL opened.
pub fn dispatch(
    product: &Product,
    target: SharePlatform,
    config: &SiteConfig,
) -> Result<String, PlatformError> {
    let url = share_url(product, target, config);
    tracing::debug!(?target, product = %product.title, %url, "opening share link");
    platform::open_external(&url)?;
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turtle() -> Product {
        Product {
            image: "products/turtle.jpg".to_string(),
            title: "amigurumi pet turtle".to_string(),
            description: "Slow and steady wins hearts!".to_string(),
        }
    }

    #[test]
    fn whatsapp_link_carries_encoded_title() {
        let config = SiteConfig::default();
        let url = share_url(&turtle(), SharePlatform::WhatsApp, &config);

        assert!(url.starts_with("https://wa.me/201147825907?text="));
        assert!(url.contains(&*urlencoding::encode("amigurumi pet turtle")));
        assert!(url.contains("amigurumi%20pet%20turtle"));
        assert!(!url.contains(' '));
    }

    #[test]
    fn whatsapp_text_decodes_to_order_message() {
        let config = SiteConfig::default();
        let url = share_url(&turtle(), SharePlatform::WhatsApp, &config);
        let (_, encoded) = url.split_once("?text=").unwrap();
        let decoded = urlencoding::decode(encoded).unwrap();
        assert_eq!(
            decoded,
            "I'm interested in ordering amigurumi pet turtle from Ulfa Crochet! (via WhatsApp)"
        );
    }

    #[test]
    fn instagram_ignores_product() {
        let config = SiteConfig::default();
        let mut other = turtle();
        other.title = "Crochet Cardigan".to_string();

        let a = share_url(&turtle(), SharePlatform::Instagram, &config);
        let b = share_url(&other, SharePlatform::Instagram, &config);
        assert_eq!(a, b);
        assert_eq!(a, "https://instagram.com/__ulfa99__/");
    }

    #[test]
    fn chat_link_has_no_text() {
        assert_eq!(
            whatsapp_chat_url(&Contacts::default()),
            "https://wa.me/201147825907"
        );
    }
}
