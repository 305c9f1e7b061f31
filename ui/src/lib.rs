//! Shared UI crate for the Ulfa Crochet site. State, validation, content and every view
//! live here; the platform crates only launch [`views::Site`].

pub mod contact;
pub mod content;
pub mod core;
pub mod i18n;
pub mod sections;
pub mod views;

pub mod components {
    // Page header with navigation, language picker and theme toggle (components/header.rs)
    mod header;
    pub use header::Header;

    mod product_card;
    pub use product_card::ProductCard;

    mod feature_card;
    pub use feature_card::{FeatureCard, HighlightTile};
}
