//! Page sections, top to bottom.

mod hero;
pub use hero::Hero;

mod makers;
pub use makers::Makers;

mod products;
pub use products::Products;

mod contact;
pub use contact::Contact;

mod footer;
pub use footer::Footer;
