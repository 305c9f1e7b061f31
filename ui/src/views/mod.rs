mod site;
pub use site::{use_site, use_site_provider, Site, SiteHandle};

mod splash;
pub use splash::Splash;
