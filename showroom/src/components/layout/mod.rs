pub mod site_chrome;

pub use site_chrome::SiteChrome;
