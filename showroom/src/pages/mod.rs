pub mod about;
pub mod contact;
pub mod factory;
pub mod home;
pub mod not_found;
pub mod product_detail;
pub mod products;

pub use about::About;
pub use contact::Contact;
pub use factory::Factory;
pub use home::Home;
pub use not_found::NotFound;
pub use product_detail::ProductDetail;
pub use products::Products;
