//! Landing site components

mod logo;

pub use logo::BrandLogo;
