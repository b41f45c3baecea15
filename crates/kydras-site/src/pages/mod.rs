//! Landing site pages

mod landing;

pub use landing::LandingPage;
