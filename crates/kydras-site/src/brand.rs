//! Static brand data shared by the landing page components.

/// A static image served from the site's public directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageAsset {
    /// Absolute URL path the browser requests
    pub src: &'static str,
    pub alt: &'static str,
    pub width: u32,
    pub height: u32,
}

impl ImageAsset {
    /// File name relative to the public directory.
    pub fn file_name(&self) -> &'static str {
        self.src.trim_start_matches('/')
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub foreground: &'static str,
}

pub const COMPANY_NAME: &str = "KYDRAS SYSTEMS INC.";
pub const TAGLINE: &str = "NOTHING IS OFF LIMITS";
pub const DOCUMENT_TITLE: &str = "Kydras Systems Inc.";

pub const LOGO: ImageAsset = ImageAsset {
    src: "/kydras-logo.png",
    alt: "Kydras Systems Logo",
    width: 320,
    height: 320,
};

pub const PALETTE: Palette = Palette {
    background: "#0a0a0f",
    foreground: "#d4af37",
};
