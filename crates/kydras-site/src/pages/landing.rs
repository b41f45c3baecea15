//! Landing page

use leptos::*;

use crate::brand::{COMPANY_NAME, LOGO, PALETTE, TAGLINE};
use crate::components::*;

const LOGO_STYLE: &str = "margin-bottom: 24px";
const TITLE_STYLE: &str = "font-size: 3rem; margin-bottom: 8px; letter-spacing: 0.12em";
const TAGLINE_STYLE: &str = "font-size: 1.4rem; font-weight: 300; opacity: 0.9";

fn root_style() -> String {
    format!(
        "background: {}; color: {}; min-height: 100vh; display: flex; \
         flex-direction: column; align-items: center; justify-content: center; \
         text-align: center; padding: 40px",
        PALETTE.background, PALETTE.foreground,
    )
}

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <main style=root_style()>
            <BrandLogo asset=LOGO priority=true style=LOGO_STYLE/>
            <h1 style=TITLE_STYLE>{COMPANY_NAME}</h1>
            <h2 style=TAGLINE_STYLE>{TAGLINE}</h2>
        </main>
    }
}
