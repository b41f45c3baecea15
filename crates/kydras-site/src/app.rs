//! Main application component

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::brand::DOCUMENT_TITLE;
use crate::pages::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=DOCUMENT_TITLE/>
        <Router>
            <Routes>
                <Route path="/" view=LandingPage/>
            </Routes>
        </Router>
    }
}
