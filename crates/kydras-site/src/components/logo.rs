//! Brand logo image component

use leptos::*;
use leptos_meta::Link;

use crate::brand::ImageAsset;

/// Renders a fixed-size image.
///
/// With `priority` set the image is fetched eagerly at high priority and a
/// preload hint is pushed into the document head, so the browser starts the
/// download before it reaches the `<img>` tag. Without it the image loads
/// lazily.
#[component]
pub fn BrandLogo(
    asset: ImageAsset,
    #[prop(optional)] priority: bool,
    #[prop(optional)] style: Option<&'static str>,
) -> impl IntoView {
    let loading = if priority { "eager" } else { "lazy" };

    view! {
        {priority.then(|| view! { <Link rel="preload" href=asset.src as_="image"/> })}
        <img
            src=asset.src
            alt=asset.alt
            width=asset.width.to_string()
            height=asset.height.to_string()
            loading=loading
            fetchpriority=priority.then_some("high")
            decoding="async"
            style=style
        />
    }
}
