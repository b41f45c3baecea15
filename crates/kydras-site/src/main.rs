//! Kydras Systems landing site server

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), kydras_site::SiteError> {
    use kydras_site::config::SiteConfig;
    use kydras_site::SiteError;
    use leptos::get_configuration;
    use tracing::info;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let config = SiteConfig::default();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Kydras Systems landing site");

    let conf = get_configuration(None)
        .await
        .map_err(|e| SiteError::Config(e.to_string()))?;

    kydras_site::server::serve(conf.leptos_options, config).await
}

#[cfg(not(feature = "ssr"))]
fn main() {}
