use tragos::app::App;
use tragos::storage::settings::load_settings;
use tracing_subscriber::EnvFilter;

fn main() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let settings = load_settings();
    tracing::info!("Starting {}", settings.window_title);

    let window = dioxus::desktop::WindowBuilder::new().with_title(settings.window_title);
    dioxus::LaunchBuilder::desktop()
        .with_cfg(dioxus::desktop::Config::new().with_window(window))
        .launch(App);
}
