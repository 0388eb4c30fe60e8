use std::path::PathBuf;

use portfolio_site::{
    clock::SiteClock,
    config::SiteConfig,
    content::content,
    export::{render_page, write_site, DEFAULT_EXPORT_DIR, DEFAULT_SITE_ROOT},
    logging::init_logger,
};

fn main() {
    init_logger();

    let config = SiteConfig::from_env();
    let out_dir = std::env::var("EXPORT_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_EXPORT_DIR));
    let site_root = std::env::var("LEPTOS_SITE_ROOT")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_SITE_ROOT));

    let html = render_page(&content(), &config, SiteClock::default());
    let summary =
        write_site(&out_dir, &site_root, &html).expect("Should be able to write static site");

    tracing::info!(
        dir = %out_dir.display(),
        files = summary.files.len(),
        base_path = config.base_path.as_deref().unwrap_or("/"),
        "exported static site"
    );
}
