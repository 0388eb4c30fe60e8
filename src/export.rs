use std::{
    fs, io,
    path::{Path, PathBuf},
};

use leptos::prelude::*;
use rust_embed::Embed;
use thiserror::Error;

use crate::app::{StaticShell, STYLESHEET_HREF};
use crate::clock::SiteClock;
use crate::config::SiteConfig;
use crate::content::Content;

/// Directory the export binary writes to when `EXPORT_DIR` isn't set.
pub const DEFAULT_EXPORT_DIR: &str = "out";
/// cargo-leptos output directory, used when `LEPTOS_SITE_ROOT` isn't set.
pub const DEFAULT_SITE_ROOT: &str = "target/site";

#[derive(Embed)]
#[folder = "public"]
pub struct PublicAssets;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("couldn't create directory {}: {source}", .path.display())]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("couldn't write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("stylesheet {} not found, run `cargo leptos build` first", .path.display())]
    MissingStylesheet { path: PathBuf },
    #[error("couldn't read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
}

#[derive(Debug, Default)]
pub struct ExportSummary {
    pub files: Vec<PathBuf>,
}

/// Render the full page as a standalone HTML document.
pub fn render_page(content: &Content, config: &SiteConfig, clock: SiteClock) -> String {
    let content = content.clone();
    let config = config.clone();
    let owner = Owner::new();
    owner.with(move || {
        provide_context(clock);
        view! { <StaticShell content config /> }.to_html()
    })
}

/// Write `index.html`, the stylesheet built under `site_root` and the embedded `public/`
/// assets into `out_dir`.
pub fn write_site(
    out_dir: &Path,
    site_root: &Path,
    html: &str,
) -> Result<ExportSummary, ExportError> {
    let stylesheet = site_root.join(site_relative(STYLESHEET_HREF));
    if !stylesheet.is_file() {
        return Err(ExportError::MissingStylesheet { path: stylesheet });
    }

    let mut summary = ExportSummary::default();
    create_dir(out_dir)?;

    let index = out_dir.join("index.html");
    write_file(&index, html.as_bytes())?;
    summary.files.push(index);

    for name in PublicAssets::iter() {
        let Some(asset) = PublicAssets::get(&name) else {
            continue;
        };
        let path = out_dir.join(&*name);
        if let Some(parent) = path.parent() {
            create_dir(parent)?;
        }
        write_file(&path, &asset.data)?;
        summary.files.push(path);
    }

    let css = fs::read(&stylesheet).map_err(|source| ExportError::Read {
        path: stylesheet.clone(),
        source,
    })?;
    let path = out_dir.join(site_relative(STYLESHEET_HREF));
    if let Some(parent) = path.parent() {
        create_dir(parent)?;
    }
    write_file(&path, &css)?;
    summary.files.push(path);

    Ok(summary)
}

fn site_relative(href: &str) -> &str {
    href.trim_start_matches('/')
}

fn create_dir(path: &Path) -> Result<(), ExportError> {
    fs::create_dir_all(path).map_err(|source| ExportError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, data: &[u8]) -> Result<(), ExportError> {
    fs::write(path, data).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = data.len(), "wrote file");
    Ok(())
}
