mod about;
mod contact;
mod footer;
mod hero;
mod projects;

pub use about::{About, SkillCard};
pub use contact::{Contact, SocialLink, CONTACT_ID};
pub use footer::{copyright_notice, Footer};
pub use hero::{AnimatedBackground, Hero};
pub use projects::{ProjectCard, Projects, TagPill, PROJECTS_ID};

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::clock::SiteClock;
use crate::config::SiteConfig;
use crate::content::{content, Content};

const BODY_CLASS: &str = "bg-gray-50 text-gray-900 antialiased";

/// Stylesheet cargo-leptos builds into `<site-root>/pkg`.
pub const STYLESHEET_HREF: &str = "/pkg/portfolio-site.css";
pub const FAVICON_HREF: &str = "/favicon.svg";

/// Shell for the dev server. The server always mounts at the root, the same place
/// `HydrationScripts` loads the wasm bundle from, so no path prefix is applied here.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <AssetLinks config=SiteConfig::default() />
                <MetaTags />
            </head>
            <body class=BODY_CLASS>
                <App />
            </body>
        </html>
    }
}

/// Standalone document for the static export. Metadata goes straight into `<head>` since
/// there is no server to inject it.
#[component]
pub fn StaticShell(content: Content, config: SiteConfig) -> impl IntoView {
    let meta = content.meta.clone();
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{meta.title}</title>
                <meta name="description" content=meta.description />
                <AssetLinks config />
            </head>
            <body class=BODY_CLASS>
                <HomePage content />
            </body>
        </html>
    }
}

/// Favicon and stylesheet links, prefixed with the configured base path.
#[component]
pub fn AssetLinks(config: SiteConfig) -> impl IntoView {
    view! {
        <link rel="icon" type="image/svg+xml" href=config.href(FAVICON_HREF) />
        <link rel="stylesheet" id="leptos" href=config.href(STYLESHEET_HREF) />
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(SiteClock::default());

    let content = content();
    let meta = content.meta.clone();

    view! {
        <Title text=meta.title />
        <Meta name="description" content=meta.description />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=path!("/")
                    view=move || view! { <HomePage content=content.clone() /> }
                />
            </Routes>
        </Router>
    }
}

/// The whole portfolio, top to bottom.
#[component]
pub fn HomePage(content: Content) -> impl IntoView {
    view! {
        <Hero />
        <About skills=content.skills.clone() />
        <Projects projects=content.projects.clone() />
        <Contact links=content.social.clone() />
        <Footer />
    }
}

#[cfg(test)]
pub(crate) fn render_to_string<F, V>(f: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    let owner = Owner::new();
    owner.with(|| f().to_html())
}
