use leptos::prelude::*;

use crate::clock::SiteClock;

pub fn copyright_notice(year: i32) -> String {
    format!("© {year} Tuan Quang. Built with Rust, Leptos & Tailwind CSS.")
}

/// Reads the year from the [`SiteClock`] in context on every render, so a page rendered
/// in a later year shows that year without a rebuild.
#[component]
pub fn Footer() -> impl IntoView {
    let year = use_context::<SiteClock>().unwrap_or_default().current_year();
    view! {
        <footer class="py-8 px-4 bg-gray-900 text-gray-300 text-center">
            <p>{copyright_notice(year)}</p>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::render_to_string;

    fn footer_at(year: i32) -> String {
        render_to_string(move || {
            provide_context(SiteClock::fixed_year(year).expect("valid year"));
            view! { <Footer /> }
        })
    }

    #[test]
    fn test_footer_year_follows_clock() {
        let early = footer_at(2024);
        let late = footer_at(2031);
        assert!(early.contains("© 2024 Tuan Quang."));
        assert!(late.contains("© 2031 Tuan Quang."));
        assert!(!late.contains("2024"));
    }

    #[test]
    fn test_footer_without_clock_uses_system_time() {
        let year = SiteClock::default().current_year();
        let html = render_to_string(|| view! { <Footer /> });
        assert!(html.contains(&format!("© {year} ")));
    }

    #[test]
    fn test_copyright_notice() {
        assert_eq!(
            copyright_notice(2025),
            "© 2025 Tuan Quang. Built with Rust, Leptos & Tailwind CSS."
        );
    }
}
