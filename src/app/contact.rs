use std::sync::Arc;

use leptos::prelude::*;

use crate::content;

/// Anchor target for the hero's "Get In Touch" button.
pub const CONTACT_ID: &str = "contact";

#[component]
pub fn Contact(links: Arc<[content::SocialLink]>) -> impl IntoView {
    view! {
        <section id=CONTACT_ID class="py-20 px-4 max-w-4xl mx-auto text-center">
            <h2 class="text-4xl font-bold mb-6 text-gray-800">"Get In Touch"</h2>
            <p class="text-lg text-gray-700 mb-8">
                "Open to collaborations, research discussions, and new opportunities in AI."
            </p>
            <div class="flex gap-4 justify-center flex-wrap">
                {links
                    .iter()
                    .cloned()
                    .map(|link| {
                        view! {
                            <SocialLink href=link.href label=link.label>
                                <i class=link.icon></i>
                            </SocialLink>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

/// Pill-shaped outbound link with an icon in front of the label.
#[component]
pub fn SocialLink(
    #[prop(into)] href: String,
    #[prop(into)] label: String,
    children: Children,
) -> impl IntoView {
    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            class="flex items-center gap-2 px-6 py-3 bg-amber-400 text-gray-900 rounded-full font-semibold hover:bg-amber-300 transition-all transform hover:scale-105 shadow-lg"
        >
            {children()}
            {label}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::render_to_string;

    #[test]
    fn test_social_link() {
        let html = render_to_string(|| {
            view! {
                <SocialLink href="https://github.com/example" label="GitHub">
                    <i class="devicon-github-plain"></i>
                </SocialLink>
            }
        });
        assert!(html.contains(r#"href="https://github.com/example""#));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
        let icon = html.find("devicon-github-plain").expect("icon rendered");
        let label = html.find(">GitHub").expect("label rendered");
        assert!(icon < label);
    }

    #[test]
    fn test_contact_lists_links_in_order() {
        let links = content::content().social;
        let html = render_to_string({
            let links = links.clone();
            move || view! { <Contact links /> }
        });
        assert!(html.contains(r#"id="contact""#));
        assert_eq!(html.matches("<a ").count(), links.len());
        let positions = links
            .iter()
            .map(|l| html.find(&l.href).expect("link rendered"))
            .collect::<Vec<_>>();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
