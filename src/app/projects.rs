use std::sync::Arc;

use leptos::prelude::*;

use crate::content::{Project, Tag};
use crate::style::{resolve_style, with_style, StyleContext};

/// Anchor target for the hero's "View My Work" button.
pub const PROJECTS_ID: &str = "projects";

const PILL_CLASS: &str = "px-3 py-1 rounded-full text-sm";

#[component]
pub fn Projects(projects: Arc<[Project]>) -> impl IntoView {
    view! {
        <section id=PROJECTS_ID class="py-20 px-4 bg-gray-100">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-4xl font-bold text-center mb-12 text-gray-800">
                    "Featured Projects"
                </h2>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {projects
                        .iter()
                        .cloned()
                        .map(|project| view! { <ProjectCard project /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let band_class = with_style("h-48", &project.gradient);
    let demo_href = project.demo_href().to_string();
    let github_href = project.github_href().to_string();
    let Project {
        title,
        description,
        tags,
        ..
    } = project;

    view! {
        <div class="bg-white rounded-lg overflow-hidden shadow-lg hover:shadow-2xl transition-all transform hover:-translate-y-2">
            <div class=band_class></div>
            <div class="p-6">
                <h3 class="text-xl font-bold mb-2">{title}</h3>
                <p class="text-gray-600 mb-4">{description}</p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {tags.into_iter().map(|tag| view! { <TagPill tag /> }).collect_view()}
                </div>
                <div class="flex gap-4">
                    <a
                        href=demo_href
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-teal-600 hover:text-teal-800 font-semibold"
                    >
                        "Live Demo →"
                    </a>
                    <a
                        href=github_href
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-gray-600 hover:text-gray-800 font-semibold"
                    >
                        "GitHub →"
                    </a>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn TagPill(tag: Tag) -> impl IntoView {
    let class = with_style(PILL_CLASS, resolve_style(&tag.color, StyleContext::TagPill));
    view! { <span class=class>{tag.name}</span> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::render_to_string;
    use crate::content::PLACEHOLDER_HREF;

    fn project(tags: Vec<Tag>, demo_link: Option<&str>, github_link: Option<&str>) -> Project {
        Project {
            title: "X".to_string(),
            description: "Something built".to_string(),
            tags,
            gradient: "bg-gradient-to-br from-amber-400 to-orange-500".to_string(),
            demo_link: demo_link.map(str::to_string),
            github_link: github_link.map(str::to_string),
        }
    }

    fn tag(name: &str, color: &str) -> Tag {
        Tag {
            name: name.to_string(),
            color: color.to_string(),
        }
    }

    #[test]
    fn test_unknown_tag_color_and_missing_demo() {
        let card = project(
            vec![tag("Y", "unknown")],
            None,
            Some("https://github.com/example/x"),
        );
        let html = render_to_string(move || view! { <ProjectCard project=card /> });
        assert!(html.contains(&format!(r#"<span class="{PILL_CLASS}">Y</span>"#)));
        assert!(html.contains(&format!(r#"href="{PLACEHOLDER_HREF}""#)));
        assert!(html.contains(r#"href="https://github.com/example/x""#));
        assert!(!html.contains(r#"href="""#));
    }

    #[test]
    fn test_both_links_default_to_placeholder() {
        let card = project(vec![], None, None);
        let html = render_to_string(move || view! { <ProjectCard project=card /> });
        assert_eq!(html.matches(r##"href="#""##).count(), 2);
        assert!(html.contains("Live Demo →"));
        assert!(html.contains("GitHub →"));
    }

    #[test]
    fn test_tags_in_order_with_styles() {
        let card = project(
            vec![tag("PyTorch", "amber"), tag("OpenCV", "orange"), tag("YOLO", "lime")],
            Some("https://demo.example.com"),
            None,
        );
        let html = render_to_string(move || view! { <ProjectCard project=card /> });
        assert_eq!(html.matches(PILL_CLASS).count(), 3);
        assert_eq!(html.matches("<a ").count(), 2);
        let pytorch = html
            .find(r#"bg-amber-100 text-amber-700">PyTorch</span>"#)
            .expect("PyTorch pill");
        let opencv = html
            .find(r#"bg-orange-100 text-orange-700">OpenCV</span>"#)
            .expect("OpenCV pill");
        let yolo = html
            .find(r#"bg-lime-100 text-lime-700">YOLO</span>"#)
            .expect("YOLO pill");
        assert!(pytorch < opencv && opencv < yolo);
        assert!(html.contains(r#"class="h-48 bg-gradient-to-br from-amber-400 to-orange-500""#));
        assert!(html.contains(r#"target="_blank""#));
    }

    #[test]
    fn test_project_card_idempotent() {
        let card = project(vec![tag("BERT", "emerald")], None, None);
        let first = render_to_string({
            let card = card.clone();
            move || view! { <ProjectCard project=card /> }
        });
        let second = render_to_string(move || view! { <ProjectCard project=card /> });
        assert_eq!(first, second);
    }

    #[test]
    fn test_projects_section_covers_table() {
        let table = crate::content::content().projects;
        let pills = table.iter().map(|p| p.tags.len()).sum::<usize>();
        let html = render_to_string({
            let table = table.clone();
            move || view! { <Projects projects=table /> }
        });
        assert!(html.contains(r#"id="projects""#));
        assert_eq!(html.matches(PILL_CLASS).count(), pills);
        assert_eq!(html.matches("<a ").count(), table.len() * 2);
    }
}
