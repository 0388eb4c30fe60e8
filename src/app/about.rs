use std::sync::Arc;

use leptos::prelude::*;

use crate::content::SkillGroup;
use crate::style::{resolve_style, with_style, StyleContext};

#[component]
pub fn About(skills: Arc<[SkillGroup]>) -> impl IntoView {
    view! {
        <section class="py-20 px-4 max-w-6xl mx-auto">
            <h2 class="text-4xl font-bold text-center mb-12 text-gray-800">"About Me"</h2>
            <div class="grid md:grid-cols-2 gap-12 items-center">
                <div>
                    <p class="text-lg text-gray-700 mb-4">
                        "I'm a passionate AI Engineer specializing in machine learning, deep learning, and natural language processing. "
                        "I transform complex data into intelligent solutions that drive real-world impact."
                    </p>
                    <p class="text-lg text-gray-700">
                        "When I'm not training models, you can find me researching the latest AI papers, contributing to open-source ML projects, "
                        "or sharing insights about AI/ML with the tech community."
                    </p>
                </div>
                <div class="grid grid-cols-2 gap-4">
                    {skills
                        .iter()
                        .cloned()
                        .map(|group| {
                            view! {
                                <SkillCard
                                    title=group.title
                                    skills=group.skills
                                    color=group.color
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// One skill group: a colored heading over the skills in the order given.
#[component]
pub fn SkillCard(
    #[prop(into)] title: String,
    skills: Vec<String>,
    #[prop(into)] color: String,
) -> impl IntoView {
    let title_class = with_style(
        "font-bold text-xl mb-2",
        resolve_style(&color, StyleContext::SkillTitle),
    );
    view! {
        <div class="bg-white p-6 rounded-lg shadow-lg hover:shadow-xl transition-shadow">
            <h3 class=title_class>{title}</h3>
            <ul class="text-gray-700 space-y-1">
                {skills.into_iter().map(|skill| view! { <li>{skill}</li> }).collect_view()}
            </ul>
        </div>
    }
}
