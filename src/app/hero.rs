use leptos::prelude::*;

use super::{CONTACT_ID, PROJECTS_ID};

// (position and size classes, animation delay)
const SHAPES: [(&str, &str); 5] = [
    ("top-10 left-10 w-72 h-72 bg-cyan-300/30", "animation-delay: 0s"),
    ("top-1/3 right-16 w-96 h-96 bg-teal-300/20", "animation-delay: 2s"),
    ("bottom-20 left-1/4 w-64 h-64 bg-emerald-300/30", "animation-delay: 4s"),
    ("bottom-1/3 right-1/3 w-48 h-48 bg-amber-200/20", "animation-delay: 1s"),
    ("top-1/2 left-1/2 w-40 h-40 bg-white/10", "animation-delay: 3s"),
];

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="relative h-screen flex items-center justify-center bg-gradient-to-br from-cyan-500 via-teal-600 to-emerald-600 overflow-hidden">
            <AnimatedBackground />
            <div class="absolute inset-0 bg-black/10"></div>
            <div class="relative z-10 text-center text-white px-4 max-w-4xl mx-auto">
                <h1 class="text-5xl md:text-7xl font-bold mb-6 animate-fade-in">
                    "Hi, I'm " <span class="text-amber-300">"Tuan Quang"</span>
                </h1>
                <p class="text-xl md:text-2xl mb-8 text-gray-50">
                    "AI Engineer | Building Intelligent Systems with Machine Learning"
                </p>
                <div class="flex gap-4 justify-center flex-wrap">
                    <a
                        href=format!("#{PROJECTS_ID}")
                        class="px-8 py-3 bg-amber-400 text-gray-900 font-semibold rounded-full hover:bg-amber-300 transition-all transform hover:scale-105 shadow-lg"
                    >
                        "View My Work"
                    </a>
                    <a
                        href=format!("#{CONTACT_ID}")
                        class="px-8 py-3 border-2 border-white text-white font-semibold rounded-full hover:bg-white hover:text-teal-600 transition-all transform hover:scale-105"
                    >
                        "Get In Touch"
                    </a>
                </div>
            </div>
            <div class="absolute bottom-10 left-1/2 transform -translate-x-1/2 animate-bounce">
                <svg
                    class="w-6 h-6 text-white"
                    fill="none"
                    stroke="currentColor"
                    viewBox="0 0 24 24"
                >
                    <path
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        stroke-width="2"
                        d="M19 14l-7 7m0 0l-7-7m7 7V3"
                    />
                </svg>
            </div>
        </section>
    }
}

/// Slow-drifting blurred shapes behind the hero text. Motion comes from the `float`
/// keyframes in `input.css`.
#[component]
pub fn AnimatedBackground() -> impl IntoView {
    view! {
        <div class="absolute inset-0 pointer-events-none" aria-hidden="true">
            {SHAPES
                .iter()
                .map(|(shape, delay)| {
                    let class = format!("absolute rounded-full blur-3xl animate-float {shape}");
                    view! { <div class=class style=*delay></div> }
                })
                .collect_view()}
        </div>
    }
}
