use leptos::{html::Div, prelude::*};

use crate::{
    content::Section,
    motion::{PortraitScene, ScrollRange, SpringConfig},
};

use super::{
    hooks::{use_reveal, use_scroll_animation},
    use_site, SectionTitle,
};

const PORTRAIT_SRC: &str = "/portrait.svg";

/// (label key, value key, glyph)
const INFO_CARDS: [(&str, &str, &str); 4] = [
    ("about.education", "about.educationValue", "🎓"),
    ("about.experienceLabel", "about.experienceValue", "💼"),
    ("about.projectsLabel", "about.projectsValue", "🚀"),
    ("about.location", "about.locationValue", "📍"),
];

#[component]
pub fn About() -> impl IntoView {
    let site = use_site();
    let content_ref = NodeRef::<Div>::new();
    let revealed = use_reveal(content_ref);

    let cards = INFO_CARDS
        .iter()
        .map(|&(label, value, glyph)| {
            view! {
                <div class="glass glow-border rounded-2xl p-5 transition-transform hover:-translate-y-1">
                    <div class="mb-2 text-2xl">{glyph}</div>
                    <div class="text-sm text-slate-500 dark:text-gray-400">{move || site.tr(label)}</div>
                    <div class="font-semibold">{move || site.tr(value)}</div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id=Section::About.id() class="relative px-4 py-24">
            <div class="mx-auto max-w-6xl">
                <SectionTitle title="about.title" />
                <div
                    node_ref=content_ref
                    class="reveal grid items-center gap-16 lg:grid-cols-2"
                    class:is-visible=move || revealed.get()
                >
                    <Portrait />
                    <div class="space-y-6">
                        <p class="text-lg leading-relaxed text-slate-700 dark:text-gray-300">
                            {move || site.tr("about.paragraph1")}
                        </p>
                        <p class="text-lg leading-relaxed text-slate-700 dark:text-gray-300">
                            {move || site.tr("about.paragraph2")}
                        </p>
                        <div class="grid grid-cols-2 gap-4 pt-4">{cards}</div>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// The scroll-linked portrait: accents, glow and framed image each take their
/// style from the same smoothed progress.
#[component]
fn Portrait() -> impl IntoView {
    let site = use_site();
    let node = NodeRef::<Div>::new();
    let style = use_scroll_animation(
        node,
        ScrollRange::entering_to_center(),
        SpringConfig::default(),
        PortraitScene::new(site.config().motion),
    );

    view! {
        <div node_ref=node class="relative mx-auto w-full max-w-sm [perspective:1200px]">
            <div
                class="absolute -right-6 -top-6 h-24 w-24 rounded-full bg-cyan-400/40"
                style=move || style.with(|s| s.accent_primary.to_css())
            ></div>
            <div
                class="absolute -bottom-8 -left-8 h-32 w-32 rounded-full bg-purple-500/40"
                style=move || style.with(|s| s.accent_secondary.to_css())
            ></div>
            <div
                class="relative [transform-style:preserve-3d] will-change-transform"
                style=move || style.with(|s| s.portrait.to_css())
            >
                <div
                    class="absolute inset-0 rounded-3xl bg-gradient-to-br from-cyan-500 to-purple-600"
                    style=move || style.with(|s| s.glow.to_css())
                ></div>
                <div
                    class="relative aspect-[4/5] overflow-hidden rounded-3xl bg-slate-200 dark:bg-slate-800"
                    style=move || style.with(|s| s.frame.to_css())
                >
                    <img
                        src=PORTRAIT_SRC
                        alt=move || site.tr("about.portraitAlt")
                        class="h-full w-full object-cover"
                        loading="lazy"
                    />
                </div>
            </div>
        </div>
    }
}
