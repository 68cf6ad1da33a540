use leptos::{ev::MouseEvent, html::Div, prelude::*};

use crate::{
    content::{Section, Skill, SkillCategory, SKILL_CATEGORIES},
    motion::tilt::{tilt, tilt_css},
};

use super::{hooks::use_reveal, use_site, SectionTitle};

#[component]
pub fn Skills() -> impl IntoView {
    let grid_ref = NodeRef::<Div>::new();
    let revealed = use_reveal(grid_ref);

    let categories = SKILL_CATEGORIES
        .iter()
        .enumerate()
        .map(|(i, category)| view! { <CategoryCard category=*category index=i /> })
        .collect_view();

    view! {
        <section id=Section::Skills.id() class="relative px-4 py-24">
            <div class="mx-auto max-w-6xl">
                <SectionTitle title="skills.title" subtitle="skills.subtitle" />
                <div
                    node_ref=grid_ref
                    class="reveal grid gap-8 md:grid-cols-2"
                    class:is-visible=move || revealed.get()
                >
                    {categories}
                </div>
            </div>
        </section>
    }
}

#[component]
fn CategoryCard(category: SkillCategory, index: usize) -> impl IntoView {
    let site = use_site();
    let skills = category
        .skills
        .iter()
        .map(|skill| view! { <SkillTile skill=*skill /> })
        .collect_view();

    view! {
        <div
            class="glass glow-border rounded-3xl p-6"
            style=format!("transition-delay: {}ms;", index * 100)
        >
            <h3 class="mb-6 text-xl font-semibold">
                <span class="gradient-text">{move || site.tr(category.title_key)}</span>
            </h3>
            <div class="grid grid-cols-2 gap-4">{skills}</div>
        </div>
    }
}

/// A skill tile that leans toward the pointer.
#[component]
fn SkillTile(skill: Skill) -> impl IntoView {
    let node = NodeRef::<Div>::new();
    let angles = RwSignal::new((0.0, 0.0));

    let on_move = move |ev: MouseEvent| {
        let Some(el) = node.get_untracked() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        angles.set(tilt(
            rect.width(),
            rect.height(),
            ev.client_x() as f64 - rect.left(),
            ev.client_y() as f64 - rect.top(),
        ));
    };

    view! {
        <div
            node_ref=node
            class="shine-effect flex flex-col items-center gap-2 rounded-2xl bg-white/60 p-4 transition-transform duration-200 ease-out dark:bg-white/5"
            style=move || {
                let (rotate_x, rotate_y) = angles.get();
                tilt_css(rotate_x, rotate_y)
            }
            on:mousemove=on_move
            on:mouseleave=move |_| angles.set((0.0, 0.0))
        >
            <i class=format!("{} {} text-4xl", skill.icon, skill.color) aria-hidden="true"></i>
            <span class="text-sm font-medium">{skill.name}</span>
        </div>
    }
}
