use leptos::{html::Div, prelude::*};

use crate::content::{Project, Section, PROJECTS};

use super::{hooks::use_reveal, use_site, SectionTitle};

#[component]
pub fn Projects() -> impl IntoView {
    let grid_ref = NodeRef::<Div>::new();
    let revealed = use_reveal(grid_ref);

    let cards = PROJECTS
        .iter()
        .enumerate()
        .map(|(i, project)| view! { <ProjectCard project=*project index=i /> })
        .collect_view();

    view! {
        <section id=Section::Projects.id() class="relative px-4 py-24">
            <div class="mx-auto max-w-6xl">
                <SectionTitle title="projects.title" subtitle="projects.subtitle" />
                <div
                    node_ref=grid_ref
                    class="reveal grid gap-8 md:grid-cols-2 lg:grid-cols-3"
                    class:is-visible=move || revealed.get()
                >
                    {cards}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project, index: usize) -> impl IntoView {
    let site = use_site();
    let title = project.title_key();
    let description = project.description_key();

    let technologies = project
        .technologies
        .iter()
        .map(|tech| {
            view! {
                <span class="rounded-full bg-purple-500/10 px-3 py-1 text-xs font-medium text-purple-600 dark:text-purple-300">
                    {*tech}
                </span>
            }
        })
        .collect_view();

    let link = move |href: &'static str, label_key: &'static str, action: &'static str| {
        view! {
            <a
                href=href
                target="_blank"
                rel="noopener noreferrer"
                class="text-sm font-medium text-cyan-600 transition-colors hover:text-purple-500 dark:text-cyan-400"
                on:click=move |_| site.analytics().event("Projects", action, Some(project.id))
            >
                {move || site.tr(label_key)}
                " →"
            </a>
        }
    };

    view! {
        <article
            class="glass glow-border group flex flex-col overflow-hidden rounded-3xl transition-transform duration-300 hover:-translate-y-2"
            style=format!("transition-delay: {}ms;", index * 100)
        >
            <div class=format!(
                "flex h-40 items-center justify-center bg-gradient-to-br text-6xl {}",
                project.gradient,
            )>
                <span class="transition-transform duration-300 group-hover:scale-125">
                    {project.icon}
                </span>
            </div>
            <div class="flex flex-1 flex-col p-6">
                <h3 class="mb-2 text-xl font-semibold">{move || site.tr(&title)}</h3>
                <p class="mb-4 flex-1 text-sm text-slate-600 dark:text-gray-400">
                    {move || site.tr(&description)}
                </p>
                <div class="mb-4 flex flex-wrap gap-2">{technologies}</div>
                <div class="flex gap-4">
                    {project.code_url.map(|href| link(href, "projects.viewCode", "view_code"))}
                    {project.demo_url.map(|href| link(href, "projects.viewDemo", "view_demo"))}
                </div>
            </div>
        </article>
    }
}
