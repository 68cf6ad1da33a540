use leptos::{either::Either, ev::MouseEvent, prelude::*};

use crate::content::{hero_particles, Section, SocialLink, HERO_LINKS};

use super::{scroll_to_section, use_site};

/// Inline delay for the staggered entrance, in steps of 0.15s.
fn stagger(step: u32) -> String {
    format!("animation-delay: {}ms;", step * 150)
}

#[component]
pub fn Hero() -> impl IntoView {
    let site = use_site();

    let cta = move |section: Section, action: &'static str| {
        move |_: MouseEvent| {
            scroll_to_section(section);
            site.analytics().event("Hero", "click", Some(action));
        }
    };

    let particles = hero_particles()
        .map(|p| {
            view! {
                <span
                    class="absolute h-1.5 w-1.5 rounded-full bg-cyan-400/60 animate-particle"
                    style=p.to_css()
                ></span>
            }
        })
        .collect_view();

    let links = HERO_LINKS
        .iter()
        .enumerate()
        .map(|(i, link)| {
            view! {
                <a
                    href=link.href
                    target=link.is_external().then_some("_blank")
                    rel=link.is_external().then_some("noopener noreferrer")
                    aria-label=link.label
                    class=format!(
                        "glass flex h-12 w-12 items-center justify-center rounded-full text-xl text-slate-600 transition-all hover:-translate-y-1 dark:text-gray-300 animate-fade-up {}",
                        link.hover,
                    )
                    style=stagger(6 + i as u32)
                >
                    <LinkIcon link=*link />
                </a>
            }
        })
        .collect_view();

    view! {
        <section
            id=Section::Home.id()
            class="relative flex min-h-screen items-center justify-center overflow-hidden px-4"
        >
            <div class="pointer-events-none absolute inset-0">
                <div class="absolute -left-24 top-1/4 h-96 w-96 rounded-full bg-cyan-500/20 blur-3xl animate-blob"></div>
                <div class="absolute -right-24 top-1/3 h-96 w-96 rounded-full bg-purple-500/20 blur-3xl animate-blob animation-delay-2000"></div>
                <div class="absolute bottom-0 left-1/3 h-96 w-96 rounded-full bg-pink-500/10 blur-3xl animate-blob animation-delay-4000"></div>
                {particles}
            </div>

            <div class="relative z-10 mx-auto max-w-4xl text-center">
                <p class="mb-4 text-lg text-cyan-500 animate-fade-up dark:text-cyan-400" style=stagger(0)>
                    {move || site.tr("hero.greeting")}
                </p>
                <h1 class="mb-6 text-5xl font-bold md:text-7xl animate-fade-up" style=stagger(1)>
                    <span class="gradient-text">{move || site.tr("hero.name")}</span>
                </h1>
                <h2 class="mb-6 text-2xl font-semibold text-slate-700 md:text-3xl animate-fade-up dark:text-gray-300" style=stagger(2)>
                    {move || site.tr("hero.title")}
                </h2>
                <p class="mx-auto mb-10 max-w-2xl text-lg text-slate-600 animate-fade-up dark:text-gray-400" style=stagger(3)>
                    {move || site.tr("hero.description")}
                </p>
                <div class="mb-12 flex flex-col items-center justify-center gap-4 sm:flex-row animate-fade-up" style=stagger(4)>
                    <button
                        class="shine-effect rounded-full bg-gradient-to-r from-cyan-500 to-purple-600 px-8 py-3 font-semibold text-white shadow-lg shadow-cyan-500/25 transition-transform hover:scale-105"
                        on:click=cta(Section::Contact, "contact")
                    >
                        {move || site.tr("hero.contactBtn")}
                    </button>
                    <button
                        class="glass glow-border rounded-full px-8 py-3 font-semibold transition-transform hover:scale-105"
                        on:click=cta(Section::Projects, "projects")
                    >
                        {move || site.tr("hero.projectsBtn")}
                    </button>
                </div>
                <div class="flex justify-center gap-4">{links}</div>
            </div>

            <button
                class="absolute bottom-8 left-1/2 -translate-x-1/2 animate-fade-up"
                style=stagger(9)
                aria-label=move || site.tr("hero.scrollHint")
                on:click=move |_| scroll_to_section(Section::About)
            >
                <div class="flex h-10 w-6 justify-center rounded-full border-2 border-slate-400 dark:border-gray-500">
                    <div class="mt-2 h-2 w-1 rounded-full bg-cyan-400 animate-scroll-dot"></div>
                </div>
            </button>
        </section>
    }
}

/// An icon-font glyph, or the literal glyph for links without one.
#[component]
pub fn LinkIcon(link: SocialLink) -> impl IntoView {
    match link.glyph {
        Some(glyph) => Either::Left(view! { <span aria-hidden="true">{glyph}</span> }),
        None => Either::Right(view! { <i class=link.icon aria-hidden="true"></i> }),
    }
}
