use leptos::{either::Either, prelude::*};
use leptos_use::use_window_scroll;

use crate::{content::Section, motion::chrome::NavChrome};

use super::{
    language_switcher::LanguageSwitcher, scroll_to_section, theme_toggle::ThemeToggle, use_site,
};

#[component]
pub fn Navigation() -> impl IntoView {
    let site = use_site();
    let (_, scroll_y) = use_window_scroll();
    let chrome = Memo::new(move |_| NavChrome::at(scroll_y.get()));
    let menu_open = RwSignal::new(false);

    let go_to = move |section: Section| {
        menu_open.set(false);
        scroll_to_section(section);
        site.analytics()
            .event("Navigation", "click", Some(section.id()));
    };

    let desktop_links = Section::all()
        .into_iter()
        .map(|section| {
            view! {
                <li>
                    <a
                        href=section.href()
                        class="relative px-3 py-2 text-sm font-medium text-slate-700 transition-colors hover:text-cyan-500 dark:text-gray-300 dark:hover:text-cyan-400"
                        on:click=move |ev| {
                            ev.prevent_default();
                            go_to(section);
                        }
                    >
                        {move || site.tr(section.label_key())}
                    </a>
                </li>
            }
        })
        .collect_view();

    let mobile_links = Section::all()
        .into_iter()
        .map(|section| {
            view! {
                <a
                    href=section.href()
                    class="block rounded-lg px-4 py-3 text-base font-medium text-slate-700 transition-colors hover:bg-cyan-500/10 hover:text-cyan-500 dark:text-gray-300"
                    on:click=move |ev| {
                        ev.prevent_default();
                        go_to(section);
                    }
                >
                    {move || site.tr(section.label_key())}
                </a>
            }
        })
        .collect_view();

    view! {
        <nav
            class="fixed inset-x-0 top-0 z-50 transition-all duration-300"
            class:nav-scrolled=move || chrome.get().scrolled
            style=move || chrome.get().to_css()
        >
            <div class="mx-auto flex max-w-7xl items-center justify-between px-4 py-4 sm:px-6 lg:px-8">
                <a
                    href=Section::Home.href()
                    class="text-2xl font-bold"
                    on:click=move |ev| {
                        ev.prevent_default();
                        go_to(Section::Home);
                    }
                >
                    <span class="gradient-text">"RA"</span>
                </a>
                <ul class="hidden items-center gap-2 md:flex">{desktop_links}</ul>
                <div class="flex items-center gap-2">
                    <LanguageSwitcher />
                    <ThemeToggle />
                    <button
                        class="glass rounded-lg p-2 md:hidden"
                        aria-label=move || site.tr("nav.menu")
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        {move || {
                            if menu_open.get() {
                                Either::Left(view! { <span class="text-xl">"✕"</span> })
                            } else {
                                Either::Right(view! { <span class="text-xl">"☰"</span> })
                            }
                        }}
                    </button>
                </div>
            </div>
            <div
                class="glass mx-4 mb-4 space-y-1 rounded-2xl p-2 md:hidden"
                class:hidden=move || !menu_open.get()
            >
                {mobile_links}
            </div>
        </nav>
    }
}
