use leptos::prelude::*;

use crate::i18n::Language;

use super::use_site;

/// Dropdown of the available languages. A transparent backdrop closes it.
#[component]
pub fn LanguageSwitcher() -> impl IntoView {
    let site = use_site();
    let open = RwSignal::new(false);

    let options = Language::all()
        .into_iter()
        .map(|language| {
            view! {
                <li>
                    <button
                        class="flex w-full items-center gap-3 px-4 py-2 text-left text-sm transition-colors hover:bg-cyan-500/10"
                        class:text-cyan-500=move || site.language.get() == language
                        on:click=move |_| {
                            site.set_language(language);
                            open.set(false);
                        }
                    >
                        <span class="text-lg">{language.flag()}</span>
                        <span>{language.native_name()}</span>
                    </button>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="relative">
            <button
                class="glass flex items-center gap-2 rounded-lg px-3 py-2 text-sm font-medium"
                aria-label=move || site.tr("nav.language")
                aria-haspopup="listbox"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| open.update(|o| *o = !*o)
            >
                <span>{move || site.language.get().flag()}</span>
                <span class="uppercase">{move || site.language.get().code()}</span>
            </button>
            <Show when=move || open.get()>
                <div class="fixed inset-0 z-40" on:click=move |_| open.set(false)></div>
            </Show>
            <ul
                class="glass absolute right-0 z-50 mt-2 w-44 overflow-hidden rounded-xl py-1 shadow-xl"
                class:hidden=move || !open.get()
                role="listbox"
            >
                {options}
            </ul>
        </div>
    }
}
