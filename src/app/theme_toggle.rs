use leptos::prelude::*;

use super::use_site;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let site = use_site();
    view! {
        <button
            class="glass rounded-lg p-2 text-lg transition-transform hover:scale-110"
            aria-label=move || site.tr("nav.theme")
            on:click=move |_| site.toggle_theme()
        >
            {move || if site.theme.get().is_dark() { "☀" } else { "☾" }}
        </button>
    }
}
