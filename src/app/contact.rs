use leptos::{html::Div, prelude::*};

use crate::content::{Section, CONTACT_METHODS, EMAIL, SOCIAL_LINKS};

use super::{hero::LinkIcon, hooks::use_reveal, use_site, SectionTitle};

#[component]
pub fn Contact() -> impl IntoView {
    let site = use_site();
    let node = NodeRef::<Div>::new();
    let revealed = use_reveal(node);
    let year = site.config().copyright_year();

    let methods = CONTACT_METHODS
        .iter()
        .map(|method| {
            view! {
                <a
                    href=method.href
                    class="group flex items-center gap-4 rounded-2xl p-4 transition-colors hover:bg-cyan-500/10"
                >
                    <span class=format!("text-2xl {}", method.color)>{method.glyph}</span>
                    <span>
                        <span class="block text-sm text-slate-500 dark:text-gray-400">
                            {move || site.tr(method.label_key)}
                        </span>
                        <span class="font-medium">{method.value}</span>
                    </span>
                </a>
            }
        })
        .collect_view();

    let socials = SOCIAL_LINKS
        .iter()
        .map(|link| {
            view! {
                <a
                    href=link.href
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label=link.label
                    class=format!(
                        "glass flex h-14 w-14 items-center justify-center rounded-2xl text-2xl transition-all hover:-translate-y-1 {}",
                        link.hover,
                    )
                    on:click=move |_| site.analytics().event("Contact", "social", Some(link.label))
                >
                    <LinkIcon link=*link />
                </a>
            }
        })
        .collect_view();

    view! {
        <section id=Section::Contact.id() class="relative px-4 pb-12 pt-24">
            <div class="mx-auto max-w-5xl">
                <SectionTitle title="contact.title" subtitle="contact.subtitle" />
                <div
                    node_ref=node
                    class="reveal grid gap-8 md:grid-cols-2"
                    class:is-visible=move || revealed.get()
                >
                    <div class="glass glow-border rounded-3xl p-8">
                        <h3 class="mb-6 text-2xl font-semibold">
                            {move || site.tr("contact.getInTouch")}
                        </h3>
                        <div class="space-y-2">{methods}</div>
                    </div>
                    <div class="glass glow-border flex flex-col rounded-3xl p-8">
                        <h3 class="mb-4 text-2xl font-semibold">
                            {move || site.tr("contact.socialMedia")}
                        </h3>
                        <p class="mb-6 text-slate-600 dark:text-gray-400">
                            {move || site.tr("contact.socialDescription")}
                        </p>
                        <div class="mb-8 flex gap-4">{socials}</div>
                        <a
                            href=format!("mailto:{EMAIL}")
                            class="shine-effect mt-auto rounded-full bg-gradient-to-r from-cyan-500 to-purple-600 px-8 py-3 text-center font-semibold text-white shadow-lg shadow-purple-500/25 transition-transform hover:scale-105"
                            on:click=move |_| site.analytics().event("Contact", "write_me", None)
                        >
                            {move || site.tr("contact.writeMe")}
                        </a>
                    </div>
                </div>
            </div>
            <footer class="mx-auto mt-24 max-w-5xl border-t border-slate-200 pt-8 text-center text-sm text-slate-500 dark:border-white/10 dark:text-gray-500">
                <p>"© " {year} " " {move || site.tr("contact.copyright")}</p>
                <p class="mt-2">{move || site.tr("contact.madeWith")}</p>
            </footer>
        </section>
    }
}
