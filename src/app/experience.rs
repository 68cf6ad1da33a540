use leptos::{html::Div, prelude::*};

use crate::content::{EntryKind, Section, TimelineEntry, TIMELINE};

use super::{hooks::use_reveal, use_site, SectionTitle};

#[component]
pub fn Experience() -> impl IntoView {
    let entries = TIMELINE
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            view! { <TimelineItem entry=*entry on_left=TimelineEntry::on_left(i) /> }
        })
        .collect_view();

    view! {
        <section id=Section::Experience.id() class="relative px-4 py-24">
            <div class="mx-auto max-w-5xl">
                <SectionTitle title="experience.title" subtitle="experience.subtitle" />
                <div class="relative">
                    <div class="absolute left-4 top-0 h-full w-0.5 bg-gradient-to-b from-cyan-400 via-purple-500 to-pink-500 md:left-1/2 md:-translate-x-1/2"></div>
                    <div class="space-y-12">{entries}</div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn TimelineItem(entry: TimelineEntry, on_left: bool) -> impl IntoView {
    let site = use_site();
    let node = NodeRef::<Div>::new();
    let revealed = use_reveal(node);

    let (glyph, kind_key) = match entry.kind {
        EntryKind::Work => ("💼", "experience.work"),
        EntryKind::Education => ("🎓", "experience.education"),
    };
    let title = entry.key("title");
    let company = entry.key("company");
    let period = entry.key("period");
    let points = entry.key("points");
    let (row, column) = if on_left {
        ("md:flex-row", "md:pr-12")
    } else {
        ("md:flex-row-reverse", "md:pl-12")
    };

    view! {
        <div
            node_ref=node
            class=format!("reveal relative flex flex-col md:items-center {row}")
            class:is-visible=move || revealed.get()
        >
            <div class="absolute left-4 z-10 flex h-8 w-8 -translate-x-1/2 items-center justify-center rounded-full bg-gradient-to-br from-cyan-400 to-purple-500 text-sm animate-pulse-dot md:left-1/2">
                {glyph}
            </div>
            <div class=format!("ml-12 md:ml-0 md:w-1/2 {column}")>
                <div class="glass glow-border rounded-2xl p-6">
                    <div class="mb-2 flex flex-wrap items-center justify-between gap-2">
                        <span class="rounded-full bg-cyan-500/10 px-3 py-1 text-xs font-medium text-cyan-600 dark:text-cyan-400">
                            {move || site.tr(kind_key)}
                        </span>
                        <span class="text-sm text-slate-500 dark:text-gray-400">
                            {move || site.tr(&period)}
                        </span>
                    </div>
                    <h3 class="text-xl font-semibold">{move || site.tr(&title)}</h3>
                    <p class="mb-4 text-purple-500 dark:text-purple-400">{move || site.tr(&company)}</p>
                    <ul class="space-y-2">
                        {move || {
                            site.tr_list(&points)
                                .into_iter()
                                .map(|point| {
                                    view! {
                                        <li class="flex gap-2 text-sm text-slate-700 dark:text-gray-300">
                                            <span class="text-cyan-500">"▹"</span>
                                            <span>{point}</span>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </div>
            </div>
        </div>
    }
}
