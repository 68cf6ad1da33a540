mod about;
mod contact;
mod context;
mod experience;
mod hero;
mod hooks;
mod language_switcher;
mod navigation;
mod projects;
mod skills;
mod theme_toggle;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, hooks::use_location, path};

use crate::{analytics::Analytics, config::SiteConfig};

pub use context::{use_site, SiteContext};

const DEVICON_CSS: &str = "https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let config = SiteConfig::load();
    view! {
        <!DOCTYPE html>
        <html>
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                {config.measurement_id.map(|id| view! { <GtagLoader measurement_id=id /> })}
                <link rel="shortcut icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="stylesheet" href=DEVICON_CSS />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

/// Loads gtag.js. Page views are sent by the app after hydration.
#[component]
fn GtagLoader(measurement_id: String) -> impl IntoView {
    let src = format!("https://www.googletagmanager.com/gtag/js?id={measurement_id}");
    let init = format!(
        "window.dataLayer = window.dataLayer || [];\
         function gtag(){{dataLayer.push(arguments);}}\
         gtag('js', new Date());\
         gtag('config', '{measurement_id}', {{ site_speed_sample_rate: 100, send_page_view: false }});"
    );
    view! {
        <script async src=src></script>
        <script inner_html=init></script>
    }
}

fn site_analytics(config: &SiteConfig) -> Analytics {
    match config.measurement_id.as_deref() {
        #[cfg(feature = "hydrate")]
        Some(id) => Analytics::new(crate::analytics::GtagSink::new(id)),
        _ => Analytics::default(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let config = SiteConfig::load();
    let analytics = site_analytics(&config);
    let site = SiteContext::provide(config, analytics);

    view! {
        <Html
            attr:lang=move || site.language.get().code()
            attr:class=move || site.theme.get().class()
        />
        <Title text=move || site.tr("meta.title") />
        <Meta name="description" content=move || site.tr("meta.description") />
        <Meta name="color-scheme" content=move || site.theme.get().color_scheme() />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    let site = use_site();
    let page = use_location().pathname.get_untracked();
    Effect::watch(
        || (),
        move |_, _, _| site.analytics().page_view(&page),
        true,
    );

    view! {
        <div class="min-h-screen overflow-x-hidden bg-slate-50 text-slate-900 transition-colors duration-500 dark:bg-slate-950 dark:text-white">
            <navigation::Navigation />
            <main>
                <hero::Hero />
                <about::About />
                <skills::Skills />
                <experience::Experience />
                <projects::Projects />
                <contact::Contact />
            </main>
        </div>
    }
}

/// Shared section heading with the gradient underline.
#[component]
fn SectionTitle(title: &'static str, #[prop(optional)] subtitle: Option<&'static str>) -> impl IntoView {
    let site = use_site();
    view! {
        <div class="mb-16 text-center">
            <h2 class="mb-4 text-4xl font-bold md:text-5xl">
                <span class="gradient-text">{move || site.tr(title)}</span>
            </h2>
            <div class="mx-auto mb-6 h-1 w-24 rounded-full bg-gradient-to-r from-cyan-400 to-purple-500"></div>
            {subtitle
                .map(|key| {
                    view! {
                        <p class="text-lg text-slate-600 dark:text-gray-400">{move || site.tr(key)}</p>
                    }
                })}
        </div>
    }
}

/// Smoothly scrolls the page to a section.
fn scroll_to_section(section: crate::content::Section) {
    use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

    let Some(el) = document().get_element_by_id(section.id()) else {
        log::warn!("no element for section `{}`", section.id());
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}
