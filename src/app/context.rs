use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::{
    analytics::Analytics,
    config::SiteConfig,
    i18n::{translate, translate_list, Language},
    theme::Theme,
};

/// App-wide selections. Provided once by `App` and disposed with its owner;
/// components subscribe by reading the signals inside reactive closures.
#[derive(Clone, Copy)]
pub struct SiteContext {
    pub theme: RwSignal<Theme>,
    pub language: RwSignal<Language>,
    config: StoredValue<SiteConfig>,
    analytics: StoredValue<Analytics>,
}

impl SiteContext {
    pub fn provide(config: SiteConfig, analytics: Analytics) -> Self {
        let site = Self {
            theme: RwSignal::new(Theme::default()),
            language: RwSignal::new(config.default_language),
            config: StoredValue::new(config),
            analytics: StoredValue::new(analytics),
        };
        provide_context(site);
        #[cfg(feature = "hydrate")]
        site.persist();
        site
    }

    /// Display string for `key` in the current language. Tracks the language.
    pub fn tr(&self, key: &str) -> String {
        translate(self.language.get(), key)
    }

    pub fn tr_list(&self, key: &str) -> Vec<String> {
        translate_list(self.language.get(), key)
    }

    pub fn config(&self) -> SiteConfig {
        self.config.get_value()
    }

    pub fn analytics(&self) -> Analytics {
        self.analytics.get_value()
    }

    pub fn toggle_theme(&self) {
        let next = self.theme.get_untracked().toggle();
        self.theme.set(next);
        self.analytics().event("Theme", "toggle", Some(next.class()));
    }

    pub fn set_language(&self, language: Language) {
        if self.language.get_untracked() == language {
            return;
        }
        self.language.set(language);
        self.analytics()
            .event("Language", "change", Some(language.code()));
    }

    /// Restores the selections saved by a previous visit and saves later changes.
    #[cfg(feature = "hydrate")]
    fn persist(self) {
        let (stored_theme, set_stored_theme, _) =
            use_local_storage::<Option<Theme>, JsonSerdeWasmCodec>("theme");
        let (stored_language, set_stored_language, _) =
            use_local_storage::<Option<Language>, JsonSerdeWasmCodec>("language");

        Effect::watch(
            || (),
            move |_, _, _| {
                if let Some(theme) = stored_theme.get_untracked() {
                    self.theme.set(theme);
                }
                if let Some(language) = stored_language.get_untracked() {
                    self.language.set(language);
                }
            },
            true,
        );
        Effect::watch(
            move || self.theme.get(),
            move |theme, _, _| set_stored_theme.set(Some(*theme)),
            false,
        );
        Effect::watch(
            move || self.language.get(),
            move |language, _, _| set_stored_language.set(Some(*language)),
            false,
        );
    }
}

pub fn use_site() -> SiteContext {
    expect_context::<SiteContext>()
}
