use std::{
    collections::HashMap,
    fmt,
    str::FromStr,
    sync::{Arc, LazyLock},
};

use dashmap::DashMap;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub static GLOBAL_CATALOG_CACHE: LazyLock<DashMap<Language, Arc<Catalog>>> =
    LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "locales"]
struct Locales;

/// Languages offered by the switcher, in display order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ru,
    En,
    Uz,
}

impl Language {
    pub const fn all() -> [Language; 3] {
        [Language::Ru, Language::En, Language::Uz]
    }

    /// Used when a key is missing from the selected catalog.
    pub const FALLBACK: Language = Language::En;

    pub fn code(self) -> &'static str {
        match self {
            Language::Ru => "ru",
            Language::En => "en",
            Language::Uz => "uz",
        }
    }

    pub fn native_name(self) -> &'static str {
        match self {
            Language::Ru => "Русский",
            Language::En => "English",
            Language::Uz => "O'zbek",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Language::Ru => "🇷🇺",
            Language::En => "🇬🇧",
            Language::Uz => "🇺🇿",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        // accept region-tagged codes such as `en-US`
        let primary = code.split(['-', '_']).next().unwrap_or_default();
        Language::all()
            .into_iter()
            .find(|l| l.code() == primary)
            .ok_or_else(|| I18nError::UnknownLanguage(s.to_string()))
    }
}

#[derive(Error, Debug)]
pub enum I18nError {
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),
    #[error("No locale catalog for {0}")]
    MissingLocale(&'static str),
    #[error("Locale catalog for {0} is not valid UTF-8")]
    Encoding(&'static str),
    #[error("Couldn't parse locale catalog for {code}")]
    Parse {
        code: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Display strings for one language, addressed by dotted keys
/// (`hero.title`, `experience.items.senior.points.0`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(text)?;
        let mut entries = HashMap::new();
        flatten("", &value, &mut entries);
        Ok(Self { entries })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Entries stored under `key.0`, `key.1`, ... up to the first gap.
    pub fn list(&self, key: &str) -> Vec<String> {
        (0..)
            .map_while(|i| self.entries.get(&format!("{key}.{i}")).cloned())
            .collect()
    }
}

fn flatten(prefix: &str, value: &Value, out: &mut HashMap<String, String>) {
    let join = |key: &str| {
        if prefix.is_empty() {
            key.to_string()
        } else {
            format!("{prefix}.{key}")
        }
    };
    match value {
        Value::Object(map) => {
            for (k, v) in map {
                flatten(&join(k), v, out);
            }
        }
        Value::Array(items) => {
            for (i, v) in items.iter().enumerate() {
                flatten(&join(&i.to_string()), v, out);
            }
        }
        Value::String(s) => {
            out.insert(prefix.to_string(), s.clone());
        }
        Value::Number(n) => {
            out.insert(prefix.to_string(), n.to_string());
        }
        Value::Bool(b) => {
            out.insert(prefix.to_string(), b.to_string());
        }
        Value::Null => {}
    }
}

pub fn catalog(language: Language) -> Result<Arc<Catalog>, I18nError> {
    let cache = &*GLOBAL_CATALOG_CACHE;
    if let Some(c) = cache.get(&language) {
        return Ok(c.clone());
    }
    let code = language.code();
    let file = Locales::get(&format!("{code}.json")).ok_or(I18nError::MissingLocale(code))?;
    let text = std::str::from_utf8(&file.data).map_err(|_| I18nError::Encoding(code))?;
    let parsed = Catalog::from_json(text).map_err(|source| I18nError::Parse { code, source })?;
    Ok(cache.entry(language).or_insert(Arc::new(parsed)).clone())
}

fn lookup<T>(language: Language, f: impl Fn(&Catalog) -> Option<T>) -> Option<T> {
    let mut languages = vec![language];
    if language != Language::FALLBACK {
        languages.push(Language::FALLBACK);
    }
    languages.into_iter().find_map(|l| match catalog(l) {
        Ok(c) => f(c.as_ref()),
        Err(e) => {
            log::error!("{e}");
            None
        }
    })
}

/// Display string for `key`, falling back to English and then to the key itself.
pub fn translate(language: Language, key: &str) -> String {
    lookup(language, |c| c.get(key).map(str::to_string)).unwrap_or_else(|| {
        log::warn!("missing translation for `{key}` ({language})");
        key.to_string()
    })
}

pub fn translate_list(language: Language, key: &str) -> Vec<String> {
    lookup(language, |c| {
        let items = c.list(key);
        if items.is_empty() {
            None
        } else {
            Some(items)
        }
    })
    .unwrap_or_default()
}
