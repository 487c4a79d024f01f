//! Active language selection and the content it resolves to.

use std::{fmt, str::FromStr};

use leptos::prelude::*;
use thiserror::Error;

use crate::content::{Catalog, ResumeData};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Pt,
    En,
}

pub const DEFAULT_LANGUAGE: Language = Language::Pt;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LanguageError {
    #[error("unsupported language: {0:?}")]
    Unsupported(String),
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Pt, Language::En];

    pub fn code(self) -> &'static str {
        match self {
            Language::Pt => "pt",
            Language::En => "en",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::Pt => Language::En,
            Language::En => Language::Pt,
        }
    }

    /// Picks the language for the first preferred locale, falling back to
    /// [`DEFAULT_LANGUAGE`] when the list is empty or the locale is unsupported.
    pub fn detect<I, S>(preferred: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let first = preferred.into_iter().next();
        let Some(locale) = first else {
            log::debug!("no preferred locale, using {DEFAULT_LANGUAGE}");
            return DEFAULT_LANGUAGE;
        };
        match locale.as_ref().parse::<Language>() {
            Ok(language) => language,
            Err(e) => {
                log::debug!("{e}, using {DEFAULT_LANGUAGE}");
                DEFAULT_LANGUAGE
            }
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Accepts full locale tags (`pt-BR`, `en_US`) by looking at the first two
/// characters only, so any input starting with a supported code parses
/// (`"english"` is `En`).
impl FromStr for Language {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s
            .trim()
            .get(..2)
            .map(str::to_ascii_lowercase)
            .ok_or_else(|| LanguageError::Unsupported(s.to_string()))?;
        match code.as_str() {
            "pt" => Ok(Language::Pt),
            "en" => Ok(Language::En),
            _ => Err(LanguageError::Unsupported(s.to_string())),
        }
    }
}

/// Orders the tags of an `Accept-Language` header by their quality weight.
///
/// Tags without a `q` parameter weigh 1.0; ties keep header order. Wildcards
/// and tags with a zero or malformed weight are dropped.
pub fn parse_accept_language(header: &str) -> Vec<String> {
    let mut weighted = header
        .split(',')
        .filter_map(|part| {
            let mut params = part.split(';');
            let tag = params.next()?.trim();
            if tag.is_empty() || tag == "*" {
                return None;
            }
            let mut q = 1.0_f32;
            for param in params {
                if let Some(value) = param.trim().strip_prefix("q=") {
                    q = value.trim().parse().ok()?;
                }
            }
            (q > 0.0).then(|| (tag.to_string(), q))
        })
        .collect::<Vec<_>>();
    // stable sort keeps header order for equal weights
    weighted.sort_by(|a, b| b.1.total_cmp(&a.1));
    weighted.into_iter().map(|(tag, _)| tag).collect()
}

/// Read/write handle on the active language.
///
/// Created once at the composition root and handed down; every writer goes
/// through [`LanguageSelector::toggle`] or [`LanguageSelector::set`].
#[derive(Debug, Clone, Copy)]
pub struct LanguageSelector {
    language: RwSignal<Language>,
}

impl LanguageSelector {
    pub fn new(initial: Language) -> Self {
        Self {
            language: RwSignal::new(initial),
        }
    }

    pub fn from_locales<I, S>(preferred: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let language = Language::detect(preferred);
        log::debug!("initial language: {language}");
        Self::new(language)
    }

    /// Tracked read, re-runs the surrounding effect on change.
    pub fn current(&self) -> Language {
        self.language.get()
    }

    pub fn current_untracked(&self) -> Language {
        self.language.get_untracked()
    }

    pub fn toggle(&self) {
        self.language.update(|language| *language = language.toggled());
        log::debug!("language toggled to {}", self.language.get_untracked());
    }

    pub fn set(&self, language: Language) {
        if self.language.get_untracked() == language {
            return;
        }
        self.language.set(language);
        log::debug!("language set to {language}");
    }
}

/// The catalog entry for the active language together with the selector that
/// controls it.
///
/// The catalog is memoized, so readers are only notified when the language
/// actually changes.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedContent {
    selector: LanguageSelector,
    catalog: Memo<Catalog>,
}

impl ResolvedContent {
    pub fn new(selector: LanguageSelector) -> Self {
        let catalog = Memo::new(move |_| Catalog::for_language(selector.current()));
        Self { selector, catalog }
    }

    pub fn get(&self) -> &'static ResumeData {
        self.catalog.get().data()
    }

    pub fn get_untracked(&self) -> &'static ResumeData {
        self.catalog.get_untracked().data()
    }

    pub fn language(&self) -> LanguageSelector {
        self.selector
    }
}
