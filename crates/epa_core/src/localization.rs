//! Localized report texts
//!
//! Fluent (FTL) bundles embedded at compile time: `ru-RU` (default) and
//! `en-US`. Unsupported locales and messages missing from the current bundle
//! fall back to `ru-RU`.

use std::collections::HashMap;

use fluent::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use fluent_langneg::{negotiate_languages, NegotiationStrategy};
use unic_langid::LanguageIdentifier;

use crate::error::{AnalyticsError, Result};

pub const DEFAULT_LOCALE: &str = "ru-RU";

/// Supported languages
pub const SUPPORTED_LOCALES: &[&str] = &["ru-RU", "en-US"];

const RU_RU_FTL: &str = include_str!("../locales/ru-RU.ftl");
const EN_US_FTL: &str = include_str!("../locales/en-US.ftl");

fn embedded_ftl(locale: &str) -> Option<&'static str> {
    match locale {
        "ru-RU" => Some(RU_RU_FTL),
        "en-US" => Some(EN_US_FTL),
        _ => None,
    }
}

/// Formats report messages in one active locale.
pub struct Localizer {
    bundles: HashMap<String, FluentBundle<FluentResource>>,
    current_locale: String,
    fallback_locale: String,
}

impl Localizer {
    /// Empty localizer; every lookup returns the bracketed key until a
    /// locale is loaded.
    pub fn new() -> Self {
        Self {
            bundles: HashMap::new(),
            current_locale: DEFAULT_LOCALE.to_string(),
            fallback_locale: DEFAULT_LOCALE.to_string(),
        }
    }

    /// All embedded locales loaded, `ru-RU` active.
    pub fn embedded() -> Result<Self> {
        let mut localizer = Self::new();
        for locale in SUPPORTED_LOCALES {
            if let Some(content) = embedded_ftl(locale) {
                localizer.load_locale(locale, content)?;
            }
        }
        Ok(localizer)
    }

    /// Embedded locales with the best match for `requested` active.
    pub fn for_locale(requested: &str) -> Result<Self> {
        let mut localizer = Self::embedded()?;
        let negotiated = localizer.negotiate_locale(&[requested]);
        localizer.set_locale(&negotiated)?;
        Ok(localizer)
    }

    pub fn load_locale(&mut self, locale: &str, ftl_content: &str) -> Result<()> {
        let resource = FluentResource::try_new(ftl_content.to_string()).map_err(|(_, errors)| {
            AnalyticsError::Localization(format!(
                "failed to parse FTL for {}: {} error(s)",
                locale,
                errors.len()
            ))
        })?;

        let lang_id: LanguageIdentifier = locale
            .parse()
            .map_err(|_| AnalyticsError::Localization(format!("invalid locale: {}", locale)))?;

        let mut bundle = FluentBundle::new(vec![lang_id]);
        bundle.set_use_isolating(false);
        bundle.add_resource(resource).map_err(|errors| {
            AnalyticsError::Localization(format!(
                "failed to add resource for {}: {} error(s)",
                locale,
                errors.len()
            ))
        })?;

        self.bundles.insert(locale.to_string(), bundle);
        Ok(())
    }

    pub fn set_locale(&mut self, locale: &str) -> Result<()> {
        if !self.bundles.contains_key(locale) {
            return Err(AnalyticsError::Localization(format!("locale {} not loaded", locale)));
        }
        self.current_locale = locale.to_string();
        Ok(())
    }

    pub fn locale(&self) -> &str {
        &self.current_locale
    }

    /// Pick the loaded locale closest to the requested ones.
    pub fn negotiate_locale(&self, requested: &[&str]) -> String {
        let mut available: Vec<LanguageIdentifier> =
            self.bundles.keys().filter_map(|k| k.parse().ok()).collect();
        available.sort_by_key(|l| l.to_string());

        let requested: Vec<LanguageIdentifier> =
            requested.iter().filter_map(|l| l.parse().ok()).collect();

        let default: Option<LanguageIdentifier> = self.fallback_locale.parse().ok();

        let negotiated = negotiate_languages(
            &requested,
            &available,
            default.as_ref(),
            NegotiationStrategy::Filtering,
        );

        negotiated
            .first()
            .map(|l| l.to_string())
            .unwrap_or_else(|| self.fallback_locale.clone())
    }

    /// Message without arguments.
    pub fn text(&self, key: &str) -> String {
        self.format(key, &[])
    }

    /// Message with named arguments. Unknown keys come back as `[key]`.
    pub fn format(&self, key: &str, args: &[(&str, FluentValue)]) -> String {
        let fluent_args = if args.is_empty() {
            None
        } else {
            let mut fluent_args = FluentArgs::new();
            for (name, value) in args {
                fluent_args.set(*name, value.clone());
            }
            Some(fluent_args)
        };

        for locale in [&self.current_locale, &self.fallback_locale] {
            if let Some(text) = self.format_in(locale, key, fluent_args.as_ref()) {
                return text;
            }
        }

        format!("[{}]", key)
    }

    fn format_in(&self, locale: &str, key: &str, args: Option<&FluentArgs>) -> Option<String> {
        let bundle = self.bundles.get(locale)?;
        let pattern = bundle.get_message(key)?.value()?;
        let mut errors = vec![];
        let formatted = bundle.format_pattern(pattern, args, &mut errors);
        if !errors.is_empty() {
            tracing::warn!(key, locale, errors = errors.len(), "message formatted with errors");
        }
        Some(formatted.into_owned())
    }
}

impl Default for Localizer {
    fn default() -> Self {
        Self::new()
    }
}
