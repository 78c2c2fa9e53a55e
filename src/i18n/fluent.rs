// SPDX-License-Identifier: MPL-2.0
use crate::app::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const DEFAULT_LOCALE: &str = "en-US";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish_non_exhaustive()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale) = filename
                .strip_suffix(".ftl")
                .and_then(|stem| stem.parse::<LanguageIdentifier>().ok())
            else {
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };
            match build_bundle(&locale, String::from_utf8_lossy(&content.data).into_owned()) {
                Some(bundle) => {
                    bundles.insert(locale.clone(), bundle);
                    available_locales.push(locale);
                }
                None => log::error!("skipping malformed translation file {filename}"),
            }
        }
        available_locales.sort_by_key(ToString::to_string);

        let default_locale: LanguageIdentifier = DEFAULT_LOCALE
            .parse()
            .unwrap_or_default();
        let current_locale = resolve_locale(
            cli_lang,
            config.general.language.as_deref(),
            sys_locale::get_locale(),
            &available_locales,
        )
        .unwrap_or(default_locale);
        log::debug!("using locale {current_locale}");

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) {
                let mut errors = vec![];
                let value = bundle.format_pattern(pattern, args, &mut errors);
                if errors.is_empty() {
                    return value.into_owned();
                }
            }
        }
        format!("MISSING: {key}")
    }
}

fn build_bundle(
    locale: &LanguageIdentifier,
    source: String,
) -> Option<FluentBundle<FluentResource>> {
    let resource = FluentResource::try_new(source).ok()?;
    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    bundle.set_use_isolating(false);
    bundle.add_resource(resource).ok()?;
    Some(bundle)
}

/// Picks the first available locale among CLI, config and OS preference.
fn resolve_locale(
    cli_lang: Option<String>,
    config_lang: Option<&str>,
    os_lang: Option<String>,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    [cli_lang.as_deref(), config_lang, os_lang.as_deref()]
        .into_iter()
        .flatten()
        .filter_map(|raw| raw.parse::<LanguageIdentifier>().ok())
        .find_map(|wanted| match_available(&wanted, available))
}

/// Exact match first, then same language with any region (`pt` -> `pt-BR`).
fn match_available(
    wanted: &LanguageIdentifier,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    available
        .iter()
        .find(|candidate| *candidate == wanted)
        .or_else(|| {
            available
                .iter()
                .find(|candidate| candidate.language == wanted.language)
        })
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn available() -> Vec<LanguageIdentifier> {
        vec!["en-US".parse().unwrap(), "pt-BR".parse().unwrap()]
    }

    #[test]
    fn test_resolve_locale_cli() {
        let lang = resolve_locale(Some("pt-BR".to_string()), Some("en-US"), None, &available());
        assert_eq!(lang, Some("pt-BR".parse().unwrap()));
    }

    #[test]
    fn test_resolve_locale_config() {
        let lang = resolve_locale(None, Some("pt-BR"), Some("en-US".into()), &available());
        assert_eq!(lang, Some("pt-BR".parse().unwrap()));
    }

    #[test]
    fn test_resolve_locale_os() {
        let lang = resolve_locale(None, None, Some("pt-BR".into()), &available());
        assert_eq!(lang, Some("pt-BR".parse().unwrap()));
    }

    #[test]
    fn unsupported_cli_language_falls_through() {
        let lang = resolve_locale(Some("ja".into()), Some("pt-BR"), None, &available());
        assert_eq!(lang, Some("pt-BR".parse().unwrap()));
    }

    #[test]
    fn bare_language_matches_regional_bundle() {
        let lang = resolve_locale(Some("pt".into()), None, None, &available());
        assert_eq!(lang, Some("pt-BR".parse().unwrap()));
    }

    #[test]
    fn nothing_available_resolves_to_none() {
        assert_eq!(resolve_locale(Some("ja".into()), None, None, &available()), None);
    }

    #[test]
    fn both_bundles_are_embedded() {
        let i18n = I18n::default();
        assert_eq!(i18n.available_locales, available());
    }

    #[test]
    fn missing_key_is_flagged() {
        let i18n = I18n::default();
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn switching_locale_changes_translations() {
        let mut i18n = I18n::new(Some("en-US".into()), &Config::default());
        let english = i18n.tr("footer-choose-photo");

        i18n.set_locale("pt-BR".parse().unwrap());
        assert_eq!(i18n.current_locale().to_string(), "pt-BR");
        assert_ne!(i18n.tr("footer-choose-photo"), english);
    }

    #[test]
    fn unknown_locale_is_ignored() {
        let mut i18n = I18n::new(Some("en-US".into()), &Config::default());
        i18n.set_locale("ja".parse().unwrap());
        assert_eq!(i18n.current_locale().to_string(), "en-US");
    }

    #[test]
    fn arguments_are_interpolated() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        let text = i18n.tr_with_args("about-version", &[("version", "9.9.9")]);
        assert!(text.contains("9.9.9"), "{text}");
    }
}
