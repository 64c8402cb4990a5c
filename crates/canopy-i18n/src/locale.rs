//! Locale set management

use crate::error::{I18nError, I18nResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::warn;

/// Ordered, non-empty set of distinct locale identifiers with a default locale
///
/// The set is fixed once created and shared by every message defined against
/// it, so cloning only bumps a reference count. Any locale passed for binding
/// that is not a member falls back to [`LocaleSet::default_locale`].
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "LocaleSetRepr", into = "LocaleSetRepr")]
pub struct LocaleSet {
    inner: Arc<Inner>,
}

#[derive(PartialEq, Eq, Hash)]
struct Inner {
    locales: Vec<String>,
    default: usize,
}

#[derive(Serialize, Deserialize)]
struct LocaleSetRepr {
    locales: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    default: Option<String>,
}

impl LocaleSet {
    /// Create a locale set whose default is the first locale
    pub fn new<I, S>(locales: I) -> I18nResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let locales: Vec<String> = locales.into_iter().map(Into::into).collect();
        if locales.is_empty() {
            return Err(I18nError::EmptyLocaleSet);
        }

        for (index, locale) in locales.iter().enumerate() {
            if locales[..index].contains(locale) {
                return Err(I18nError::DuplicateLocale {
                    locale: locale.clone(),
                });
            }
        }

        Ok(Self {
            inner: Arc::new(Inner { locales, default: 0 }),
        })
    }

    /// Use another member of the set as the default locale
    pub fn with_default(self, locale: &str) -> I18nResult<Self> {
        let default = self.position(locale).ok_or_else(|| I18nError::UnknownLocale {
            locale: locale.to_string(),
        })?;

        Ok(Self {
            inner: Arc::new(Inner {
                locales: self.inner.locales.clone(),
                default,
            }),
        })
    }

    /// Get the default (fallback) locale
    pub fn default_locale(&self) -> &str {
        &self.inner.locales[self.inner.default]
    }

    /// Check whether a locale is a member of the set
    pub fn contains(&self, locale: &str) -> bool {
        self.position(locale).is_some()
    }

    /// Position of a locale in declaration order
    pub fn position(&self, locale: &str) -> Option<usize> {
        self.inner.locales.iter().position(|l| l == locale)
    }

    /// Return the locale if it is a member, an error otherwise
    pub fn check<'a>(&self, locale: &'a str) -> I18nResult<&'a str> {
        if self.contains(locale) {
            Ok(locale)
        } else {
            Err(I18nError::UnknownLocale {
                locale: locale.to_string(),
            })
        }
    }

    /// Map a locale to its member of the set, falling back to the default
    pub fn resolve(&self, locale: &str) -> &str {
        self.get(self.resolve_index(locale))
    }

    pub(crate) fn resolve_index(&self, locale: &str) -> usize {
        self.position(locale).unwrap_or_else(|| {
            warn!(
                "Locale '{}' is not supported, falling back to default locale '{}'",
                locale,
                self.default_locale()
            );
            self.inner.default
        })
    }

    pub(crate) fn get(&self, index: usize) -> &str {
        &self.inner.locales[index]
    }

    /// Iterate over the locales in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.inner.locales.iter().map(String::as_str)
    }

    /// Number of locales in the set
    pub fn len(&self) -> usize {
        self.inner.locales.len()
    }

    /// Always `false`; a locale set is never empty
    pub fn is_empty(&self) -> bool {
        self.inner.locales.is_empty()
    }
}

impl fmt::Debug for LocaleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleSet")
            .field("locales", &self.inner.locales)
            .field("default", &self.default_locale())
            .finish()
    }
}

impl fmt::Display for LocaleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.inner.locales.join(", "))
    }
}

impl TryFrom<LocaleSetRepr> for LocaleSet {
    type Error = I18nError;

    fn try_from(repr: LocaleSetRepr) -> I18nResult<Self> {
        let set = Self::new(repr.locales)?;
        match repr.default {
            Some(default) => set.with_default(&default),
            None => Ok(set),
        }
    }
}

impl From<LocaleSet> for LocaleSetRepr {
    fn from(set: LocaleSet) -> Self {
        Self {
            default: (set.inner.default != 0).then(|| set.default_locale().to_string()),
            locales: set.inner.locales.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_locale_is_default() {
        let set = LocaleSet::new(["ja", "en"]).unwrap();
        assert_eq!(set.default_locale(), "ja");
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["ja", "en"]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn explicit_default_must_be_member() {
        let set = LocaleSet::new(["ja", "en"]).unwrap().with_default("en").unwrap();
        assert_eq!(set.default_locale(), "en");

        let err = LocaleSet::new(["ja", "en"]).unwrap().with_default("fr").unwrap_err();
        assert_eq!(err, I18nError::UnknownLocale { locale: "fr".into() });
    }

    #[test]
    fn rejects_empty_and_duplicate_sets() {
        assert_eq!(
            LocaleSet::new(Vec::<String>::new()).unwrap_err(),
            I18nError::EmptyLocaleSet
        );
        assert_eq!(
            LocaleSet::new(["en", "ja", "en"]).unwrap_err(),
            I18nError::DuplicateLocale { locale: "en".into() }
        );
    }

    #[test]
    fn resolve_falls_back_to_default() {
        let set = LocaleSet::new(["ja", "en"]).unwrap();
        assert_eq!(set.resolve("en"), "en");
        assert_eq!(set.resolve("fr"), "ja");
        assert!(set.check("fr").is_err());
    }

    #[test]
    fn serde_round_trip_keeps_default() {
        let set = LocaleSet::new(["en", "ja", "zh"]).unwrap().with_default("ja").unwrap();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"{"locales":["en","ja","zh"],"default":"ja"}"#);

        let back: LocaleSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);

        let invalid = serde_json::from_str::<LocaleSet>(r#"{"locales":[]}"#);
        assert!(invalid.is_err());
    }
}
