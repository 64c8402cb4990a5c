//! Per-locale template values

use std::fmt;
use std::sync::Arc;

/// Shared template function from a context to a result
pub type TemplateFn<C, R> = Arc<dyn Fn(&C) -> R + Send + Sync>;

/// A per-locale template: either a literal result or a function of a context
pub enum Template<C, R = String> {
    /// Returned as is; any context is ignored
    Literal(R),
    /// Called with the render context
    Function(TemplateFn<C, R>),
}

impl<C, R> Template<C, R> {
    /// Wrap a function as a template
    pub fn func<F>(f: F) -> Self
    where
        F: Fn(&C) -> R + Send + Sync + 'static,
    {
        Self::Function(Arc::new(f))
    }

    /// Whether this template needs a context to render
    pub fn is_function(&self) -> bool {
        matches!(self, Self::Function(_))
    }
}

impl<C, R: Clone> Template<C, R> {
    /// Resolve the template for a context
    pub fn resolve(&self, ctx: &C) -> R {
        match self {
            Self::Literal(value) => value.clone(),
            Self::Function(f) => f(ctx),
        }
    }
}

impl<C, R: Clone> Clone for Template<C, R> {
    fn clone(&self) -> Self {
        match self {
            Self::Literal(value) => Self::Literal(value.clone()),
            Self::Function(f) => Self::Function(Arc::clone(f)),
        }
    }
}

impl<C, R: fmt::Debug> fmt::Debug for Template<C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Self::Function(_) => f.write_str("Function(..)"),
        }
    }
}

impl<C, R> From<R> for Template<C, R> {
    fn from(value: R) -> Self {
        Self::Literal(value)
    }
}

impl<C> From<&str> for Template<C, String> {
    fn from(value: &str) -> Self {
        Self::Literal(value.to_string())
    }
}

/// Templates for one message, keyed by locale
///
/// A locale listed twice keeps its last template. Coverage against a locale
/// set is checked when the translations are installed on a message.
///
/// ```
/// use canopy_i18n::{Template, Translations};
///
/// struct User {
///     name: String,
/// }
///
/// let from_pairs: Translations = [("ja", "こんにちは"), ("en", "Hello")].into();
/// assert_eq!(from_pairs.len(), 2);
///
/// let fluent = Translations::<User>::new()
///     .on("ja", |u| format!("こんにちは、{}さん", u.name))
///     .on("en", |u| format!("Hello, {}", u.name));
/// assert!(fluent.get("en").is_some_and(Template::is_function));
/// ```
pub struct Translations<C = (), R = String> {
    entries: Vec<(String, Template<C, R>)>,
}

impl<C, R> Translations<C, R> {
    /// Create an empty set of translations
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Set the template for a locale
    pub fn with(mut self, locale: impl Into<String>, template: impl Into<Template<C, R>>) -> Self {
        self.insert(locale.into(), template.into());
        self
    }

    /// Set a literal value for a locale
    pub fn literal(self, locale: impl Into<String>, value: impl Into<R>) -> Self {
        self.with(locale, Template::Literal(value.into()))
    }

    /// Set a template function for a locale
    pub fn on<F>(self, locale: impl Into<String>, f: F) -> Self
    where
        F: Fn(&C) -> R + Send + Sync + 'static,
    {
        self.with(locale, Template::func(f))
    }

    /// Template registered for a locale
    pub fn get(&self, locale: &str) -> Option<&Template<C, R>> {
        self.entries
            .iter()
            .find(|(l, _)| l == locale)
            .map(|(_, template)| template)
    }

    /// Locales that have a template, in insertion order
    pub fn locales(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(l, _)| l.as_str())
    }

    /// Number of locales with a template
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no template is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, locale: String, template: Template<C, R>) {
        match self.entries.iter_mut().find(|(l, _)| *l == locale) {
            Some(entry) => entry.1 = template,
            None => self.entries.push((locale, template)),
        }
    }

    pub(crate) fn into_entries(self) -> Vec<(String, Template<C, R>)> {
        self.entries
    }
}

impl<C, R> Default for Translations<C, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, R: Clone> Clone for Translations<C, R> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<C, R: fmt::Debug> fmt::Debug for Translations<C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(l, t)| (l, t)))
            .finish()
    }
}

impl<C, R, L, T> FromIterator<(L, T)> for Translations<C, R>
where
    L: Into<String>,
    T: Into<Template<C, R>>,
{
    fn from_iter<I: IntoIterator<Item = (L, T)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |translations, (locale, template)| {
                translations.with(locale, template)
            })
    }
}

impl<C, R, L, T, const N: usize> From<[(L, T); N]> for Translations<C, R>
where
    L: Into<String>,
    T: Into<Template<C, R>>,
{
    fn from(entries: [(L, T); N]) -> Self {
        entries.into_iter().collect()
    }
}
