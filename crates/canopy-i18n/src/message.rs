//! Localized messages
//!
//! A [`Message`] holds one template per locale of its [`LocaleSet`] and the
//! locale it is currently bound to. Templates are shared between clones, so
//! cloning a message and rebinding the clone never affects the original.

use crate::accessor::{Accessor, DynAccessor};
use crate::error::{I18nError, I18nResult};
use crate::locale::LocaleSet;
use crate::template::{Template, Translations};
use std::any::{type_name, Any};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// A named message with one template per locale
pub struct Message<C = (), R = String> {
    name: Arc<str>,
    locales: LocaleSet,
    locale: usize,
    data: Arc<Vec<Option<Template<C, R>>>>,
}

impl<C, R> Message<C, R> {
    /// Create a message without templates
    ///
    /// A locale outside `locales` is replaced by the set's default locale.
    pub fn new(name: impl Into<String>, locales: LocaleSet, locale: &str) -> Self {
        let locale = locales.resolve_index(locale);
        Self {
            name: Arc::from(name.into()),
            locales,
            locale,
            data: Arc::new(Vec::new()),
        }
    }

    /// Install the templates for every locale of the set
    ///
    /// Fails if a locale is unknown to the set or if any declared locale is
    /// left without a template. The message is unchanged on failure.
    pub fn set_data(&mut self, translations: impl Into<Translations<C, R>>) -> I18nResult<&mut Self> {
        let mut data: Vec<Option<Template<C, R>>> = (0..self.locales.len()).map(|_| None).collect();

        for (locale, template) in translations.into().into_entries() {
            let Some(index) = self.locales.position(&locale) else {
                return Err(I18nError::UnknownLocale { locale });
            };
            data[index] = Some(template);
        }

        let missing: Vec<String> = self
            .locales
            .iter()
            .zip(&data)
            .filter(|(_, template)| template.is_none())
            .map(|(locale, _)| locale.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(I18nError::IncompleteLocales {
                name: self.name.to_string(),
                missing,
            });
        }

        self.data = Arc::new(data);
        debug!("Installed templates for message '{}'", self.name);
        Ok(self)
    }

    /// Consuming variant of [`Message::set_data`]
    pub fn with_data(mut self, translations: impl Into<Translations<C, R>>) -> I18nResult<Self> {
        self.set_data(translations)?;
        Ok(self)
    }

    /// Bind the message to another locale in place
    ///
    /// Unsupported locales fall back to the locale set's default locale.
    pub fn set_locale(&mut self, locale: &str) -> &mut Self {
        self.locale = self.locales.resolve_index(locale);
        self
    }

    /// Clone the message and bind the clone to `locale`
    pub fn with_locale(&self, locale: &str) -> Self {
        let mut message = self.clone();
        message.set_locale(locale);
        message
    }

    /// Name of the message
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Locale the message is currently bound to
    pub fn locale(&self) -> &str {
        self.locales.get(self.locale)
    }

    /// Locale set the message was defined against
    pub fn locales(&self) -> &LocaleSet {
        &self.locales
    }

    /// Whether a template is installed for `locale`
    pub fn has_template(&self, locale: &str) -> bool {
        self.locales
            .position(locale)
            .and_then(|index| self.data.get(index))
            .is_some_and(Option::is_some)
    }

    /// Template for the bound locale
    pub fn template(&self) -> I18nResult<&Template<C, R>> {
        self.data
            .get(self.locale)
            .and_then(Option::as_ref)
            .ok_or_else(|| I18nError::MissingTemplate {
                name: self.name.to_string(),
                locale: self.locale().to_string(),
            })
    }
}

impl<C, R: Clone> Message<C, R> {
    /// Render the template of the bound locale
    ///
    /// Template functions receive `ctx`; literals are returned unchanged.
    pub fn render(&self, ctx: &C) -> I18nResult<R> {
        Ok(self.template()?.resolve(ctx))
    }

    /// Resolve the bound template into a locale-fixed accessor
    pub fn accessor(&self) -> I18nResult<Accessor<C, R>> {
        Accessor::new(self.clone())
    }
}

impl<R: Clone> Message<(), R> {
    /// Render a message that takes no context
    pub fn text(&self) -> I18nResult<R> {
        self.render(&())
    }
}

impl<C, R> Clone for Message<C, R> {
    fn clone(&self) -> Self {
        Self {
            name: Arc::clone(&self.name),
            locales: self.locales.clone(),
            locale: self.locale,
            data: Arc::clone(&self.data),
        }
    }
}

impl<C, R> fmt::Debug for Message<C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Message")
            .field("name", &self.name)
            .field("locale", &self.locale())
            .field("locales", &self.locales)
            .field("templates", &self.data.iter().flatten().count())
            .finish()
    }
}

/// Type-erased view of a [`Message`], used wherever messages of different
/// context and result types are stored together
pub trait LocalizedMessage: Any + Send + Sync + fmt::Debug {
    /// Name of the message
    fn name(&self) -> &str;

    /// Locale the message is bound to
    fn locale(&self) -> &str;

    /// Locale set the message was defined against
    fn locales(&self) -> &LocaleSet;

    /// A copy of the message bound to `locale`
    fn rebound(&self, locale: &str) -> DynMessage;

    /// An accessor for a copy of the message bound to `locale`
    fn bind(&self, locale: &str) -> I18nResult<DynAccessor>;

    /// Context and result types, for diagnostics
    fn signature(&self) -> &'static str;

    #[doc(hidden)]
    fn as_any(&self) -> &dyn Any;
}

/// Shared, immutable message handle
pub type DynMessage = Arc<dyn LocalizedMessage>;

impl<C, R> LocalizedMessage for Message<C, R>
where
    C: 'static,
    R: Clone + Send + Sync + 'static,
{
    fn name(&self) -> &str {
        Message::name(self)
    }

    fn locale(&self) -> &str {
        Message::locale(self)
    }

    fn locales(&self) -> &LocaleSet {
        Message::locales(self)
    }

    fn rebound(&self, locale: &str) -> DynMessage {
        Arc::new(self.with_locale(locale))
    }

    fn bind(&self, locale: &str) -> I18nResult<DynAccessor> {
        Ok(Arc::new(self.with_locale(locale).accessor()?))
    }

    fn signature(&self) -> &'static str {
        type_name::<Self>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl dyn LocalizedMessage {
    /// Recover the typed message
    pub fn downcast_ref<C: 'static, R: 'static>(&self) -> Option<&Message<C, R>> {
        self.as_any().downcast_ref()
    }

    /// Recover a typed clone, or a [`I18nError::TypeMismatch`]
    pub fn typed<C: 'static, R: 'static>(&self) -> I18nResult<Message<C, R>> {
        self.downcast_ref::<C, R>()
            .cloned()
            .ok_or_else(|| I18nError::TypeMismatch {
                name: self.name().to_string(),
                expected: type_name::<Message<C, R>>(),
            })
    }
}

impl LocaleSet {
    /// Define a standalone context-free message bound to the default locale
    pub fn message(&self, name: impl Into<String>, translations: impl Into<Translations>) -> I18nResult<Message> {
        Message::new(name, self.clone(), self.default_locale()).with_data(translations)
    }

    /// Define a standalone templated message bound to the default locale
    pub fn template<C, R>(
        &self,
        name: impl Into<String>,
        translations: impl Into<Translations<C, R>>,
    ) -> I18nResult<Message<C, R>> {
        Message::new(name, self.clone(), self.default_locale()).with_data(translations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locales() -> LocaleSet {
        LocaleSet::new(["ja", "en"]).unwrap()
    }

    struct Person {
        name: &'static str,
    }

    #[test]
    fn renders_bound_locale() {
        let mut title = locales()
            .message("title", [("ja", "タイトル"), ("en", "Title")])
            .unwrap();
        assert_eq!(title.locale(), "ja");
        assert_eq!(title.text().unwrap(), "タイトル");

        title.set_locale("en");
        assert_eq!(title.text().unwrap(), "Title");
    }

    #[test]
    fn unsupported_locale_falls_back_to_default() {
        let mut title = locales()
            .message("title", [("ja", "タイトル"), ("en", "Title")])
            .unwrap();
        title.set_locale("en").set_locale("fr");
        assert_eq!(title.locale(), "ja");
        assert_eq!(title.text().unwrap(), "タイトル");

        let created = Message::<(), String>::new("x", locales(), "de");
        assert_eq!(created.locale(), "ja");
    }

    #[test]
    fn render_without_data_is_missing_template() {
        let message = Message::<(), String>::new("empty", locales(), "en");
        assert_eq!(
            message.text().unwrap_err(),
            I18nError::MissingTemplate {
                name: "empty".into(),
                locale: "en".into()
            }
        );
        assert!(!message.has_template("en"));
    }

    #[test]
    fn set_data_rejects_partial_and_unknown() {
        let mut message = Message::<(), String>::new("title", locales(), "ja");

        let err = message.set_data([("ja", "タイトル")]).unwrap_err();
        assert_eq!(
            err,
            I18nError::IncompleteLocales {
                name: "title".into(),
                missing: vec!["en".into()]
            }
        );

        let err = message
            .set_data([("ja", "タイトル"), ("en", "Title"), ("fr", "Titre")])
            .unwrap_err();
        assert_eq!(err, I18nError::UnknownLocale { locale: "fr".into() });
        assert!(!message.has_template("ja"));
    }

    #[test]
    fn template_function_receives_context() {
        let greet = locales()
            .template(
                "greet",
                Translations::<Person>::new()
                    .on("ja", |p| format!("こんにちは、{}さん", p.name))
                    .on("en", |p| format!("Hello {}", p.name)),
            )
            .unwrap()
            .with_locale("en");

        assert_eq!(greet.render(&Person { name: "Taro" }).unwrap(), "Hello Taro");
        assert_eq!(greet.render(&Person { name: "Hanako" }).unwrap(), "Hello Hanako");
    }

    #[test]
    fn with_locale_leaves_original_untouched() {
        let title = locales()
            .message("title", [("ja", "タイトル"), ("en", "Title")])
            .unwrap();
        let english = title.with_locale("en");

        assert_eq!(english.text().unwrap(), "Title");
        assert_eq!(title.text().unwrap(), "タイトル");
    }

    #[test]
    fn erased_message_downcasts() {
        let title: DynMessage = Arc::new(
            locales()
                .message("title", [("ja", "タイトル"), ("en", "Title")])
                .unwrap(),
        );

        assert!(title.downcast_ref::<(), String>().is_some());
        assert!(matches!(
            title.typed::<Person, String>(),
            Err(I18nError::TypeMismatch { .. })
        ));

        let english = title.rebound("en");
        assert_eq!(english.locale(), "en");
        assert_eq!(title.locale(), "ja");
    }
}
