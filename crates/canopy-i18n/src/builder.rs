//! Persistent message builder
//!
//! Every add operation returns a new [`Builder`] that shares the messages of
//! the previous one; the previous builder stays usable and keeps producing
//! the same snapshots.

use crate::error::{I18nError, I18nResult};
use crate::locale::LocaleSet;
use crate::message::{DynMessage, Message};
use crate::messages::Messages;
use crate::template::Translations;
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, info};

/// Immutable accumulator of named messages for a fixed locale set
///
/// # Example
///
/// ```rust
/// use canopy_i18n::{Builder, Template};
///
/// struct User {
///     name: String,
/// }
///
/// # fn example() -> canopy_i18n::I18nResult<()> {
/// let builder = Builder::from_locales(["ja", "en"])?
///     .add([("title", [("ja", "タイトル"), ("en", "Title")])])?
///     .add_templates::<User>()
///     .add([(
///         "greet",
///         [
///             ("ja", Template::func(|u: &User| format!("こんにちは、{}さん", u.name))),
///             ("en", Template::func(|u: &User| format!("Hello, {}", u.name))),
///         ],
///     )])?;
///
/// let messages = builder.build(Some("en"));
/// assert_eq!(messages.text("title")?, "Title");
///
/// let greet = messages.accessor::<User, String>("greet")?;
/// assert_eq!(greet.call(&User { name: "Taro".into() }), "Hello, Taro");
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct Builder {
    locales: LocaleSet,
    messages: Arc<BTreeMap<String, DynMessage>>,
}

impl Builder {
    /// Create an empty builder for a locale set
    pub fn new(locales: LocaleSet) -> Self {
        Self {
            locales,
            messages: Arc::new(BTreeMap::new()),
        }
    }

    /// Create an empty builder whose default locale is the first of `locales`
    pub fn from_locales<I, S>(locales: I) -> I18nResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self::new(LocaleSet::new(locales)?))
    }

    /// Add context-free string messages
    pub fn add<I, K, T>(&self, entries: I) -> I18nResult<Self>
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
        T: Into<Translations>,
    {
        self.extend::<(), String, _, _, _>(entries)
    }

    /// Add context-free messages with an arbitrary result type
    pub fn add_values<R, I, K, T>(&self, entries: I) -> I18nResult<Self>
    where
        R: Clone + Send + Sync + 'static,
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
        T: Into<Translations<(), R>>,
    {
        self.extend::<(), R, _, _, _>(entries)
    }

    /// Fix a context type for the next batch of string templates
    pub fn add_templates<C: 'static>(&self) -> TemplateAdder<'_, C> {
        TemplateAdder::new(self)
    }

    /// Fix a context and result type for the next batch of templates
    pub fn add_templates_returning<C, R>(&self) -> TemplateAdder<'_, C, R>
    where
        C: 'static,
        R: Clone + Send + Sync + 'static,
    {
        TemplateAdder::new(self)
    }

    /// Add a message defined elsewhere against the same locale set
    pub fn add_message<C, R>(&self, message: Message<C, R>) -> I18nResult<Self>
    where
        C: 'static,
        R: Clone + Send + Sync + 'static,
    {
        if message.locales() != &self.locales {
            return Err(I18nError::LocaleSetMismatch {
                name: message.name().to_string(),
            });
        }

        let mut messages = (*self.messages).clone();
        let name = message.name().to_string();
        if messages.contains_key(&name) {
            return Err(I18nError::DuplicateMessage { name });
        }
        messages.insert(name, Arc::new(message));

        Ok(self.with_messages(messages))
    }

    /// Snapshot every message bound to `locale`
    ///
    /// Without a locale the locale set's default is used; an unsupported
    /// locale falls back to the default. The builder's own messages are not
    /// touched, so snapshots for different locales are independent.
    pub fn build(&self, locale: Option<&str>) -> Messages {
        let locale = match locale {
            Some(locale) => self.locales.resolve(locale),
            None => self.locales.default_locale(),
        };

        let entries = self
            .messages
            .iter()
            .map(|(name, message)| (name.clone(), message.rebound(locale)))
            .collect();

        debug!("Built {} messages for locale '{}'", self.messages.len(), locale);
        Messages::new(self.locales.clone(), locale, entries)
    }

    /// Locale set of the builder
    pub fn locales(&self) -> &LocaleSet {
        &self.locales
    }

    /// Number of messages
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether no message has been added
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Whether a message name is taken
    pub fn contains(&self, name: &str) -> bool {
        self.messages.contains_key(name)
    }

    /// Message names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.messages.keys().map(String::as_str)
    }

    /// Stored message, bound to the default locale
    pub fn get(&self, name: &str) -> Option<&DynMessage> {
        self.messages.get(name)
    }

    fn extend<C, R, I, K, T>(&self, entries: I) -> I18nResult<Self>
    where
        C: 'static,
        R: Clone + Send + Sync + 'static,
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
        T: Into<Translations<C, R>>,
    {
        let default = self.locales.default_locale();
        let mut messages = (*self.messages).clone();
        let before = messages.len();

        for (name, translations) in entries {
            let name = name.into();
            if messages.contains_key(&name) {
                return Err(I18nError::DuplicateMessage { name });
            }

            let message =
                Message::<C, R>::new(name.clone(), self.locales.clone(), default).with_data(translations)?;
            messages.insert(name, Arc::new(message));
        }

        info!(
            "Added {} messages to builder for locales {}",
            messages.len() - before,
            self.locales
        );
        Ok(self.with_messages(messages))
    }

    fn with_messages(&self, messages: BTreeMap<String, DynMessage>) -> Self {
        Self {
            locales: self.locales.clone(),
            messages: Arc::new(messages),
        }
    }
}

/// Adds templates sharing one context type, see [`Builder::add_templates`]
pub struct TemplateAdder<'a, C, R = String> {
    builder: &'a Builder,
    _types: PhantomData<fn(&C) -> R>,
}

impl<'a, C, R> TemplateAdder<'a, C, R>
where
    C: 'static,
    R: Clone + Send + Sync + 'static,
{
    fn new(builder: &'a Builder) -> Self {
        Self {
            builder,
            _types: PhantomData,
        }
    }

    /// Add templated messages and return the extended builder
    pub fn add<I, K, T>(self, entries: I) -> I18nResult<Builder>
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
        T: Into<Translations<C, R>>,
    {
        self.builder.extend::<C, R, _, _, _>(entries)
    }
}

impl<C, R> fmt::Debug for TemplateAdder<'_, C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateAdder")
            .field("builder", self.builder)
            .finish()
    }
}
