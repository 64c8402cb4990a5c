//! Locale-bound message snapshots

use crate::accessor::Accessor;
use crate::error::{I18nError, I18nResult};
use crate::locale::LocaleSet;
use crate::message::{DynMessage, Message};
use std::any::type_name;
use std::collections::BTreeMap;

/// Messages of a builder bound to one locale
///
/// Every entry is a private copy of the builder's message, so neither the
/// builder nor other snapshots observe this snapshot's locale.
#[derive(Clone, Debug)]
pub struct Messages {
    locales: LocaleSet,
    locale: String,
    entries: BTreeMap<String, DynMessage>,
}

impl Messages {
    pub(crate) fn new(locales: LocaleSet, locale: &str, entries: BTreeMap<String, DynMessage>) -> Self {
        Self {
            locales,
            locale: locale.to_string(),
            entries,
        }
    }

    /// Locale every message is bound to
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Locale set the messages were defined against
    pub fn locales(&self) -> &LocaleSet {
        &self.locales
    }

    /// Number of messages
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the snapshot holds no message
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a message exists
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Message names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over names and type-erased messages
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DynMessage)> + '_ {
        self.entries.iter().map(|(name, message)| (name.as_str(), message))
    }

    /// Type-erased message by name
    pub fn get(&self, name: &str) -> Option<&DynMessage> {
        self.entries.get(name)
    }

    /// Typed copy of a message
    pub fn message<C: 'static, R: 'static>(&self, name: &str) -> I18nResult<Message<C, R>> {
        self.lookup::<C, R>(name).cloned()
    }

    /// Callable accessor for a message
    pub fn accessor<C, R>(&self, name: &str) -> I18nResult<Accessor<C, R>>
    where
        C: 'static,
        R: Clone + 'static,
    {
        self.lookup::<C, R>(name)?.accessor()
    }

    /// Render a message with a context
    pub fn render<C, R>(&self, name: &str, ctx: &C) -> I18nResult<R>
    where
        C: 'static,
        R: Clone + 'static,
    {
        self.lookup::<C, R>(name)?.render(ctx)
    }

    /// Render a string template with a context
    pub fn format<C: 'static>(&self, name: &str, ctx: &C) -> I18nResult<String> {
        self.render::<C, String>(name, ctx)
    }

    /// Render a context-free string message
    pub fn text(&self, name: &str) -> I18nResult<String> {
        self.render::<(), String>(name, &())
    }

    /// Snapshot of the same messages bound to another locale
    ///
    /// An unsupported locale falls back to the locale set's default.
    pub fn with_locale(&self, locale: &str) -> Self {
        let locale = self.locales.resolve(locale);
        let entries = self
            .entries
            .iter()
            .map(|(name, message)| (name.clone(), message.rebound(locale)))
            .collect();
        Self::new(self.locales.clone(), locale, entries)
    }

    fn lookup<C: 'static, R: 'static>(&self, name: &str) -> I18nResult<&Message<C, R>> {
        let message = self.get(name).ok_or_else(|| I18nError::MessageNotFound {
            key: name.to_string(),
        })?;

        message
            .downcast_ref::<C, R>()
            .ok_or_else(|| I18nError::TypeMismatch {
                name: name.to_string(),
                expected: type_name::<Message<C, R>>(),
            })
    }
}
