//! Error types for message definition and lookup

use thiserror::Error;

/// Errors that can occur while defining, binding or looking up messages
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum I18nError {
    /// A locale set was created without any locale
    #[error("Locale set must contain at least one locale")]
    EmptyLocaleSet,

    /// A locale identifier appears twice in a locale set
    #[error("Duplicate locale in locale set: {locale}")]
    DuplicateLocale { locale: String },

    /// A locale is not a member of the locale set
    #[error("Locale is not part of the locale set: {locale}")]
    UnknownLocale { locale: String },

    /// A message name is already taken in the builder
    #[error("Message already defined: {name}")]
    DuplicateMessage { name: String },

    /// A message does not provide a template for every declared locale
    #[error("Message '{name}' has no template for locales: {missing:?}")]
    IncompleteLocales { name: String, missing: Vec<String> },

    /// Rendering a locale that has no template installed
    #[error("No template for locale '{locale}' in message '{name}'")]
    MissingTemplate { name: String, locale: String },

    /// Message not found in a snapshot
    #[error("Message not found: {key}")]
    MessageNotFound { key: String },

    /// A message was requested with the wrong context or result type
    #[error("Message '{name}' is not a {expected}")]
    TypeMismatch { name: String, expected: &'static str },

    /// A message was built against a different locale set than the builder
    #[error("Message '{name}' was built for a different locale set")]
    LocaleSetMismatch { name: String },
}

/// Result type for i18n operations
pub type I18nResult<T> = Result<T, I18nError>;
