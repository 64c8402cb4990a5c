//! Locale-fixed message accessors

use crate::error::I18nResult;
use crate::message::Message;
use crate::template::Template;
use std::any::{type_name, Any};
use std::fmt;
use std::sync::Arc;

/// A message resolved for one locale, callable without further lookups
///
/// Created from a [`Message`] whose bound locale has a template, so calling
/// it cannot fail.
pub struct Accessor<C = (), R = String> {
    message: Message<C, R>,
    template: Template<C, R>,
}

impl<C, R: Clone> Accessor<C, R> {
    pub(crate) fn new(message: Message<C, R>) -> I18nResult<Self> {
        let template = message.template()?.clone();
        Ok(Self { message, template })
    }

    /// Produce the message for a context
    pub fn call(&self, ctx: &C) -> R {
        self.template.resolve(ctx)
    }

    /// Accessor for the same message bound to another locale
    pub fn rebind(&self, locale: &str) -> I18nResult<Self> {
        Self::new(self.message.with_locale(locale))
    }
}

impl<R: Clone> Accessor<(), R> {
    /// Produce a message that takes no context
    pub fn get(&self) -> R {
        self.call(&())
    }
}

impl<C, R> Accessor<C, R> {
    /// Name of the underlying message
    pub fn name(&self) -> &str {
        self.message.name()
    }

    /// Locale the accessor is bound to
    pub fn locale(&self) -> &str {
        self.message.locale()
    }

    /// The underlying message
    pub fn message(&self) -> &Message<C, R> {
        &self.message
    }
}

impl<C, R: Clone> Clone for Accessor<C, R> {
    fn clone(&self) -> Self {
        Self {
            message: self.message.clone(),
            template: self.template.clone(),
        }
    }
}

impl<C, R> fmt::Debug for Accessor<C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessor")
            .field("name", &self.name())
            .field("locale", &self.locale())
            .finish()
    }
}

/// Type-erased view of an [`Accessor`]
pub trait BoundMessage: Any + Send + Sync + fmt::Debug {
    /// Name of the underlying message
    fn name(&self) -> &str;

    /// Locale the accessor is bound to
    fn locale(&self) -> &str;

    /// An accessor for the same message bound to `locale`
    fn rebound(&self, locale: &str) -> I18nResult<DynAccessor>;

    /// Context and result types, for diagnostics
    fn signature(&self) -> &'static str;

    #[doc(hidden)]
    fn as_any(&self) -> &dyn Any;
}

/// Shared accessor handle
pub type DynAccessor = Arc<dyn BoundMessage>;

impl<C, R> BoundMessage for Accessor<C, R>
where
    C: 'static,
    R: Clone + Send + Sync + 'static,
{
    fn name(&self) -> &str {
        Accessor::name(self)
    }

    fn locale(&self) -> &str {
        Accessor::locale(self)
    }

    fn rebound(&self, locale: &str) -> I18nResult<DynAccessor> {
        Ok(Arc::new(self.rebind(locale)?))
    }

    fn signature(&self) -> &'static str {
        type_name::<Self>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl dyn BoundMessage {
    /// Recover the typed accessor
    pub fn downcast_ref<C: 'static, R: 'static>(&self) -> Option<&Accessor<C, R>> {
        self.as_any().downcast_ref()
    }
}
