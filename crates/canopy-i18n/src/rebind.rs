//! Deep locale rebinding
//!
//! Walks a [`Node`] tree depth-first and produces a new tree of the same
//! shape in which every localized leaf is bound to the target locale. The
//! input tree is never modified: messages are copied before being rebound and
//! builders are finalized into fresh snapshots.
//!
//! | Leaf | [`MessageBinder`] | [`AccessorBinder`] |
//! |------|-------------------|--------------------|
//! | `Message` | rebound message | accessor |
//! | `Accessor` | rebound accessor | rebound accessor |
//! | `Builder` | snapshot | snapshot |
//! | `Snapshot` | rebound snapshot | rebound snapshot |
//! | `Value` | unchanged | unchanged |

use crate::accessor::DynAccessor;
use crate::builder::Builder;
use crate::error::I18nResult;
use crate::message::DynMessage;
use crate::messages::Messages;
use crate::node::Node;
use std::collections::BTreeMap;
use tracing::debug;

/// Leaf transform applied by [`rebind_with`]
pub trait LeafBinder {
    /// Transform a message leaf
    fn message(&self, message: &DynMessage, locale: &str) -> I18nResult<Node>;

    /// Transform an accessor leaf
    fn accessor(&self, accessor: &DynAccessor, locale: &str) -> I18nResult<Node> {
        Ok(Node::Accessor(accessor.rebound(locale)?))
    }

    /// Transform an un-finalized builder
    fn builder(&self, builder: &Builder, locale: &str) -> I18nResult<Node> {
        Ok(Node::Snapshot(builder.build(Some(locale))))
    }

    /// Transform a snapshot
    fn snapshot(&self, messages: &Messages, locale: &str) -> I18nResult<Node> {
        Ok(Node::Snapshot(messages.with_locale(locale)))
    }
}

/// Keeps messages as messages, so call sites use `render`
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageBinder;

impl LeafBinder for MessageBinder {
    fn message(&self, message: &DynMessage, locale: &str) -> I18nResult<Node> {
        Ok(Node::Message(message.rebound(locale)))
    }
}

/// Turns messages into accessors, so call sites use `call`/`get`
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessorBinder;

impl LeafBinder for AccessorBinder {
    fn message(&self, message: &DynMessage, locale: &str) -> I18nResult<Node> {
        Ok(Node::Accessor(message.bind(locale)?))
    }
}

/// Rebind every message in `node` to `locale`, keeping messages as messages
pub fn rebind(node: &Node, locale: &str) -> I18nResult<Node> {
    rebind_with(node, locale, &MessageBinder)
}

/// Rebind every message in `node` to `locale`, turning messages into accessors
///
/// Fails with [`crate::I18nError::MissingTemplate`] if a message has no
/// template for the resolved locale.
pub fn rebind_callable(node: &Node, locale: &str) -> I18nResult<Node> {
    rebind_with(node, locale, &AccessorBinder)
}

/// Rebind a tree with a custom leaf transform
pub fn rebind_with<B>(node: &Node, locale: &str, binder: &B) -> I18nResult<Node>
where
    B: LeafBinder + ?Sized,
{
    debug!("Rebinding {} node to locale '{}'", node.kind(), locale);
    visit(node, locale, binder)
}

fn visit<B>(node: &Node, locale: &str, binder: &B) -> I18nResult<Node>
where
    B: LeafBinder + ?Sized,
{
    match node {
        Node::Message(message) => binder.message(message, locale),
        Node::Accessor(accessor) => binder.accessor(accessor, locale),
        Node::Builder(builder) => binder.builder(builder, locale),
        Node::Snapshot(messages) => binder.snapshot(messages, locale),
        Node::Map(entries) => entries
            .iter()
            .map(|(key, child)| visit(child, locale, binder).map(|node| (key.clone(), node)))
            .collect::<I18nResult<BTreeMap<_, _>>>()
            .map(Node::Map),
        Node::List(items) => items
            .iter()
            .map(|item| visit(item, locale, binder))
            .collect::<I18nResult<Vec<_>>>()
            .map(Node::List),
        Node::Value(value) => Ok(Node::Value(value.clone())),
    }
}

impl Node {
    /// See [`rebind`]
    pub fn rebind(&self, locale: &str) -> I18nResult<Node> {
        rebind(self, locale)
    }

    /// See [`rebind_callable`]
    pub fn rebind_callable(&self, locale: &str) -> I18nResult<Node> {
        rebind_callable(self, locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LocaleSet, Message};

    struct Upper;

    impl LeafBinder for Upper {
        fn message(&self, message: &DynMessage, _locale: &str) -> I18nResult<Node> {
            Ok(Node::from(message.name().to_uppercase()))
        }
    }

    #[test]
    fn custom_binder_replaces_leaves() {
        let locales = LocaleSet::new(["ja", "en"]).unwrap();
        let title = locales.message("title", [("ja", "タイトル"), ("en", "Title")]).unwrap();
        let tree = Node::list([Node::from(title), Node::from(1_i64)]);

        let out = rebind_with(&tree, "en", &Upper).unwrap();
        assert_eq!(out.at(0).unwrap().as_value().unwrap(), "TITLE");
        assert_eq!(out.at(1).unwrap().as_value().unwrap(), 1);
    }

    #[test]
    fn accessor_mode_reports_missing_templates() {
        let locales = LocaleSet::new(["ja", "en"]).unwrap();
        let empty = Message::<(), String>::new("empty", locales, "ja");

        assert!(rebind(&Node::from(empty.clone()), "en").is_ok());
        assert!(rebind_callable(&Node::from(empty), "en").is_err());
    }
}
