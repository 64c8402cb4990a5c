//! Heterogeneous trees of messages, builders and plain data

use crate::accessor::{Accessor, DynAccessor};
use crate::builder::Builder;
use crate::message::{DynMessage, Message};
use crate::messages::Messages;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

/// A value that may contain messages at any depth
///
/// Maps and lists nest freely; anything that is not localized is carried as
/// a plain [`Value`] and left alone by rebinding.
#[derive(Clone, Debug)]
pub enum Node {
    /// A message bound to some locale
    Message(DynMessage),
    /// A locale-fixed accessor
    Accessor(DynAccessor),
    /// A builder that has not been finalized yet
    Builder(Builder),
    /// A finalized builder
    Snapshot(Messages),
    /// String-keyed children
    Map(BTreeMap<String, Node>),
    /// Ordered children
    List(Vec<Node>),
    /// Plain data
    Value(Value),
}

impl Node {
    /// Build a map node
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Node>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Build a list node
    pub fn list<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Node>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Child of a map node
    pub fn get(&self, key: &str) -> Option<&Node> {
        match self {
            Self::Map(entries) => entries.get(key),
            _ => None,
        }
    }

    /// Child of a list node
    pub fn at(&self, index: usize) -> Option<&Node> {
        match self {
            Self::List(items) => items.get(index),
            _ => None,
        }
    }

    /// Descend through map keys and list indices, e.g. `"nested.items.0"`
    pub fn pointer(&self, path: &str) -> Option<&Node> {
        path.split('.')
            .filter(|segment| !segment.is_empty())
            .try_fold(self, |node, segment| match node {
                Self::List(_) => node.at(segment.parse().ok()?),
                _ => node.get(segment),
            })
    }

    /// Type-erased message, if this is a message node
    pub fn as_message(&self) -> Option<&DynMessage> {
        match self {
            Self::Message(message) => Some(message),
            _ => None,
        }
    }

    /// Typed message, if this is a message node of that type
    pub fn message<C: 'static, R: 'static>(&self) -> Option<&Message<C, R>> {
        self.as_message()?.downcast_ref()
    }

    /// Type-erased accessor, if this is an accessor node
    pub fn as_accessor(&self) -> Option<&DynAccessor> {
        match self {
            Self::Accessor(accessor) => Some(accessor),
            _ => None,
        }
    }

    /// Typed accessor, if this is an accessor node of that type
    pub fn accessor<C: 'static, R: 'static>(&self) -> Option<&Accessor<C, R>> {
        self.as_accessor()?.downcast_ref()
    }

    /// Builder, if this is a builder node
    pub fn as_builder(&self) -> Option<&Builder> {
        match self {
            Self::Builder(builder) => Some(builder),
            _ => None,
        }
    }

    /// Snapshot, if this is a snapshot node
    pub fn as_snapshot(&self) -> Option<&Messages> {
        match self {
            Self::Snapshot(messages) => Some(messages),
            _ => None,
        }
    }

    /// Plain data, if this is a value node
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Short name of the variant, for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Message(_) => "message",
            Self::Accessor(_) => "accessor",
            Self::Builder(_) => "builder",
            Self::Snapshot(_) => "snapshot",
            Self::Map(_) => "map",
            Self::List(_) => "list",
            Self::Value(_) => "value",
        }
    }
}

impl<C, R> From<Message<C, R>> for Node
where
    C: 'static,
    R: Clone + Send + Sync + 'static,
{
    fn from(message: Message<C, R>) -> Self {
        Self::Message(Arc::new(message))
    }
}

impl<C, R> From<Accessor<C, R>> for Node
where
    C: 'static,
    R: Clone + Send + Sync + 'static,
{
    fn from(accessor: Accessor<C, R>) -> Self {
        Self::Accessor(Arc::new(accessor))
    }
}

impl From<DynMessage> for Node {
    fn from(message: DynMessage) -> Self {
        Self::Message(message)
    }
}

impl From<Builder> for Node {
    fn from(builder: Builder) -> Self {
        Self::Builder(builder)
    }
}

impl From<Messages> for Node {
    fn from(messages: Messages) -> Self {
        Self::Snapshot(messages)
    }
}

impl From<BTreeMap<String, Node>> for Node {
    fn from(entries: BTreeMap<String, Node>) -> Self {
        Self::Map(entries)
    }
}

impl From<Vec<Node>> for Node {
    fn from(items: Vec<Node>) -> Self {
        Self::List(items)
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<i64> for Node {
    fn from(value: i64) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Self::Value(Value::from(value))
    }
}
