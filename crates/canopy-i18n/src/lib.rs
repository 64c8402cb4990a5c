//! # Canopy i18n
//!
//! Type-safe localized messages defined once per locale and bound to a
//! locale on demand.
//!
//! This crate provides:
//!
//! - Locale sets with a default locale used as fallback
//! - Messages holding one literal or template function per locale
//! - A persistent builder producing locale-bound snapshots
//! - Deep rebinding of nested trees of messages, builders and snapshots
//!
//! # Example
//!
//! ```rust
//! use canopy_i18n::{rebind, Builder, Node};
//!
//! # fn example() -> canopy_i18n::I18nResult<()> {
//! let features = Builder::from_locales(["en", "ja"])?
//!     .add([("title", [("en", "Features"), ("ja", "特徴")])])?;
//! let title = features.locales().message("title", [("en", "Canopy"), ("ja", "キャノピー")])?;
//!
//! let tree = Node::map([("title", Node::from(title)), ("features", Node::from(features))]);
//! let japanese = rebind(&tree, "ja")?;
//!
//! let snapshot = japanese.get("features").and_then(Node::as_snapshot).unwrap();
//! assert_eq!(snapshot.text("title")?, "特徴");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod accessor;
pub mod builder;
pub mod error;
pub mod locale;
pub mod message;
pub mod messages;
pub mod node;
pub mod rebind;
pub mod template;

pub use accessor::{Accessor, BoundMessage, DynAccessor};
pub use builder::{Builder, TemplateAdder};
pub use error::{I18nError, I18nResult};
pub use locale::LocaleSet;
pub use message::{DynMessage, LocalizedMessage, Message};
pub use messages::Messages;
pub use node::Node;
pub use rebind::{rebind, rebind_callable, rebind_with, AccessorBinder, LeafBinder, MessageBinder};
pub use template::{Template, TemplateFn, Translations};
