//! Property-based invariant tests for builders and rebinding.
//!
//! 1. A chain of rebinds renders the template of the last locale (or the
//!    default when the last locale is unsupported)
//! 2. Rebinding never changes the input tree
//! 3. Rebinding preserves list length and map keys
//! 4. Snapshots built for any locale agree with direct rendering
//! 5. Adding to a builder never changes snapshots of the original

use canopy_i18n::{rebind, Builder, LocaleSet, Message, Node};
use proptest::prelude::*;

const LOCALES: [&str; 3] = ["ja", "en", "zh"];

fn expected(locale: &str) -> &'static str {
    match locale {
        "en" => "Hello",
        "zh" => "你好",
        _ => "こんにちは",
    }
}

fn hello() -> Message {
    LocaleSet::new(LOCALES)
        .unwrap()
        .message("hello", [("ja", "こんにちは"), ("en", "Hello"), ("zh", "你好")])
        .unwrap()
}

fn any_locale() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("ja".to_string()),
        Just("en".to_string()),
        Just("zh".to_string()),
        "[a-z]{2}(-[A-Z]{2})?",
    ]
}

fn render(node: &Node) -> String {
    node.message::<(), String>().unwrap().text().unwrap()
}

proptest! {
    #[test]
    fn rebind_chain_is_not_lossy(locales in prop::collection::vec(any_locale(), 1..8)) {
        let mut node = Node::from(hello());
        for locale in &locales {
            node = rebind(&node, locale).unwrap();
        }

        let last = locales.last().unwrap();
        prop_assert_eq!(render(&node), expected(last));
    }

    #[test]
    fn rebind_leaves_input_unchanged(locale in any_locale(), width in 0usize..6) {
        let tree = Node::list((0..width).map(|_| hello()));
        let _ = rebind(&tree, &locale).unwrap();

        for index in 0..width {
            prop_assert_eq!(render(tree.at(index).unwrap()), "こんにちは");
        }
    }

    #[test]
    fn rebind_preserves_shape(locale in any_locale(), keys in prop::collection::btree_set("[a-z]{1,6}", 0..6)) {
        let tree = Node::map(keys.iter().map(|key| (key.clone(), Node::list([hello(), hello()]))));
        let out = rebind(&tree, &locale).unwrap();

        for key in &keys {
            let Some(Node::List(items)) = out.get(key) else {
                return Err(TestCaseError::fail(format!("missing list under {key}")));
            };
            prop_assert_eq!(items.len(), 2);
            prop_assert_eq!(render(&items[1]), expected(&locale));
        }
    }

    #[test]
    fn snapshots_match_direct_rendering(locale in any_locale()) {
        let builder = Builder::new(LocaleSet::new(LOCALES).unwrap()).add_message(hello()).unwrap();
        let snapshot = builder.build(Some(&locale));

        prop_assert_eq!(snapshot.text("hello").unwrap(), hello().with_locale(&locale).text().unwrap());
    }

    #[test]
    fn adding_keeps_original_snapshots(names in prop::collection::btree_set("[a-z]{3,8}", 1..5)) {
        let builder = Builder::new(LocaleSet::new(LOCALES).unwrap()).add_message(hello()).unwrap();
        let before = builder.build(Some("en"));

        let entries = names
            .iter()
            .filter(|name| name.as_str() != "hello")
            .map(|name| (name.clone(), [("ja", "一"), ("en", "one"), ("zh", "一")]));
        let extended = builder.add(entries).unwrap();

        let after = builder.build(Some("en"));
        prop_assert_eq!(before.names().collect::<Vec<_>>(), after.names().collect::<Vec<_>>());
        prop_assert!(extended.len() >= builder.len());
        prop_assert_eq!(after.text("hello").unwrap(), "Hello");
    }
}
