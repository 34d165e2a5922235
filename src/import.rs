use indexmap::IndexMap;
use tracing::debug;

use crate::{context::AssetContext, utils::strip_relative_prefix};

/// Icons keyed by file name relative to their source, without the `./`.
pub type IconMap<T> = IndexMap<String, T>;

/// Eagerly resolve every entry of `ctx`.
///
/// Stops at the first failure: an unresolvable entry means the icon set
/// itself is misconfigured, so no partial map is returned.
pub fn import_all<C: AssetContext>(ctx: &C) -> Result<IconMap<C::Asset>, C::Error> {
    let keys = ctx.keys()?;

    let mut icons = IconMap::with_capacity(keys.len());
    for key in &keys {
        let asset = ctx.resolve(key)?;
        icons.insert(strip_relative_prefix(key).to_string(), asset);
    }

    debug!(count = icons.len(), "imported icons");
    Ok(icons)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::{BTreeMap, BTreeSet};

    #[derive(Debug, PartialEq)]
    struct Missing(String);

    struct StaticContext(BTreeMap<String, Option<char>>);

    impl StaticContext {
        fn new(entries: &[(&str, Option<char>)]) -> Self {
            StaticContext(
                entries
                    .iter()
                    .map(|(key, value)| (key.to_string(), *value))
                    .collect(),
            )
        }
    }

    impl AssetContext for StaticContext {
        type Asset = char;
        type Error = Missing;

        fn keys(&self) -> Result<Vec<String>, Missing> {
            Ok(self.0.keys().cloned().collect())
        }

        fn resolve(&self, key: &str) -> Result<char, Missing> {
            self.0
                .get(key)
                .copied()
                .flatten()
                .ok_or_else(|| Missing(key.to_string()))
        }
    }

    #[test]
    fn keys_lose_their_relative_prefix() {
        let ctx = StaticContext::new(&[("./sunny.png", Some('A')), ("./rainy.png", Some('B'))]);

        let icons = import_all(&ctx).unwrap();

        assert_eq!(icons.len(), 2);
        assert_eq!(icons.get("sunny.png"), Some(&'A'));
        assert_eq!(icons.get("rainy.png"), Some(&'B'));
    }

    #[test]
    fn unprefixed_keys_are_kept() {
        let ctx = StaticContext::new(&[("fog.png", Some('F'))]);
        let icons = import_all(&ctx).unwrap();
        assert_eq!(icons.get("fog.png"), Some(&'F'));
    }

    #[test]
    fn empty_context_gives_empty_map() {
        let icons = import_all(&StaticContext::new(&[])).unwrap();
        assert!(icons.is_empty());
    }

    #[test]
    fn first_failure_aborts_the_import() {
        let ctx = StaticContext::new(&[
            ("./a.png", Some('A')),
            ("./b.png", None),
            ("./c.png", Some('C')),
        ]);

        assert_eq!(import_all(&ctx), Err(Missing("./b.png".to_string())));
    }

    struct BrokenListing;

    impl AssetContext for BrokenListing {
        type Asset = char;
        type Error = Missing;

        fn keys(&self) -> Result<Vec<String>, Missing> {
            Err(Missing("listing".to_string()))
        }

        fn resolve(&self, _key: &str) -> Result<char, Missing> {
            unreachable!("nothing was listed")
        }
    }

    #[test]
    fn enumeration_failure_propagates() {
        assert_eq!(import_all(&BrokenListing), Err(Missing("listing".to_string())));
    }

    proptest! {
        #[test]
        fn one_entry_per_key(names in prop::collection::btree_set("[a-z]{1,8}\\.png", 0..16)) {
            let entries: Vec<(String, Option<char>)> =
                names.iter().map(|name| (format!("./{name}"), Some('x'))).collect();
            let ctx = StaticContext(entries.into_iter().collect());

            let icons = import_all(&ctx).unwrap();

            prop_assert_eq!(icons.len(), names.len());
            let keys: BTreeSet<String> = icons.keys().cloned().collect();
            prop_assert_eq!(keys, names);
        }
    }
}
