use std::hash::Hash;

use indexmap::IndexMap;

/// Slice helpers used while walking schema documents. Scoped to this crate on purpose,
/// std's slice type is not touched.
pub(crate) trait SliceExt<T> {
    /// Maps every element to a `Vec` and concatenates the results.
    fn flat_map_vec<U, F>(&self, f: F) -> Vec<U>
    where
        F: FnMut(&T) -> Vec<U>;

    /// Groups elements by key, groups (and elements inside a group) keep first-seen order.
    fn group_by_key<K, F>(&self, key: F) -> Vec<(K, Vec<&T>)>
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K;
}

impl<T> SliceExt<T> for [T] {
    fn flat_map_vec<U, F>(&self, f: F) -> Vec<U>
    where
        F: FnMut(&T) -> Vec<U>,
    {
        self.iter().flat_map(f).collect()
    }

    fn group_by_key<K, F>(&self, mut key: F) -> Vec<(K, Vec<&T>)>
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        let mut groups: IndexMap<K, Vec<&T>> = IndexMap::new();
        for item in self {
            groups.entry(key(item)).or_default().push(item);
        }
        groups.into_iter().collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_flat_map_vec() {
        let names = ["summoner_id", "queue"];
        let tokens = names.flat_map_vec(|name| name.split('_').map(str::to_string).collect());
        assert_eq!(tokens, vec!["summoner", "id", "queue"]);
        let empty: [&str; 0] = [];
        assert!(empty.flat_map_vec(|name| vec![*name]).is_empty());
    }

    #[test]
    fn test_group_by_keeps_first_seen_order() {
        let schemas = [
            "match-v5.MatchDto",
            "lol-status-v4.PlatformDataDto",
            "match-v5.InfoDto",
            "league-v4.LeagueListDTO",
        ];
        let groups = schemas.group_by_key(|name| name.split('.').next().unwrap_or_default().to_string());
        let keys = groups.iter().map(|(key, _)| key.as_str()).collect::<Vec<_>>();
        assert_eq!(keys, vec!["match-v5", "lol-status-v4", "league-v4"]);
        assert_eq!(
            groups[0].1,
            vec![&"match-v5.MatchDto", &"match-v5.InfoDto"]
        );
    }
}
