//! Order-independent cache keys.

/// A set of vertex identifiers used to key the memoization tables.
///
/// Two keys built from the same identifiers in any order compare and hash
/// equal: the identifiers are stored sorted and deduplicated.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexSetKey(Box<[String]>);

impl VertexSetKey {
    /// Sorted member identifiers.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<'a> FromIterator<&'a str> for VertexSetKey {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut members: Vec<String> = iter.into_iter().map(str::to_owned).collect();
        members.sort_unstable();
        members.dedup();
        Self(members.into_boxed_slice())
    }
}
