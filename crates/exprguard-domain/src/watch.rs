use crate::model::AttributeDefinition;
use std::collections::BTreeSet;

/// Immutable set of watched attribute names, fixed at guard construction.
///
/// An empty set is valid: a guard built from it never rejects anything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WatchSet {
    names: BTreeSet<String>,
}

impl WatchSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Watch every attribute described by `definitions`.
    pub fn from_definitions<'a, I>(definitions: I) -> Self
    where
        I: IntoIterator<Item = &'a AttributeDefinition>,
    {
        Self::from_names(definitions.into_iter().map(|d| d.name().to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for WatchSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::from_names(iter)
    }
}
