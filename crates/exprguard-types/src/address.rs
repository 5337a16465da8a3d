use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Address of a configuration resource: an ordered list of `key=value` elements.
///
/// Canonical text form:
/// - root is `/`
/// - every element is rendered as `/key=value`
/// - keys and values never contain `/` or `=`
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceAddress(Vec<(String, String)>);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddressParseError {
    pub input: String,
    pub reason: &'static str,
}

impl fmt::Display for AddressParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid resource address '{}': {}", self.input, self.reason)
    }
}

impl std::error::Error for AddressParseError {}

impl ResourceAddress {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn elements(&self) -> &[(String, String)] {
        &self.0
    }

    /// Address of a child resource.
    pub fn append(&self, key: &str, value: &str) -> ResourceAddress {
        let mut elements = self.0.clone();
        elements.push((key.to_string(), value.to_string()));
        Self(elements)
    }

    pub fn last(&self) -> Option<(&str, &str)> {
        self.0.last().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for ResourceAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("/");
        }
        for (key, value) in &self.0 {
            write!(f, "/{key}={value}")?;
        }
        Ok(())
    }
}

impl FromStr for ResourceAddress {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = |reason| AddressParseError {
            input: s.to_string(),
            reason,
        };

        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed == "/" {
            return Ok(Self::root());
        }

        let mut elements = Vec::new();
        for segment in trimmed.trim_start_matches('/').split('/') {
            // Tolerate a trailing slash, nothing else.
            if segment.is_empty() {
                continue;
            }
            let Some((key, value)) = segment.split_once('=') else {
                return Err(err("element must be key=value"));
            };
            if key.is_empty() || value.is_empty() {
                return Err(err("element key and value must be non-empty"));
            }
            if value.contains('=') {
                return Err(err("element value must not contain '='"));
            }
            elements.push((key.to_string(), value.to_string()));
        }
        Ok(Self(elements))
    }
}

impl Serialize for ResourceAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ResourceAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
