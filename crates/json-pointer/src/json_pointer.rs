use std::{
    fmt::{self, Debug, Display, Formatter},
    str::FromStr,
};

use serde::{de::Error, Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    parser::{escape_segment, parse_json_pointer},
    ParseJsonPointerError,
};

/// An RFC 6901 pointer, stored as unescaped segments.
#[derive(Clone, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct JsonPointer(Vec<String>);

impl Display for JsonPointer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for segment in &self.0 {
            f.write_str("/")?;
            f.write_str(&escape_segment(segment))?;
        }

        Ok(())
    }
}

impl Debug for JsonPointer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self)
    }
}

impl FromStr for JsonPointer {
    type Err = ParseJsonPointerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_json_pointer(s).map(Self)
    }
}

impl Serialize for JsonPointer {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for JsonPointer {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        parse_json_pointer(&String::deserialize(deserializer)?)
            .map(Self)
            .map_err(|err| D::Error::custom(err.to_string()))
    }
}

impl<S: Into<String>> FromIterator<S> for JsonPointer {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl JsonPointer {
    #[inline]
    pub fn root() -> JsonPointer {
        JsonPointer(Vec::new())
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Appends an object key or array index.
    pub fn push(&mut self, segment: impl ToString) {
        self.0.push(segment.to_string());
    }

    pub fn pop(&mut self) -> Option<String> {
        self.0.pop()
    }

    /// Returns a new pointer one level below `self`.
    #[must_use]
    pub fn child(&self, segment: impl ToString) -> JsonPointer {
        let mut pointer = self.clone();
        pointer.push(segment);
        pointer
    }
}
