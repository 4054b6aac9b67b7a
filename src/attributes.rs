//! Attribute map and class list for HTML elements.

use std::fmt;

use crate::error::Result;
use crate::validate::{validate_attribute_name, validate_class_name};

/// Insertion-ordered attribute map.
///
/// Names are unique and, as in HTML, case-insensitive: they are stored
/// lower-cased and looked up ignoring ASCII case. Setting an existing name
/// replaces its value in place, so the attribute keeps the position of its
/// first assignment.
///
/// The `class` attribute is not stored here; see [`ClassList`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`, lower-casing and validating the name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> Result<()> {
        let name = name.into().to_ascii_lowercase();
        validate_attribute_name(&name)?;
        let value = value.into();

        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((name, value)),
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(k, _)| k.eq_ignore_ascii_case(name))
    }

    /// Remove an attribute, returning its value if it was set.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.entries.iter().position(|(k, _)| k.eq_ignore_ascii_case(name))?;
        Some(self.entries.remove(index).1)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Ordered set of validated class names.
///
/// Duplicates are ignored, so the first occurrence fixes the position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    names: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a class list from whitespace-separated names.
    ///
    /// # Examples
    ///
    /// ```
    /// use balisage::ClassList;
    ///
    /// let classes = ClassList::parse("btn  btn-primary btn").unwrap();
    /// assert_eq!(classes.to_string(), "btn btn-primary");
    /// assert!(ClassList::parse("ok 1bad").is_err());
    /// ```
    pub fn parse(names: &str) -> Result<Self> {
        let mut list = Self::new();
        list.extend(names.split_ascii_whitespace())?;
        Ok(list)
    }

    /// Add a class. Returns `true` if it was not already present.
    pub fn add(&mut self, name: impl Into<String>) -> Result<bool> {
        let name = name.into();
        validate_class_name(&name)?;
        if self.contains(&name) {
            return Ok(false);
        }
        self.names.push(name);
        Ok(true)
    }

    /// Add several classes. Nothing is added unless every name is valid.
    pub fn extend<I, S>(&mut self, names: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        for name in &names {
            validate_class_name(name)?;
        }
        for name in names {
            if !self.contains(&name) {
                self.names.push(name);
            }
        }
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Remove a class. Returns `true` if it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.names.iter().position(|n| n == name) {
            Some(index) => {
                self.names.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

/// Space-joined, the form used for the `class` attribute value.
impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.names.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(name)?;
        }
        Ok(())
    }
}
