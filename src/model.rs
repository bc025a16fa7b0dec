//! Data structures

use std::borrow::Cow;

use bytes::Bytes;

/// Directory entry returned by a search
#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    /// Distinguished name
    pub dn: String,
    /// Attributes in server order
    pub attributes: Vec<Attribute>,
}

impl Entry {
    pub fn new<S: AsRef<str>>(dn: S, attributes: Vec<Attribute>) -> Self {
        Entry {
            dn: dn.as_ref().to_owned(),
            attributes,
        }
    }

    /// Find attribute by name, ignoring ASCII case
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name.eq_ignore_ascii_case(name))
    }
}

impl From<ldap_rs::SearchEntry> for Entry {
    fn from(raw: ldap_rs::SearchEntry) -> Self {
        Entry {
            dn: raw.dn,
            attributes: raw.attributes.into_iter().map(Into::into).collect(),
        }
    }
}

/// Attribute with raw values. A value may hold text or binary data such as a photo.
#[derive(Clone, Debug, PartialEq)]
pub struct Attribute {
    /// Attribute name
    pub name: String,
    /// Attribute values
    pub values: Vec<Bytes>,
}

impl Attribute {
    pub fn new<S: AsRef<str>>(name: S, values: Vec<Bytes>) -> Self {
        Attribute {
            name: name.as_ref().to_owned(),
            values,
        }
    }

    /// Build attribute from text values
    pub fn text<S, I, T>(name: S, values: I) -> Self
    where
        S: AsRef<str>,
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        Self::new(
            name,
            values
                .into_iter()
                .map(|v| Bytes::copy_from_slice(v.as_ref().as_bytes()))
                .collect(),
        )
    }

    /// Values viewed as text, invalid UTF-8 is replaced
    pub fn text_values(&self) -> impl Iterator<Item = Cow<'_, str>> {
        self.values.iter().map(|v| String::from_utf8_lossy(v))
    }

    /// Values viewed as raw bytes
    pub fn byte_values(&self) -> impl Iterator<Item = &[u8]> {
        self.values.iter().map(|v| v.as_ref())
    }
}

impl From<ldap_rs::Attribute> for Attribute {
    fn from(raw: ldap_rs::Attribute) -> Self {
        Attribute {
            name: raw.name,
            values: raw.values,
        }
    }
}
