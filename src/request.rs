use std::time::Duration;

use ldap_rs::{SearchRequest, SearchRequestDerefAliases, SearchRequestScope};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Result;

pub const DEFAULT_FILTER: &str = "(objectClass=*)";
pub const ALL_FIELDS: &str = "*";

static FIELDS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\s,]+").unwrap());

/// Split a whitespace or comma separated list of attribute names
pub fn parse_fields(fields: &str) -> Vec<String> {
    FIELDS_RE.find_iter(fields).map(|m| m.as_str().to_owned()).collect()
}

/// Search breadth
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    Base,
    OneLevel,
    Subtree,
}

impl From<Scope> for SearchRequestScope {
    fn from(scope: Scope) -> Self {
        match scope {
            Scope::Base => SearchRequestScope::BaseObject,
            Scope::OneLevel => SearchRequestScope::SingleLevel,
            Scope::Subtree => SearchRequestScope::WholeSubtree,
        }
    }
}

/// Parameters of a single directory search
#[derive(Clone, Debug, PartialEq)]
pub struct SearchQuery {
    base_dn: String,
    scope: Scope,
    size_limit: u32,
    time_limit: Duration,
    types_only: bool,
    filter: String,
    attributes: Vec<String>,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            base_dn: Default::default(),
            scope: Scope::Subtree,
            size_limit: 0,
            time_limit: Duration::default(),
            types_only: false,
            filter: DEFAULT_FILTER.to_owned(),
            attributes: Vec::new(),
        }
    }
}

impl SearchQuery {
    pub fn new<S: AsRef<str>>(base_dn: S) -> Self {
        Self::default().base_dn(base_dn)
    }

    pub fn base_dn<S: AsRef<str>>(mut self, base_dn: S) -> Self {
        self.base_dn = base_dn.as_ref().to_owned();
        self
    }

    pub fn scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    pub fn size_limit(mut self, size_limit: u32) -> Self {
        self.size_limit = size_limit;
        self
    }

    pub fn time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = time_limit;
        self
    }

    pub fn types_only(mut self, types_only: bool) -> Self {
        self.types_only = types_only;
        self
    }

    pub fn filter<S: AsRef<str>>(mut self, filter: S) -> Self {
        self.filter = filter.as_ref().to_owned();
        self
    }

    pub fn attributes<I, T>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.attributes = attributes.into_iter().map(|a| a.as_ref().to_owned()).collect();
        self
    }

    pub fn get_base_dn(&self) -> &str {
        &self.base_dn
    }

    pub fn get_scope(&self) -> Scope {
        self.scope
    }

    pub fn get_filter(&self) -> &str {
        &self.filter
    }

    pub fn get_attributes(&self) -> &[String] {
        &self.attributes
    }

    /// Build the library request. Aliases are never dereferenced.
    pub fn to_request(&self) -> Result<SearchRequest> {
        Ok(SearchRequest::builder()
            .base_dn(&self.base_dn)
            .scope(self.scope.into())
            .deref_aliases(SearchRequestDerefAliases::NeverDerefAliases)
            .size_limit(self.size_limit)
            .time_limit(self.time_limit)
            .types_only(self.types_only)
            .filter(&self.filter)
            .attributes(&self.attributes)
            .build()?)
    }
}
