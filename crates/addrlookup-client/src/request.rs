//! Relative request paths for the lookup endpoints.
//!
//! Every builder is a pure function of its arguments. Path segments and
//! query values share one percent-encoding rule: unreserved characters
//! (`A-Z a-z 0-9 - _ . ~`) pass through, everything else is escaped, so a
//! space becomes `%20`. Booleans go on the wire as `True`/`False` and the
//! scope as its variant name, which is what the service expects.

use addrlookup_core::{ClassificationFilter, SearchScope};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

const CLASSIFICATIONS_KEY: &str = "classifications[]";

fn encode(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

fn bool_literal(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

/// Accumulates `key=value` pairs whose values are already encoded.
#[derive(Default)]
struct QueryString(Vec<(&'static str, String)>);

impl QueryString {
    fn push(&mut self, key: &'static str, encoded_value: String) -> &mut Self {
        self.0.push((key, encoded_value));
        self
    }

    fn push_filters<S: AsRef<str>>(
        &mut self,
        include_historical: bool,
        scope: SearchScope,
        classifications: &[S],
        postally_addressable: bool,
    ) -> &mut Self {
        self.push("Scope", scope.as_str().to_string())
            .push("IncludeHistorical", bool_literal(include_historical).to_string())
            .push(
                "postallyaddressable",
                bool_literal(postally_addressable).to_string(),
            );
        for tag in classifications {
            self.push(CLASSIFICATIONS_KEY, encode(tag.as_ref()));
        }
        self
    }

    fn append_to(&self, mut path: String) -> String {
        for (i, (key, value)) in self.0.iter().enumerate() {
            path.push(if i == 0 { '?' } else { '&' });
            path.push_str(key);
            path.push('=');
            path.push_str(value);
        }
        path
    }
}

/// `Lookup/ByPostCode/{postCode}` with the full filter set.
///
/// `.` is unreserved and passes through, so a postcode of `.` or `..`
/// becomes a dot segment that URL resolution collapses. Such identifiers
/// cannot be routed to this endpoint.
#[must_use]
pub fn build_by_post_code<S: AsRef<str>>(
    post_code: &str,
    include_historical: bool,
    scope: SearchScope,
    classifications: &[S],
    postally_addressable: bool,
) -> String {
    QueryString::default()
        .push_filters(
            include_historical,
            scope,
            classifications,
            postally_addressable,
        )
        .append_to(format!("Lookup/ByPostCode/{}", encode(post_code)))
}

/// `Lookup/ByUprn/{uprn}` with no query string.
#[must_use]
pub fn build_by_uprn(uprn: u64) -> String {
    format!("Lookup/ByUprn/{uprn}")
}

/// `Lookup/ByUprn/{uprn}` carrying `Scope` and `IncludeHistorical`.
#[must_use]
pub fn build_by_uprn_extended(uprn: u64, include_historical: bool, scope: SearchScope) -> String {
    QueryString::default()
        .push("Scope", scope.as_str().to_string())
        .push("IncludeHistorical", bool_literal(include_historical).to_string())
        .append_to(build_by_uprn(uprn))
}

/// `Lookup/OnStreet/{usrn}` with the full filter set.
#[must_use]
pub fn build_by_usrn<S: AsRef<str>>(
    usrn: u64,
    include_historical: bool,
    scope: SearchScope,
    classifications: &[S],
    postally_addressable: bool,
) -> String {
    QueryString::default()
        .push_filters(
            include_historical,
            scope,
            classifications,
            postally_addressable,
        )
        .append_to(format!("Lookup/OnStreet/{usrn}"))
}

/// `Lookup/BySomething/?Query=...` with the full filter set.
#[must_use]
pub fn build_by_free_text<S: AsRef<str>>(
    query: &str,
    include_historical: bool,
    scope: SearchScope,
    classifications: &[S],
    postally_addressable: bool,
) -> String {
    QueryString::default()
        .push("Query", encode(query))
        .push_filters(
            include_historical,
            scope,
            classifications,
            postally_addressable,
        )
        .append_to("Lookup/BySomething/".to_string())
}

/// What a lookup searches by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    PostCode(String),
    Uprn(u64),
    Usrn(u64),
    FreeText(String),
}

/// A single lookup's parameters.
///
/// Defaults: current properties only, local scope, no classification
/// filter, postally addressable only. UPRN lookups use the simple endpoint
/// and ignore the filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub identifier: Identifier,
    pub include_historical: bool,
    pub scope: SearchScope,
    pub classifications: Vec<String>,
    pub postally_addressable: bool,
}

impl LookupRequest {
    #[must_use]
    pub fn new(identifier: Identifier) -> Self {
        Self {
            identifier,
            include_historical: false,
            scope: SearchScope::default(),
            classifications: Vec::new(),
            postally_addressable: true,
        }
    }

    #[must_use]
    pub fn post_code(post_code: impl Into<String>) -> Self {
        Self::new(Identifier::PostCode(post_code.into()))
    }

    #[must_use]
    pub fn uprn(uprn: u64) -> Self {
        Self::new(Identifier::Uprn(uprn))
    }

    #[must_use]
    pub fn usrn(usrn: u64) -> Self {
        Self::new(Identifier::Usrn(usrn))
    }

    #[must_use]
    pub fn free_text(query: impl Into<String>) -> Self {
        Self::new(Identifier::FreeText(query.into()))
    }

    #[must_use]
    pub fn include_historical(mut self, include: bool) -> Self {
        self.include_historical = include;
        self
    }

    #[must_use]
    pub fn scope(mut self, scope: SearchScope) -> Self {
        self.scope = scope;
        self
    }

    #[must_use]
    pub fn postally_addressable(mut self, only_postal: bool) -> Self {
        self.postally_addressable = only_postal;
        self
    }

    /// Replaces the classification tags with a predefined filter.
    #[must_use]
    pub fn classification_filter(mut self, filter: ClassificationFilter) -> Self {
        self.classifications = filter.tags().iter().map(|t| (*t).to_string()).collect();
        self
    }

    /// Replaces the classification tags with arbitrary values.
    #[must_use]
    pub fn classifications<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classifications = tags.into_iter().map(Into::into).collect();
        self
    }

    /// The relative path for this request.
    #[must_use]
    pub fn path(&self) -> String {
        match &self.identifier {
            Identifier::PostCode(post_code) => build_by_post_code(
                post_code,
                self.include_historical,
                self.scope,
                self.classifications.as_slice(),
                self.postally_addressable,
            ),
            Identifier::Uprn(uprn) => build_by_uprn(*uprn),
            Identifier::Usrn(usrn) => build_by_usrn(
                *usrn,
                self.include_historical,
                self.scope,
                self.classifications.as_slice(),
                self.postally_addressable,
            ),
            Identifier::FreeText(query) => build_by_free_text(
                query,
                self.include_historical,
                self.scope,
                self.classifications.as_slice(),
                self.postally_addressable,
            ),
        }
    }
}
