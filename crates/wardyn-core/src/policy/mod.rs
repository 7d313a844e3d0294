//! Allowed-domain set and email validator.

mod proptests;

use std::collections::BTreeSet;

use regex::Regex;

use crate::error::{Error, Result};

/// Anchored syntactic check for an email address.
///
/// Group 1 captures the domain, so membership is checked against the same
/// substring the format check matched; the address is never re-split.
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@([a-zA-Z0-9.-]+\.[a-zA-Z]{2,})$";

/// Shape an allowed-domain entry itself has to satisfy.
const DOMAIN_PATTERN: &str = r"^[a-z0-9.-]+\.[a-z]{2,}$";

/// The set of email domains permitted to authenticate.
///
/// Constructed once at process start and never mutated. Entries are
/// normalized (trimmed, lowercased) on the way in, so membership checks are
/// plain string equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedDomains(BTreeSet<String>);

impl AllowedDomains {
    /// Build the set from raw entries.
    ///
    /// Fails on an empty set and on any entry that is not itself a
    /// syntactically plausible domain.
    pub fn new<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let shape = Regex::new(DOMAIN_PATTERN)?;
        let mut set = BTreeSet::new();
        for entry in entries {
            let domain = entry.as_ref().trim().to_lowercase();
            if !shape.is_match(&domain) {
                return Err(Error::InvalidDomain(entry.as_ref().to_string()));
            }
            set.insert(domain);
        }
        if set.is_empty() {
            return Err(Error::EmptyAllowlist);
        }
        Ok(Self(set))
    }

    /// Exact membership check. No suffix or subdomain matching.
    pub fn contains(&self, domain: &str) -> bool {
        self.0.contains(domain)
    }

    /// Iterate the domains in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of configured domains.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; construction rejects empty sets.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Why an email was rejected.
///
/// [`EmailPolicy::is_allowed`] collapses every reason to `false`; the
/// structured form exists so the gate can log what happened.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RejectReason {
    /// The sign-in attempt carried no email at all.
    #[error("no email address on the sign-in attempt")]
    MissingEmail,

    /// The address does not match the email format.
    #[error("email address is not well-formed")]
    InvalidFormat,

    /// Well-formed, but the domain is not an approved one.
    #[error("domain '{domain}' is not an approved sign-in domain")]
    DomainNotAllowed {
        /// The domain the address actually carried.
        domain: String,
    },
}

/// The email validator: syntactic check plus exact domain membership.
///
/// Pure and stateless beyond the immutable configuration, so it is safe to
/// share across concurrent evaluations.
#[derive(Debug, Clone)]
pub struct EmailPolicy {
    allowed: AllowedDomains,
    pattern: Regex,
}

impl EmailPolicy {
    /// Create a policy over the given allowed-domain set.
    pub fn new(allowed: AllowedDomains) -> Result<Self> {
        Ok(Self {
            allowed,
            pattern: Regex::new(EMAIL_PATTERN)?,
        })
    }

    /// The configured allowed-domain set.
    pub fn allowed_domains(&self) -> &AllowedDomains {
        &self.allowed
    }

    /// Evaluate a raw input, reporting why it was rejected.
    ///
    /// Normalization (trim, lowercase) happens here, so callers can pass the
    /// platform's value through untouched. Subdomains of an approved domain
    /// are rejected; only exact equality counts.
    pub fn evaluate(&self, raw: Option<&str>) -> std::result::Result<(), RejectReason> {
        let trimmed = raw.unwrap_or_default().trim();
        if trimmed.is_empty() {
            return Err(RejectReason::MissingEmail);
        }

        let email = trimmed.to_lowercase();
        let Some(captures) = self.pattern.captures(&email) else {
            return Err(RejectReason::InvalidFormat);
        };

        // Group 1 is present whenever the pattern matches.
        let domain = captures.get(1).map_or("", |m| m.as_str());
        if self.allowed.contains(domain) {
            Ok(())
        } else {
            Err(RejectReason::DomainNotAllowed {
                domain: domain.to_string(),
            })
        }
    }

    /// The boolean predicate: `true` iff the input is a well-formed address
    /// on an approved domain. All abnormal inputs degrade to `false`.
    pub fn is_allowed(&self, raw: Option<&str>) -> bool {
        self.evaluate(raw).is_ok()
    }
}
