//! Destructure DID URLs into strongly typed components.
//!
//! A `did:key` URL is of the form `did:<method>:<method-specific-id>[#<fragment>]`.

use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::Error;

static DID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("^did:(?<method>[a-z0-9]+):(?<id>[a-zA-Z0-9._%-]+)(?:#(?<fragment>.*))?$")
        .expect("should compile")
});

/// DID methods supported by this crate.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// `did:key`
    #[default]
    Key,
}

impl FromStr for Method {
    type Err = Error;

    /// Parse a string into a [`Method`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedMethod`] for any method other than `key`.
    fn from_str(s: &str) -> crate::Result<Self> {
        match s {
            "key" => Ok(Self::Key),
            _ => Err(Error::UnsupportedMethod(s.to_string())),
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Key => write!(f, "key"),
        }
    }
}

/// Structure of a DID URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Url {
    /// DID method.
    ///
    /// Specification calls for a string. In our case this must be a method
    /// supported by this crate so we map to an enum.
    pub method: Method,

    /// Method-specific ID. For `did:key` this is the multibase-encoded
    /// public key.
    pub id: String,

    /// Fragment.
    ///
    /// If present, the fragment corresponds to a specific resource within a
    /// DID document. For `did:key` it conventionally repeats the key itself.
    pub fragment: Option<String>,
}

impl Display for Url {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "did:{}:{}", self.method, self.id)?;
        if let Some(fragment) = &self.fragment {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}

impl FromStr for Url {
    type Err = Error;

    /// Parse a string if possible into a strongly typed DID URL struct.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIdentifierSyntax`] if the string does not
    /// conform to the generic DID grammar, and [`Error::UnsupportedMethod`]
    /// if the method is not `key`.
    fn from_str(s: &str) -> crate::Result<Self> {
        let Some(caps) = DID_REGEX.captures(s) else {
            return Err(Error::InvalidIdentifierSyntax(s.to_string()));
        };
        let method = Method::from_str(&caps["method"])?;

        Ok(Self {
            method,
            id: caps["id"].to_string(),
            fragment: caps.name("fragment").map(|m| m.as_str().to_string()),
        })
    }
}

impl Url {
    /// Get the DID part of the URL.
    ///
    /// This is in the form of `did:<method>:<method-specific-id>`.
    #[must_use]
    pub fn did(&self) -> String {
        format!("did:{}:{}", self.method, self.id)
    }
}
