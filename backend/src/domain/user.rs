//! User data model.
//!
//! A [`User`] is stored exactly as it is served: camelCase JSON with the
//! known fields first and any pass-through fields supplied at creation after
//! them. The collection is a plain `Vec<User>` kept in insertion order.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Numeric user identifier.
///
/// Identifiers are assigned as `collection length + 1` when a user is
/// created, so they are positive but not guaranteed unique once users have
/// been deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Wrap a raw identifier.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Identifier assigned to the next user of a collection holding `len`
    /// users.
    ///
    /// Returns `None` only when the length cannot be represented, which a
    /// collection held in memory never reaches in practice.
    pub fn next_for_len(len: usize) -> Option<Self> {
        u64::try_from(len)
            .ok()
            .and_then(|len| len.checked_add(1))
            .map(Self)
    }

    /// Raw numeric value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier parsed from a request path segment.
///
/// Parsing is lenient in the way `parseInt(segment, 10)` is: leading
/// whitespace and a sign are accepted, the longest run of leading digits is
/// used, and anything after it is ignored. A segment without leading digits
/// is [`RequestedId::NotANumber`] and matches no user.
///
/// # Examples
/// ```
/// use users_service::domain::{RequestedId, UserId};
///
/// assert_eq!(RequestedId::parse("12abc"), RequestedId::Id(UserId::new(12)));
/// assert_eq!(RequestedId::parse("abc"), RequestedId::NotANumber);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestedId {
    /// A non-negative identifier that may match a stored user.
    Id(UserId),
    /// No leading digits were present.
    NotANumber,
    /// Digits were present but the value is negative or too large to be a
    /// stored identifier.
    OutOfRange,
}

impl RequestedId {
    /// Parse a raw path segment.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim_start();
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let digits: String = unsigned
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();

        if digits.is_empty() {
            return Self::NotANumber;
        }
        if negative {
            return Self::OutOfRange;
        }
        digits
            .parse::<u64>()
            .map_or(Self::OutOfRange, |raw| Self::Id(UserId::new(raw)))
    }

    /// Whether this request addresses the given stored identifier.
    pub fn matches(self, id: UserId) -> bool {
        matches!(self, Self::Id(requested) if requested == id)
    }
}

impl fmt::Display for RequestedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::NotANumber => f.write_str("NaN"),
            Self::OutOfRange => f.write_str("out-of-range"),
        }
    }
}

/// Stored user record.
///
/// ## Invariants
/// - `first_name` and `second_name` are non-empty when the record was created
///   or updated through [`crate::domain::validation`].
/// - `age` is kept as the JSON value supplied by the client: a number (with
///   integral values such as `30.0` stored as `30`) or a numeric string,
///   which is echoed back unchanged.
/// - `extra` never contains the known field names; an `id` supplied by a
///   client is dropped before it reaches the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    first_name: String,
    second_name: String,
    age: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    city: Option<String>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl User {
    /// Materialise a validated draft under the given identifier.
    pub fn from_draft(id: UserId, draft: UserDraft) -> Self {
        let UserDraft {
            first_name,
            second_name,
            age,
            city,
            extra,
        } = draft;
        Self {
            id,
            first_name,
            second_name,
            age,
            city,
            extra,
        }
    }

    /// Overwrite the four schema fields from a validated draft.
    ///
    /// The identifier and any pass-through fields stored with the record are
    /// left untouched; an absent `city` in the draft clears the stored one.
    pub fn apply(&mut self, draft: UserDraft) {
        self.first_name = draft.first_name;
        self.second_name = draft.second_name;
        self.age = draft.age;
        self.city = draft.city;
    }

    /// Stored identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Given name.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Family name.
    pub fn second_name(&self) -> &str {
        &self.second_name
    }

    /// Age as stored.
    pub fn age(&self) -> &Value {
        &self.age
    }

    /// Optional city.
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    /// Fields outside the schema carried through from creation.
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }
}

/// Validated create/update payload without an identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct UserDraft {
    first_name: String,
    second_name: String,
    age: Value,
    city: Option<String>,
    extra: Map<String, Value>,
}

impl UserDraft {
    /// Build a draft from already validated parts.
    pub fn new(
        first_name: impl Into<String>,
        second_name: impl Into<String>,
        age: impl Into<Value>,
        city: Option<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            second_name: second_name.into(),
            age: age.into(),
            city,
            extra: Map::new(),
        }
    }

    /// Attach pass-through fields, dropping any key the record manages itself.
    pub fn with_extra(mut self, mut extra: Map<String, Value>) -> Self {
        for key in RESERVED_KEYS {
            extra.remove(key);
        }
        self.extra = extra;
        self
    }

    /// Given name.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Pass-through fields.
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }
}

/// JSON keys owned by [`User`] itself.
pub(crate) const RESERVED_KEYS: [&str; 5] = ["id", "firstName", "secondName", "age", "city"];
