use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// SPF mechanism an address entry came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum AddressKind {
    Ip4,
    Ip6,
}

/// One parsed `ip4:`/`ip6:` mechanism.
///
/// `range` is kept verbatim, including any `/prefix` suffix.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AddressEntry {
    pub kind: AddressKind,
    pub range: String,
}

impl AddressEntry {
    pub fn ip4(range: impl Into<String>) -> Self {
        Self {
            kind: AddressKind::Ip4,
            range: range.into(),
        }
    }

    pub fn ip6(range: impl Into<String>) -> Self {
        Self {
            kind: AddressKind::Ip6,
            range: range.into(),
        }
    }
}

/// The address-bearing part of an already parsed SPF record.
///
/// Includes are expected to be flattened by the parser before they get here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SpfRecord {
    #[serde(default)]
    pub ip4: Vec<AddressEntry>,
    #[serde(default)]
    pub ip6: Vec<AddressEntry>,
}

impl SpfRecord {
    /// `ip4` entries first, then `ip6`.
    pub fn entries(&self) -> impl Iterator<Item = &AddressEntry> {
        self.ip4.iter().chain(self.ip6.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.ip4.is_empty() && self.ip6.is_empty()
    }
}

/// Anything that can hand the engine an address-range string.
pub trait RangeSource {
    fn range(&self) -> &str;
}

impl RangeSource for AddressEntry {
    fn range(&self) -> &str {
        &self.range
    }
}

impl RangeSource for str {
    fn range(&self) -> &str {
        self
    }
}

impl RangeSource for String {
    fn range(&self) -> &str {
        self
    }
}

impl<T: RangeSource + ?Sized> RangeSource for &T {
    fn range(&self) -> &str {
        (**self).range()
    }
}
