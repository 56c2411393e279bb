use std::collections::btree_map::{self, BTreeMap};
use std::str::FromStr;

/// Size of a TLV's type byte plus its 16-bit length field.
pub const TLV_OVERHEAD: usize = 3;

/// Metadata entries attached to a PROXY v2 header, keyed by TLV type.
///
/// Entries are buffered here and attached to the header in one go. Inserting
/// a type that is already present replaces its value, so a header never
/// carries the same type twice. Iteration (and therefore encoding) follows
/// ascending type order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TlvSet {
    entries: BTreeMap<u8, Vec<u8>>,
}

impl TlvSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a TLV, returning the value it replaced.
    pub fn insert(&mut self, kind: u8, value: impl Into<Vec<u8>>) -> Option<Vec<u8>> {
        self.entries.insert(kind, value.into())
    }

    /// Merge `other` into `self`; entries of `other` win on conflicting types.
    pub fn merge(&mut self, other: TlvSet) {
        self.entries.extend(other.entries);
    }

    pub fn get(&self, kind: u8) -> Option<&[u8]> {
        self.entries.get(&kind).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, &[u8])> {
        self.entries.iter().map(|(k, v)| (*k, v.as_slice()))
    }

    /// Bytes the set occupies once encoded as `type(1) length(2) value`.
    pub fn encoded_len(&self) -> usize {
        self.entries
            .values()
            .map(|value| TLV_OVERHEAD + value.len())
            .sum()
    }
}

impl FromIterator<(u8, Vec<u8>)> for TlvSet {
    fn from_iter<I: IntoIterator<Item = (u8, Vec<u8>)>>(iter: I) -> Self {
        let mut set = TlvSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<(u8, Vec<u8>)> for TlvSet {
    fn extend<I: IntoIterator<Item = (u8, Vec<u8>)>>(&mut self, iter: I) {
        for (kind, value) in iter {
            self.insert(kind, value);
        }
    }
}

impl IntoIterator for TlvSet {
    type Item = (u8, Vec<u8>);
    type IntoIter = btree_map::IntoIter<u8, Vec<u8>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// A `key=value` metadata argument from the command line.
///
/// `key` is a decimal TLV type (0-255). `value` is everything after the first
/// `=`, taken as its UTF-8 bytes, and must not be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataArg {
    pub key: u8,
    pub value: Vec<u8>,
}

impl FromStr for MetadataArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, value) = s
            .split_once('=')
            .ok_or_else(|| format!("Invalid metadata '{}': expected KEY=VALUE", s))?;

        let key = key.trim().parse::<u8>().map_err(|e| {
            format!(
                "Invalid metadata key '{}' in '{}': expected an integer 0-255 ({})",
                key, s, e
            )
        })?;

        if value.is_empty() {
            return Err(format!("Invalid metadata '{}': value is empty", s));
        }

        Ok(Self {
            key,
            value: value.as_bytes().to_vec(),
        })
    }
}
