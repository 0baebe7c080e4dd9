use std::{fmt, sync::Arc};

/// The value of a meshblock's district attribute.
///
/// Codes are never empty: blank attribute values are represented as
/// `Option::<DistrictCode>::None` by callers, see [`DistrictCode::parse`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DistrictCode(Arc<str>);

impl DistrictCode {
    /// Parse a raw attribute value, treating blank values as undefined.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() { return None }
        Some(Self(Arc::from(trimmed)))
    }

    #[inline] pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for DistrictCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The two districts an editing session is allowed to move meshblocks between.
/// Stored in lexicographic order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DistrictPair([DistrictCode; 2]);

impl DistrictPair {
    /// Build a pair from exactly two distinct codes, in any order.
    pub fn new(a: DistrictCode, b: DistrictCode) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self([a, b])),
            std::cmp::Ordering::Greater => Some(Self([b, a])),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Build a pair from a set of codes; succeeds only if it holds exactly two distinct codes.
    pub fn from_codes<'a>(codes: impl IntoIterator<Item = &'a DistrictCode>) -> Option<Self> {
        let mut distinct: Vec<&DistrictCode> = Vec::with_capacity(2);
        for code in codes {
            if distinct.contains(&code) { continue }
            if distinct.len() == 2 { return None }
            distinct.push(code);
        }
        match distinct.as_slice() {
            [a, b] => Self::new((*a).clone(), (*b).clone()),
            _ => None,
        }
    }

    #[inline] pub fn first(&self) -> &DistrictCode { &self.0[0] }

    #[inline] pub fn second(&self) -> &DistrictCode { &self.0[1] }

    #[inline] pub fn contains(&self, code: &DistrictCode) -> bool { self.0.contains(code) }

    /// The member of the pair that is not `code`, or `None` if `code` is not in the pair.
    pub fn other(&self, code: &DistrictCode) -> Option<&DistrictCode> {
        if *code == self.0[0] { Some(&self.0[1]) }
        else if *code == self.0[1] { Some(&self.0[0]) }
        else { None }
    }
}

impl fmt::Display for DistrictPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.0[0], self.0[1])
    }
}
