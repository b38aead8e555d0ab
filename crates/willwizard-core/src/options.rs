//! Static option tables for wizard dropdowns
//!
//! Jurisdiction lists and the enumerated choices offered by the form's
//! select inputs. Labels returned by `as_str` are what the UI shows and what
//! `from_label` accepts back.

use serde::{Deserialize, Serialize};

/// All 67 Florida counties, alphabetical
pub const FLORIDA_COUNTIES: &[&str] = &[
    "Alachua",
    "Baker",
    "Bay",
    "Bradford",
    "Brevard",
    "Broward",
    "Calhoun",
    "Charlotte",
    "Citrus",
    "Clay",
    "Collier",
    "Columbia",
    "DeSoto",
    "Dixie",
    "Duval",
    "Escambia",
    "Flagler",
    "Franklin",
    "Gadsden",
    "Gilchrist",
    "Glades",
    "Gulf",
    "Hamilton",
    "Hardee",
    "Hendry",
    "Hernando",
    "Highlands",
    "Hillsborough",
    "Holmes",
    "Indian River",
    "Jackson",
    "Jefferson",
    "Lafayette",
    "Lake",
    "Lee",
    "Leon",
    "Levy",
    "Liberty",
    "Madison",
    "Manatee",
    "Marion",
    "Martin",
    "Miami-Dade",
    "Monroe",
    "Nassau",
    "Okaloosa",
    "Okeechobee",
    "Orange",
    "Osceola",
    "Palm Beach",
    "Pasco",
    "Pinellas",
    "Polk",
    "Putnam",
    "Santa Rosa",
    "Sarasota",
    "Seminole",
    "St. Johns",
    "St. Lucie",
    "Sumter",
    "Suwannee",
    "Taylor",
    "Union",
    "Volusia",
    "Wakulla",
    "Walton",
    "Washington",
];

/// US states plus the District of Columbia as (code, name)
pub const US_STATES: &[(&str, &str)] = &[
    ("AL", "Alabama"),
    ("AK", "Alaska"),
    ("AZ", "Arizona"),
    ("AR", "Arkansas"),
    ("CA", "California"),
    ("CO", "Colorado"),
    ("CT", "Connecticut"),
    ("DE", "Delaware"),
    ("DC", "District of Columbia"),
    ("FL", "Florida"),
    ("GA", "Georgia"),
    ("HI", "Hawaii"),
    ("ID", "Idaho"),
    ("IL", "Illinois"),
    ("IN", "Indiana"),
    ("IA", "Iowa"),
    ("KS", "Kansas"),
    ("KY", "Kentucky"),
    ("LA", "Louisiana"),
    ("ME", "Maine"),
    ("MD", "Maryland"),
    ("MA", "Massachusetts"),
    ("MI", "Michigan"),
    ("MN", "Minnesota"),
    ("MS", "Mississippi"),
    ("MO", "Missouri"),
    ("MT", "Montana"),
    ("NE", "Nebraska"),
    ("NV", "Nevada"),
    ("NH", "New Hampshire"),
    ("NJ", "New Jersey"),
    ("NM", "New Mexico"),
    ("NY", "New York"),
    ("NC", "North Carolina"),
    ("ND", "North Dakota"),
    ("OH", "Ohio"),
    ("OK", "Oklahoma"),
    ("OR", "Oregon"),
    ("PA", "Pennsylvania"),
    ("RI", "Rhode Island"),
    ("SC", "South Carolina"),
    ("SD", "South Dakota"),
    ("TN", "Tennessee"),
    ("TX", "Texas"),
    ("UT", "Utah"),
    ("VT", "Vermont"),
    ("VA", "Virginia"),
    ("WA", "Washington"),
    ("WV", "West Virginia"),
    ("WI", "Wisconsin"),
    ("WY", "Wyoming"),
];

/// Whether `name` is a Florida county (case-insensitive, surrounding
/// whitespace ignored)
pub fn is_florida_county(name: &str) -> bool {
    let name = name.trim();
    FLORIDA_COUNTIES
        .iter()
        .any(|county| county.eq_ignore_ascii_case(name))
}

/// Full name for a two-letter state code
pub fn state_name(code: &str) -> Option<&'static str> {
    US_STATES
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code.trim()))
        .map(|(_, name)| *name)
}

/// Testator's marital status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MaritalStatus {
    #[default]
    Single,
    Married,
    Divorced,
    Widowed,
}

impl MaritalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaritalStatus::Single => "Single",
            MaritalStatus::Married => "Married",
            MaritalStatus::Divorced => "Divorced",
            MaritalStatus::Widowed => "Widowed",
        }
    }

    pub fn all() -> &'static [MaritalStatus] {
        &[
            MaritalStatus::Single,
            MaritalStatus::Married,
            MaritalStatus::Divorced,
            MaritalStatus::Widowed,
        ]
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.as_str() == label)
    }
}

/// Relationship of a recipient or fiduciary to the testator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Relationship {
    Spouse,
    Child,
    Grandchild,
    Parent,
    Sibling,
    NieceOrNephew,
    OtherRelative,
    #[default]
    Friend,
    Charity,
}

impl Relationship {
    pub fn as_str(&self) -> &'static str {
        match self {
            Relationship::Spouse => "Spouse",
            Relationship::Child => "Child",
            Relationship::Grandchild => "Grandchild",
            Relationship::Parent => "Parent",
            Relationship::Sibling => "Sibling",
            Relationship::NieceOrNephew => "Niece / Nephew",
            Relationship::OtherRelative => "Other relative",
            Relationship::Friend => "Friend",
            Relationship::Charity => "Charity",
        }
    }

    pub fn all() -> &'static [Relationship] {
        &[
            Relationship::Spouse,
            Relationship::Child,
            Relationship::Grandchild,
            Relationship::Parent,
            Relationship::Sibling,
            Relationship::NieceOrNephew,
            Relationship::OtherRelative,
            Relationship::Friend,
            Relationship::Charity,
        ]
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.as_str() == label)
    }

    /// Florida lets a nonresident serve as personal representative only
    /// when related to the testator
    pub fn is_family(&self) -> bool {
        !matches!(self, Relationship::Friend | Relationship::Charity)
    }
}

/// How a child is related to the testator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChildRelationship {
    #[default]
    Biological,
    Adopted,
    Stepchild,
}

impl ChildRelationship {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChildRelationship::Biological => "Biological",
            ChildRelationship::Adopted => "Adopted",
            ChildRelationship::Stepchild => "Stepchild",
        }
    }

    pub fn all() -> &'static [ChildRelationship] {
        &[
            ChildRelationship::Biological,
            ChildRelationship::Adopted,
            ChildRelationship::Stepchild,
        ]
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.as_str() == label)
    }
}

/// Kind of specific gift
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GiftKind {
    #[default]
    Monetary,
    SpecificItem,
    RealProperty,
}

impl GiftKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GiftKind::Monetary => "Money",
            GiftKind::SpecificItem => "Specific item",
            GiftKind::RealProperty => "Real property",
        }
    }

    pub fn all() -> &'static [GiftKind] {
        &[GiftKind::Monetary, GiftKind::SpecificItem, GiftKind::RealProperty]
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.as_str() == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn florida_has_67_counties() {
        assert_eq!(FLORIDA_COUNTIES.len(), 67);
        let mut sorted = FLORIDA_COUNTIES.to_vec();
        sorted.sort_by_key(|c| c.to_ascii_lowercase());
        assert_eq!(sorted, FLORIDA_COUNTIES);
    }

    #[test]
    fn county_lookup() {
        assert!(is_florida_county("Miami-Dade"));
        assert!(is_florida_county("  palm beach "));
        assert!(!is_florida_county("Cook"));
        assert!(!is_florida_county(""));
    }

    #[test]
    fn state_lookup() {
        assert_eq!(US_STATES.len(), 51);
        assert_eq!(state_name("fl"), Some("Florida"));
        assert_eq!(state_name("DC"), Some("District of Columbia"));
        assert_eq!(state_name("XX"), None);
    }

    #[test]
    fn labels_round_trip() {
        for status in MaritalStatus::all() {
            assert_eq!(MaritalStatus::from_label(status.as_str()), Some(*status));
        }
        for rel in Relationship::all() {
            assert_eq!(Relationship::from_label(rel.as_str()), Some(*rel));
        }
        for rel in ChildRelationship::all() {
            assert_eq!(ChildRelationship::from_label(rel.as_str()), Some(*rel));
        }
        for kind in GiftKind::all() {
            assert_eq!(GiftKind::from_label(kind.as_str()), Some(*kind));
        }
        assert_eq!(GiftKind::from_label("Cash"), None);
    }

    #[test]
    fn family_relationships() {
        assert!(Relationship::Sibling.is_family());
        assert!(!Relationship::Friend.is_family());
        assert!(!Relationship::Charity.is_family());
    }
}
