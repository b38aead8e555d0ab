//! Form records for the Will Wizard
//!
//! Each repeatable section of the wizard edits an ordered list of one of
//! these records through [`crate::FieldList`]. Every record exposes typed
//! [`Field`] descriptors for single-attribute updates and a patch type for
//! multi-attribute merges.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::field_list::{Field, Record};
use crate::options::{ChildRelationship, GiftKind, MaritalStatus, Relationship};

/// Age at which a child no longer needs a guardian under Florida law
pub const AGE_OF_MAJORITY: u32 = 18;

/// State code used as the default residence for fiduciaries
pub const HOME_STATE: &str = "FL";

/// The person making the will
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Testator {
    pub full_name: String,
    pub birth_date: Option<NaiveDate>,
    /// Florida county of residence
    pub county: String,
    pub city: String,
    pub marital_status: MaritalStatus,
    /// Only meaningful when married
    pub spouse_name: String,
}

/// Partial update for [`Testator`]
#[derive(Debug, Clone, Default)]
pub struct TestatorPatch {
    pub full_name: Option<String>,
    pub birth_date: Option<Option<NaiveDate>>,
    pub county: Option<String>,
    pub city: Option<String>,
    pub marital_status: Option<MaritalStatus>,
    pub spouse_name: Option<String>,
}

impl Record for Testator {
    type Patch = TestatorPatch;

    fn merge(&mut self, patch: TestatorPatch) {
        if let Some(v) = patch.full_name {
            self.full_name = v;
        }
        if let Some(v) = patch.birth_date {
            self.birth_date = v;
        }
        if let Some(v) = patch.county {
            self.county = v;
        }
        if let Some(v) = patch.city {
            self.city = v;
        }
        if let Some(v) = patch.marital_status {
            self.marital_status = v;
        }
        if let Some(v) = patch.spouse_name {
            self.spouse_name = v;
        }
    }
}

/// One child of the testator
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Child {
    pub full_name: String,
    pub birth_date: Option<NaiveDate>,
    pub relationship: ChildRelationship,
}

impl Child {
    pub const FULL_NAME: Field<Child, String> =
        Field::new("full_name", |c: &mut Child, v: String| c.full_name = v);
    pub const BIRTH_DATE: Field<Child, Option<NaiveDate>> =
        Field::new("birth_date", |c: &mut Child, v: Option<NaiveDate>| c.birth_date = v);
    pub const RELATIONSHIP: Field<Child, ChildRelationship> = Field::new(
        "relationship",
        |c: &mut Child, v: ChildRelationship| c.relationship = v,
    );

    /// A child with only a name filled in
    pub fn named(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            ..Default::default()
        }
    }

    /// Whether the child is under the age of majority on `today`
    ///
    /// A child with no birth date is treated as an adult; a birth date after
    /// `today` counts as a minor.
    pub fn is_minor_on(&self, today: NaiveDate) -> bool {
        match self.birth_date {
            Some(born) => match today.years_since(born) {
                Some(age) => age < AGE_OF_MAJORITY,
                None => true,
            },
            None => false,
        }
    }
}

/// Partial update for [`Child`]
#[derive(Debug, Clone, Default)]
pub struct ChildPatch {
    pub full_name: Option<String>,
    pub birth_date: Option<Option<NaiveDate>>,
    pub relationship: Option<ChildRelationship>,
}

impl Record for Child {
    type Patch = ChildPatch;

    fn merge(&mut self, patch: ChildPatch) {
        if let Some(v) = patch.full_name {
            self.full_name = v;
        }
        if let Some(v) = patch.birth_date {
            self.birth_date = v;
        }
        if let Some(v) = patch.relationship {
            self.relationship = v;
        }
    }
}

/// A specific bequest made before the residuary estate is divided
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Gift {
    pub kind: GiftKind,
    /// Item or property description; a note for monetary gifts
    pub description: String,
    /// Whole US dollars, monetary gifts only
    pub amount: Option<u64>,
    pub recipient: String,
    pub recipient_relationship: Relationship,
}

impl Gift {
    pub const KIND: Field<Gift, GiftKind> = Field::new("kind", |g: &mut Gift, v: GiftKind| g.kind = v);
    pub const DESCRIPTION: Field<Gift, String> =
        Field::new("description", |g: &mut Gift, v: String| g.description = v);
    pub const AMOUNT: Field<Gift, Option<u64>> =
        Field::new("amount", |g: &mut Gift, v: Option<u64>| g.amount = v);
    pub const RECIPIENT: Field<Gift, String> =
        Field::new("recipient", |g: &mut Gift, v: String| g.recipient = v);
    pub const RECIPIENT_RELATIONSHIP: Field<Gift, Relationship> = Field::new(
        "recipient_relationship",
        |g: &mut Gift, v: Relationship| g.recipient_relationship = v,
    );
}

/// Partial update for [`Gift`]
#[derive(Debug, Clone, Default)]
pub struct GiftPatch {
    pub kind: Option<GiftKind>,
    pub description: Option<String>,
    pub amount: Option<Option<u64>>,
    pub recipient: Option<String>,
    pub recipient_relationship: Option<Relationship>,
}

impl Record for Gift {
    type Patch = GiftPatch;

    fn merge(&mut self, patch: GiftPatch) {
        if let Some(v) = patch.kind {
            self.kind = v;
        }
        if let Some(v) = patch.description {
            self.description = v;
        }
        if let Some(v) = patch.amount {
            self.amount = v;
        }
        if let Some(v) = patch.recipient {
            self.recipient = v;
        }
        if let Some(v) = patch.recipient_relationship {
            self.recipient_relationship = v;
        }
    }
}

/// A share of the residuary estate
///
/// List order is priority order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Beneficiary {
    pub full_name: String,
    pub relationship: Relationship,
    pub share_percent: u8,
}

impl Beneficiary {
    pub const FULL_NAME: Field<Beneficiary, String> =
        Field::new("full_name", |b: &mut Beneficiary, v: String| b.full_name = v);
    pub const RELATIONSHIP: Field<Beneficiary, Relationship> = Field::new(
        "relationship",
        |b: &mut Beneficiary, v: Relationship| b.relationship = v,
    );
    pub const SHARE_PERCENT: Field<Beneficiary, u8> =
        Field::new("share_percent", |b: &mut Beneficiary, v: u8| b.share_percent = v);

    pub fn named(full_name: impl Into<String>, share_percent: u8) -> Self {
        Self {
            full_name: full_name.into(),
            share_percent,
            ..Default::default()
        }
    }
}

/// Partial update for [`Beneficiary`]
#[derive(Debug, Clone, Default)]
pub struct BeneficiaryPatch {
    pub full_name: Option<String>,
    pub relationship: Option<Relationship>,
    pub share_percent: Option<u8>,
}

impl Record for Beneficiary {
    type Patch = BeneficiaryPatch;

    fn merge(&mut self, patch: BeneficiaryPatch) {
        if let Some(v) = patch.full_name {
            self.full_name = v;
        }
        if let Some(v) = patch.relationship {
            self.relationship = v;
        }
        if let Some(v) = patch.share_percent {
            self.share_percent = v;
        }
    }
}

/// A personal representative or guardian
///
/// Both are kept as ordered lists: the first entry serves, the rest are
/// alternates in sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fiduciary {
    pub full_name: String,
    pub relationship: Relationship,
    pub city: String,
    /// Two-letter state code
    pub state: String,
}

impl Default for Fiduciary {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            relationship: Relationship::default(),
            city: String::new(),
            state: HOME_STATE.to_string(),
        }
    }
}

impl Fiduciary {
    pub const FULL_NAME: Field<Fiduciary, String> =
        Field::new("full_name", |f: &mut Fiduciary, v: String| f.full_name = v);
    pub const RELATIONSHIP: Field<Fiduciary, Relationship> = Field::new(
        "relationship",
        |f: &mut Fiduciary, v: Relationship| f.relationship = v,
    );
    pub const CITY: Field<Fiduciary, String> =
        Field::new("city", |f: &mut Fiduciary, v: String| f.city = v);
    pub const STATE: Field<Fiduciary, String> =
        Field::new("state", |f: &mut Fiduciary, v: String| f.state = v);

    pub fn named(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            ..Default::default()
        }
    }

    /// Whether the fiduciary lives outside Florida
    pub fn is_nonresident(&self) -> bool {
        !self.state.eq_ignore_ascii_case(HOME_STATE)
    }
}

/// Partial update for [`Fiduciary`]
#[derive(Debug, Clone, Default)]
pub struct FiduciaryPatch {
    pub full_name: Option<String>,
    pub relationship: Option<Relationship>,
    pub city: Option<String>,
    pub state: Option<String>,
}

impl Record for Fiduciary {
    type Patch = FiduciaryPatch;

    fn merge(&mut self, patch: FiduciaryPatch) {
        if let Some(v) = patch.full_name {
            self.full_name = v;
        }
        if let Some(v) = patch.relationship {
            self.relationship = v;
        }
        if let Some(v) = patch.city {
            self.city = v;
        }
        if let Some(v) = patch.state {
            self.state = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn child_minor_boundary() {
        let today = date(2026, 10, 16);
        let mut child = Child::named("Sam");

        child.birth_date = Some(date(2008, 10, 17));
        assert!(child.is_minor_on(today));

        child.birth_date = Some(date(2008, 10, 16));
        assert!(!child.is_minor_on(today));
    }

    #[test]
    fn child_without_birth_date_is_adult() {
        assert!(!Child::named("Sam").is_minor_on(date(2026, 1, 1)));
    }

    #[test]
    fn child_born_after_today_is_minor() {
        let mut child = Child::named("Sam");
        child.birth_date = Some(date(2027, 1, 1));
        assert!(child.is_minor_on(date(2026, 1, 1)));
    }

    #[test]
    fn patch_leaves_unset_attributes() {
        let mut gift = Gift {
            kind: GiftKind::Monetary,
            description: "college fund".to_string(),
            amount: Some(5_000),
            recipient: "Ada".to_string(),
            recipient_relationship: Relationship::Grandchild,
        };
        gift.merge(GiftPatch {
            amount: Some(None),
            recipient: Some("Grace".to_string()),
            ..Default::default()
        });
        assert_eq!(gift.amount, None);
        assert_eq!(gift.recipient, "Grace");
        assert_eq!(gift.description, "college fund");
        assert_eq!(gift.recipient_relationship, Relationship::Grandchild);
    }

    #[test]
    fn fiduciary_defaults_to_home_state() {
        let rep = Fiduciary::named("Lee");
        assert_eq!(rep.state, "FL");
        assert!(!rep.is_nonresident());

        let mut out_of_state = rep.clone();
        Fiduciary::STATE.apply(&mut out_of_state, "GA".to_string());
        assert!(out_of_state.is_nonresident());
    }

    #[test]
    fn testator_merge() {
        let mut t = Testator::default();
        t.merge(TestatorPatch {
            full_name: Some("Jo Doe".to_string()),
            marital_status: Some(MaritalStatus::Married),
            ..Default::default()
        });
        assert_eq!(t.full_name, "Jo Doe");
        assert_eq!(t.marital_status, MaritalStatus::Married);
        assert!(t.county.is_empty());
    }
}
