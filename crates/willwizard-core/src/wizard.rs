//! Wizard answers, step navigation, and per-step validation

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::WizardResult;
use crate::options::{is_florida_county, GiftKind, MaritalStatus};
use crate::types::{Beneficiary, Child, Fiduciary, Gift, Testator};

/// Total the residuary shares must add up to
pub const FULL_ESTATE_PERCENT: u32 = 100;

/// Everything the wizard collects for one will
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WillAnswers {
    pub terms_accepted: bool,
    pub testator: Testator,
    pub children: Vec<Child>,
    pub gifts: Vec<Gift>,
    /// Residuary estate, in priority order
    pub beneficiaries: Vec<Beneficiary>,
    /// Personal representatives; first serves, the rest are alternates
    pub representatives: Vec<Fiduciary>,
    /// Guardians for minor children, in the same primary-then-alternates order
    pub guardians: Vec<Fiduciary>,
}

impl WillAnswers {
    /// Pretty-printed JSON export
    pub fn to_json(&self) -> WizardResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse answers previously exported with [`WillAnswers::to_json`]
    pub fn from_json(json: &str) -> WizardResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Whether any child is a minor on `today`
    pub fn has_minor_children(&self, today: NaiveDate) -> bool {
        self.children.iter().any(|c| c.is_minor_on(today))
    }

    /// Sum of all residuary shares
    pub fn residuary_total(&self) -> u32 {
        self.beneficiaries
            .iter()
            .map(|b| u32::from(b.share_percent))
            .sum()
    }
}

/// Wizard pages, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardStep {
    Terms,
    Personal,
    Family,
    Gifts,
    Residuary,
    Representatives,
    Review,
}

impl WizardStep {
    pub fn all() -> &'static [WizardStep] {
        &[
            WizardStep::Terms,
            WizardStep::Personal,
            WizardStep::Family,
            WizardStep::Gifts,
            WizardStep::Residuary,
            WizardStep::Representatives,
            WizardStep::Review,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Terms => "Terms of Service",
            WizardStep::Personal => "About You",
            WizardStep::Family => "Your Family",
            WizardStep::Gifts => "Specific Gifts",
            WizardStep::Residuary => "Remainder of Your Estate",
            WizardStep::Representatives => "Personal Representative & Guardians",
            WizardStep::Review => "Review",
        }
    }

    /// Zero-based position in [`WizardStep::all`]
    pub fn index(&self) -> usize {
        Self::all()
            .iter()
            .position(|s| s == self)
            .unwrap_or_default()
    }

    pub fn next(&self) -> Option<WizardStep> {
        Self::all().get(self.index() + 1).copied()
    }

    pub fn prev(&self) -> Option<WizardStep> {
        self.index()
            .checked_sub(1)
            .and_then(|i| Self::all().get(i).copied())
    }
}

/// A problem that keeps a step from being complete
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub step: WizardStep,
    /// Row within the step's repeatable section, if the issue is row-specific
    pub row: Option<usize>,
    pub message: String,
}

impl ValidationIssue {
    fn new(step: WizardStep, message: impl Into<String>) -> Self {
        Self {
            step,
            row: None,
            message: message.into(),
        }
    }

    fn at(step: WizardStep, row: usize, message: impl Into<String>) -> Self {
        Self {
            step,
            row: Some(row),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.row {
            Some(row) => write!(f, "#{}: {}", row + 1, self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Check one step of `answers`
///
/// `today` decides which children are minors.
pub fn validate_step(answers: &WillAnswers, step: WizardStep, today: NaiveDate) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    match step {
        WizardStep::Terms => {
            if !answers.terms_accepted {
                issues.push(ValidationIssue::new(step, "Accept the terms of service to continue"));
            }
        }
        WizardStep::Personal => {
            let t = &answers.testator;
            if t.full_name.trim().is_empty() {
                issues.push(ValidationIssue::new(step, "Enter your full legal name"));
            }
            if !is_florida_county(&t.county) {
                issues.push(ValidationIssue::new(step, "Choose your Florida county of residence"));
            }
            if t.marital_status == MaritalStatus::Married && t.spouse_name.trim().is_empty() {
                issues.push(ValidationIssue::new(step, "Enter your spouse's name"));
            }
        }
        WizardStep::Family => {
            for (i, child) in answers.children.iter().enumerate() {
                if child.full_name.trim().is_empty() {
                    issues.push(ValidationIssue::at(step, i, "Child's name is required"));
                }
            }
        }
        WizardStep::Gifts => {
            for (i, gift) in answers.gifts.iter().enumerate() {
                if gift.recipient.trim().is_empty() {
                    issues.push(ValidationIssue::at(step, i, "Recipient is required"));
                }
                match gift.kind {
                    GiftKind::Monetary => {
                        if gift.amount.unwrap_or(0) == 0 {
                            issues.push(ValidationIssue::at(step, i, "Enter an amount greater than zero"));
                        }
                    }
                    GiftKind::SpecificItem | GiftKind::RealProperty => {
                        if gift.description.trim().is_empty() {
                            issues.push(ValidationIssue::at(step, i, "Describe the gift"));
                        }
                    }
                }
            }
        }
        WizardStep::Residuary => {
            if answers.beneficiaries.is_empty() {
                issues.push(ValidationIssue::new(step, "Name at least one beneficiary"));
            }
            for (i, b) in answers.beneficiaries.iter().enumerate() {
                if b.full_name.trim().is_empty() {
                    issues.push(ValidationIssue::at(step, i, "Beneficiary's name is required"));
                }
                if b.share_percent == 0 {
                    issues.push(ValidationIssue::at(step, i, "Share must be greater than zero"));
                }
            }
            let total = answers.residuary_total();
            if !answers.beneficiaries.is_empty() && total != FULL_ESTATE_PERCENT {
                issues.push(ValidationIssue::new(
                    step,
                    format!("Shares add up to {}%, not {}%", total, FULL_ESTATE_PERCENT),
                ));
            }
        }
        WizardStep::Representatives => {
            if answers.representatives.is_empty() {
                issues.push(ValidationIssue::new(step, "Name a personal representative"));
            }
            for (i, rep) in answers.representatives.iter().enumerate() {
                if rep.full_name.trim().is_empty() {
                    issues.push(ValidationIssue::at(step, i, "Personal representative's name is required"));
                } else if rep.is_nonresident() && !rep.relationship.is_family() {
                    issues.push(ValidationIssue::at(
                        step,
                        i,
                        "A personal representative living outside Florida must be a relative",
                    ));
                }
            }
            if answers.has_minor_children(today) && answers.guardians.is_empty() {
                issues.push(ValidationIssue::new(step, "Name a guardian for your minor children"));
            }
            for (i, guardian) in answers.guardians.iter().enumerate() {
                if guardian.full_name.trim().is_empty() {
                    issues.push(ValidationIssue::at(step, i, "Guardian's name is required"));
                }
            }
        }
        WizardStep::Review => {}
    }

    if !issues.is_empty() {
        debug!(step = step.title(), count = issues.len(), "step has validation issues");
    }
    issues
}

/// First step, in wizard order, that still has validation issues
pub fn first_incomplete_step(answers: &WillAnswers, today: NaiveDate) -> Option<WizardStep> {
    WizardStep::all()
        .iter()
        .copied()
        .find(|step| !validate_step(answers, *step, today).is_empty())
}

/// Plain-text review lines describing the answers
pub fn summary_lines(answers: &WillAnswers, today: NaiveDate) -> Vec<String> {
    let mut lines = Vec::new();
    let t = &answers.testator;

    lines.push(format!("Testator: {}, {} County, Florida", t.full_name, t.county));
    if t.marital_status == MaritalStatus::Married {
        lines.push(format!("Spouse: {}", t.spouse_name));
    } else {
        lines.push(format!("Marital status: {}", t.marital_status.as_str()));
    }

    let minors = answers
        .children
        .iter()
        .filter(|c| c.is_minor_on(today))
        .count();
    if answers.children.is_empty() {
        lines.push("Children: none".to_string());
    } else {
        let names: Vec<&str> = answers.children.iter().map(|c| c.full_name.as_str()).collect();
        lines.push(format!(
            "Children: {} ({} minor)",
            names.join(", "),
            minors
        ));
    }

    for gift in &answers.gifts {
        let what = match (gift.kind, gift.amount) {
            (GiftKind::Monetary, Some(amount)) => format_dollars(amount),
            _ => gift.description.clone(),
        };
        lines.push(format!(
            "Gift: {} to {} ({})",
            what,
            gift.recipient,
            gift.recipient_relationship.as_str()
        ));
    }

    for b in &answers.beneficiaries {
        lines.push(format!("Residuary: {}% to {}", b.share_percent, b.full_name));
    }

    lines.extend(fiduciary_line("Personal representative", &answers.representatives));
    lines.extend(fiduciary_line("Guardian", &answers.guardians));

    lines
}

fn fiduciary_line(role: &str, list: &[Fiduciary]) -> Option<String> {
    let (first, alternates) = list.split_first()?;
    if alternates.is_empty() {
        Some(format!("{}: {}", role, first.full_name))
    } else {
        let names: Vec<&str> = alternates.iter().map(|f| f.full_name.as_str()).collect();
        Some(format!(
            "{}: {} (alternates: {})",
            role,
            first.full_name,
            names.join(", ")
        ))
    }
}

/// Split 100% into `count` whole-number shares, earlier shares taking the
/// remainder
pub fn even_shares(count: usize) -> Vec<u8> {
    if count == 0 || count > FULL_ESTATE_PERCENT as usize {
        return Vec::new();
    }
    let base = FULL_ESTATE_PERCENT as usize / count;
    let remainder = FULL_ESTATE_PERCENT as usize % count;
    (0..count)
        .map(|i| (base + usize::from(i < remainder)) as u8)
        .collect()
}

/// `$1,234,567` style formatting for whole dollars
pub fn format_dollars(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
