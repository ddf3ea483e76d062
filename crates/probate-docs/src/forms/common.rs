//! Pieces shared by more than one form.

use crate::document::{Block, ClauseTable};
use crate::estate::{Applicant, EstateModel, GrantType};
use crate::format::{address_or_blank, join_list, or_blank, Composer, ParagraphOptions};

pub(crate) const NONE: &str = "None.";

/// Clause table evaluated against the whole estate model.
pub(crate) type ModelClauses = ClauseTable<EstateModel>;

/// The people swearing one affidavit. A joint affidavit is one group holding
/// every applicant; otherwise each applicant swears separately.
#[derive(Debug, Clone)]
pub(crate) struct Deponents<'m> {
    /// 1-based position of the first member among all applicants.
    pub first_index: usize,
    pub members: Vec<&'m Applicant>,
}

impl<'m> Deponents<'m> {
    pub fn names(&self) -> Vec<String> {
        self.members
            .iter()
            .map(|applicant| applicant.display_name())
            .collect()
    }

    pub fn is_joint(&self) -> bool {
        self.members.len() > 1
    }

    /// `I` or `We` for the opening of each paragraph.
    pub fn pronoun(&self) -> &'static str {
        if self.is_joint() {
            "We"
        } else {
            "I"
        }
    }

    pub fn place(&self) -> String {
        self.members
            .first()
            .map(|applicant| applicant.address.city.trim().to_string())
            .unwrap_or_default()
    }

    /// "I, Jane Doe, of 1 Main St, Victoria, SWEAR (OR AFFIRM) THAT:"
    pub fn introduction(&self) -> String {
        if self.members.is_empty() {
            return format!(
                "I, {}, of {}, SWEAR (OR AFFIRM) THAT:",
                or_blank("", 30),
                or_blank("", 40)
            );
        }

        let parts: Vec<String> = self
            .members
            .iter()
            .map(|applicant| {
                format!(
                    "{}, of {}",
                    or_blank(&applicant.display_name(), 30),
                    address_or_blank(&applicant.address, 40)
                )
            })
            .collect();
        format!("{}, {}, SWEAR (OR AFFIRM) THAT:", self.pronoun(), join_list(&parts))
    }
}

/// Every applicant in one group, for affidavits that are always sworn jointly.
pub(crate) fn all_applicants(model: &EstateModel) -> Deponents<'_> {
    Deponents {
        first_index: 1,
        members: model.applicants.iter().collect(),
    }
}

pub(crate) fn deponent_groups(model: &EstateModel) -> Vec<Deponents<'_>> {
    if model.applicants.is_empty() {
        return vec![Deponents {
            first_index: 1,
            members: Vec::new(),
        }];
    }

    if model.filing.joint_affidavit {
        return vec![Deponents {
            first_index: 1,
            members: model.applicants.iter().collect(),
        }];
    }

    model
        .applicants
        .iter()
        .enumerate()
        .map(|(idx, applicant)| Deponents {
            first_index: idx + 1,
            members: vec![applicant],
        })
        .collect()
}

pub(crate) fn deceased_name(model: &EstateModel) -> String {
    or_blank(&model.deceased.name.display(), 30)
}

/// Court caption printed at the top of every filed form.
pub(crate) fn court_caption(compose: &Composer<'_>, model: &EstateModel) -> Vec<Block> {
    vec![
        compose.paragraph(
            "IN THE SUPREME COURT OF BRITISH COLUMBIA",
            ParagraphOptions::default().bold().centered(),
        ),
        compose.paragraph(
            format!(
                "IN THE MATTER OF THE ESTATE OF {}, DECEASED",
                deceased_name(model).to_uppercase()
            ),
            ParagraphOptions::default().centered(),
        ),
    ]
}

pub(crate) fn form_reference(compose: &Composer<'_>, form: &str, rule: &str) -> Block {
    compose.small(
        format!("Form {form} ({rule})"),
        ParagraphOptions::default().italic(),
    )
}

/// The applicant affidavit a grant calls for.
pub(crate) const fn applicant_affidavit_form(grant: GrantType) -> &'static str {
    match grant {
        GrantType::Probate | GrantType::AdministrationWithWill => "P3",
        GrantType::AdministrationWithoutWill => "P5",
        GrantType::AncillaryProbate | GrantType::AncillaryAdministrationWithWill => "P6",
        GrantType::AncillaryAdministrationWithoutWill => "P7",
    }
}

/// `applicant_standing.2` style ids keep per-deponent groups distinct.
pub(crate) fn numbered_id(group: &str, index: usize) -> String {
    format!("{group}.{index}")
}
