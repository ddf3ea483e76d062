//! Affidavit of applicant for grant of administration without will annexed
//! (Form P5).
//!
//! Paragraph 2 carries the priority narrative. Which paragraph applies is a
//! function of the deponent's relationship to the deceased and, for children,
//! of whether a spouse survived.

use super::common::{
    court_caption, deceased_name, deponent_groups, form_reference, numbered_id, Deponents,
    ModelClauses, NONE,
};
use crate::document::{ClauseTable, DocumentContent, DocumentKind, Section};
use crate::estate::{Applicant, EstateModel, Relationship, SpouseStatus};
use crate::format::{
    blank_filler, format_date, letter_marker, or_blank, Composer, ParagraphOptions, StyleProfile,
};

/// Facts the priority clause is selected on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityFacts {
    pub relationship: Relationship,
    pub spouse: SpouseStatus,
}

impl PriorityFacts {
    pub fn new(applicant: &Applicant, model: &EstateModel) -> Self {
        Self {
            relationship: applicant.relationship.clone(),
            spouse: model.family.spouse.status,
        }
    }
}

pub(crate) fn priority() -> ClauseTable<PriorityFacts> {
    ClauseTable::<PriorityFacts>::new("priority", "unspecified")
        .clause("spouse", |facts| facts.relationship == Relationship::Spouse)
        .clause("child_with_surviving_spouse", |facts| {
            facts.relationship == Relationship::Child && facts.spouse == SpouseStatus::Surviving
        })
        .clause("child_without_spouse", |facts| {
            facts.relationship == Relationship::Child && facts.spouse != SpouseStatus::Surviving
        })
        .clause("grandchild", |facts| {
            facts.relationship == Relationship::Grandchild
        })
        .clause("parent", |facts| facts.relationship == Relationship::Parent)
        .clause("sibling", |facts| facts.relationship == Relationship::Sibling)
        .clause("other_relationship", |facts| {
            matches!(facts.relationship, Relationship::Other(_))
        })
}

pub(crate) fn spouse_status() -> ModelClauses {
    ModelClauses::new("spouse_status", "unknown")
        .clause("surviving", |model| {
            model.family.spouse.status == SpouseStatus::Surviving
        })
        .clause("deceased", |model| {
            model.family.spouse.status == SpouseStatus::Deceased
        })
        .clause("never_married", |model| {
            model.family.spouse.status == SpouseStatus::NeverMarried
        })
}

pub(crate) fn children() -> ModelClauses {
    ModelClauses::new("children", "none")
        .clause("listed", |model| !model.family.children.is_empty())
}

pub(crate) fn intestate_successors() -> ModelClauses {
    ModelClauses::new("intestate_successors", "none")
        .clause("listed", |model| !model.family.intestate_successors.is_empty())
}

pub fn generate(model: &EstateModel, style: &StyleProfile) -> DocumentContent {
    let compose = Composer::new(style);
    let mut document = DocumentContent::new(
        DocumentKind::AdministrationAffidavit,
        "AFFIDAVIT OF APPLICANT FOR GRANT OF ADMINISTRATION WITHOUT WILL ANNEXED",
        style,
    );

    for (idx, deponents) in deponent_groups(model).iter().enumerate() {
        document.push(affidavit(&compose, model, deponents, idx + 1));
    }

    document
}

fn priority_options(applicant: &Applicant, model: &EstateModel) -> Vec<(&'static str, String)> {
    let deceased = deceased_name(model);
    let spouse = or_blank(&model.family.spouse.name, 30);
    vec![
        (
            "spouse",
            format!(
                "is the spouse of {deceased} and, under section 130 of the Wills, Estates and \
                 Succession Act, has priority to apply for a grant of administration."
            ),
        ),
        (
            "child_with_surviving_spouse",
            format!(
                "is a child of {deceased}. The surviving spouse, {spouse}, has renounced the \
                 right to apply or consents to this application, and the applicant applies \
                 with the consent of a majority of the children of the deceased."
            ),
        ),
        (
            "child_without_spouse",
            format!(
                "is a child of {deceased}, who left no surviving spouse, and applies with the \
                 consent of a majority of the children of the deceased."
            ),
        ),
        (
            "grandchild",
            format!(
                "is a grandchild of {deceased}. No spouse or child of the deceased is applying \
                 and the applicant is an intestate successor entitled to apply."
            ),
        ),
        (
            "parent",
            format!(
                "is a parent of {deceased}. The deceased left no spouse or descendant entitled \
                 to apply."
            ),
        ),
        (
            "sibling",
            format!(
                "is a sibling of {deceased}. The deceased left no spouse, descendant or parent \
                 entitled to apply."
            ),
        ),
        (
            "other_relationship",
            format!(
                "is the {} of {deceased} and applies as a person with priority under section \
                 130 of the Wills, Estates and Succession Act, no person with a prior right \
                 being willing or able to apply.",
                or_blank(applicant.relationship.label(), 20)
            ),
        ),
        (
            "unspecified",
            format!(
                "applies as {} of {deceased} on the following basis: {}",
                blank_filler(20),
                blank_filler(40)
            ),
        ),
    ]
}

fn affidavit(
    compose: &Composer<'_>,
    model: &EstateModel,
    deponents: &Deponents<'_>,
    number: usize,
) -> Section {
    let mut section = Section::new(numbered_id("affidavit", number));
    if number > 1 {
        section.push(compose.page_break());
    }

    section.push(form_reference(compose, "P5", "Rule 25-3 (2)"));
    section.extend(court_caption(compose, model));
    section.push(compose.title(
        "AFFIDAVIT OF APPLICANT FOR GRANT OF ADMINISTRATION WITHOUT WILL ANNEXED",
    ));
    section.push(compose.paragraph(
        deponents.introduction(),
        ParagraphOptions::default().bold(),
    ));

    let pronoun = deponents.pronoun();
    let (be, my) = if deponents.is_joint() {
        ("are", "our")
    } else {
        ("am", "my")
    };
    let role = if deponents.is_joint() {
        "the applicants"
    } else {
        "an applicant"
    };

    section.push(compose.numbered(
        "1.",
        format!(
            "{pronoun} {be} {role} for a grant of administration without will annexed in \
             relation to the estate of {}, deceased, who died on {}.",
            deceased_name(model),
            format_date(model.deceased.date_of_death, 20)
        ),
    ));

    section.push(compose.numbered("2.", format!("As to {my} priority to apply:")));
    let members: Vec<Option<&Applicant>> = if deponents.members.is_empty() {
        vec![None]
    } else {
        deponents.members.iter().copied().map(Some).collect()
    };
    let fallback_applicant = Applicant::default();
    for (offset, applicant) in members.into_iter().enumerate() {
        let applicant = applicant.unwrap_or(&fallback_applicant);
        let selection = priority().select(&PriorityFacts::new(applicant, model));
        let name = or_blank(&applicant.display_name(), 30);
        section.push(compose.choice(
            numbered_id(selection.group, deponents.first_index + offset),
            Some(format!("{name}:")),
            &selection,
            priority_options(applicant, model),
        ));
    }

    section.push(compose.numbered(
        "3.",
        format!(
            "{pronoun} have made a diligent search for a will of the deceased and none has \
             been found. The results of the search for a wills notice are reflected in the \
             submission for estate grant."
        ),
    ));

    let selection = spouse_status().select(model);
    section.push(compose.numbered("4.", "As to the spouse of the deceased:"));
    let spouse = or_blank(&model.family.spouse.name, 30);
    section.push(compose.choice(
        selection.group,
        None,
        &selection,
        vec![
            (
                "surviving",
                format!("The deceased was survived by a spouse, {spouse}."),
            ),
            (
                "deceased",
                format!("The spouse of the deceased, {spouse}, died before the deceased."),
            ),
            (
                "never_married",
                "The deceased never had a spouse.".to_string(),
            ),
            (
                "unknown",
                format!("As to a spouse of the deceased: {}", blank_filler(40)),
            ),
        ],
    ));

    let selection = children().select(model);
    section.push(compose.numbered("5.", "As to the children of the deceased:"));
    section.push(compose.choice(
        selection.group,
        None,
        &selection,
        vec![
            (
                "listed",
                "The deceased had the following children:".to_string(),
            ),
            (
                "none",
                "The deceased had no children.".to_string(),
            ),
        ],
    ));
    for (idx, child) in model.family.children.iter().enumerate() {
        let status = if child.surviving {
            ""
        } else {
            " (predeceased the deceased)"
        };
        section.push(compose.numbered_at(
            letter_marker(idx),
            format!("{}{status}", or_blank(&child.name, 30)),
            2,
        ));
    }

    let selection = intestate_successors().select(model);
    section.push(compose.numbered(
        "6.",
        "As to the intestate successors of the deceased:",
    ));
    section.push(compose.choice(
        selection.group,
        None,
        &selection,
        vec![
            (
                "listed",
                "The following persons are entitled to share in the estate on an intestacy:"
                    .to_string(),
            ),
            ("none", NONE.to_string()),
        ],
    ));
    for (idx, successor) in model.family.intestate_successors.iter().enumerate() {
        let relationship = successor.relationship.trim();
        let text = if relationship.is_empty() {
            or_blank(&successor.name, 30)
        } else {
            format!("{}, {relationship}", or_blank(&successor.name, 30))
        };
        section.push(compose.numbered_at(letter_marker(idx), text, 2));
    }

    section.push(compose.numbered(
        "7.",
        format!(
            "{pronoun} will administer the estate according to law, will deliver the notices \
             required under Rule 25-2 and will prepare an accounting as to how the estate was \
             administered."
        ),
    ));

    section.push(compose.jurat(&deponents.place(), None, &deponents.names()));
    section
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estate::{FamilyMember, GrantType, IntestateSuccessor};
    use crate::forms::fixtures::{
        applicant, assert_exclusive, assert_single_choice, model_grid, probate_model,
    };

    const GROUPS: [&str; 4] = [
        "priority",
        "spouse_status",
        "children",
        "intestate_successors",
    ];

    fn administration_model(relationship: Relationship, spouse: SpouseStatus) -> EstateModel {
        let mut model = probate_model();
        model.grant_type = GrantType::AdministrationWithoutWill;
        model.will = None;
        model.applicants = vec![applicant("Jane", "Doe", relationship)];
        model.applicants[0].named_in_will = false;
        model.family.spouse.status = spouse;
        model
    }

    fn priority_of(model: &EstateModel) -> String {
        generate(model, &StyleProfile::default())
            .checkbox_group("priority.1")
            .and_then(|group| group.checked().first().map(|option| option.id.clone()))
            .expect("one priority box checked")
    }

    #[test]
    fn clause_groups_are_mutually_exclusive() {
        let style = StyleProfile::default();
        for model in model_grid() {
            for table in [spouse_status(), children(), intestate_successors()] {
                assert_exclusive(&table, &model);
            }
            for applicant in &model.applicants {
                assert_exclusive(&priority(), &PriorityFacts::new(applicant, &model));
            }
            assert_single_choice(&generate(&model, &style), &GROUPS);
        }
    }

    #[test]
    fn child_with_surviving_spouse_takes_the_consent_branch() {
        let model = administration_model(Relationship::Child, SpouseStatus::Surviving);
        assert_eq!(priority_of(&model), "child_with_surviving_spouse");

        let model = administration_model(Relationship::Child, SpouseStatus::Deceased);
        assert_eq!(priority_of(&model), "child_without_spouse");
    }

    #[test]
    fn each_relationship_maps_to_its_own_branch() {
        let cases = [
            (Relationship::Spouse, "spouse"),
            (Relationship::Grandchild, "grandchild"),
            (Relationship::Parent, "parent"),
            (Relationship::Sibling, "sibling"),
            (Relationship::Other("niece".to_string()), "other_relationship"),
            (Relationship::Unspecified, "unspecified"),
        ];
        for (relationship, expected) in cases {
            let model = administration_model(relationship, SpouseStatus::NeverMarried);
            assert_eq!(priority_of(&model), expected);
        }
    }

    #[test]
    fn successors_are_listed_or_none() {
        let mut model = administration_model(Relationship::Sibling, SpouseStatus::NeverMarried);
        model.family.children.clear();
        let document = generate(&model, &StyleProfile::default());
        assert!(document
            .checkbox_group("intestate_successors")
            .expect("successors")
            .is_checked("none"));
        assert!(document
            .checkbox_group("children")
            .expect("children")
            .is_checked("none"));

        model.family.intestate_successors = vec![IntestateSuccessor {
            name: "Sam Doe".to_string(),
            relationship: "brother".to_string(),
        }];
        model.family.children = vec![FamilyMember {
            name: "Late Kid".to_string(),
            surviving: false,
        }];
        let document = generate(&model, &StyleProfile::default());
        let text = document.plain_text();
        assert!(text.contains("(a) Sam Doe, brother"));
        assert!(text.contains("(a) Late Kid (predeceased the deceased)"));
        assert!(document
            .checkbox_group("intestate_successors")
            .expect("successors")
            .is_checked("listed"));
    }

    #[test]
    fn joint_affidavit_selects_priority_per_applicant() {
        let mut model = administration_model(Relationship::Spouse, SpouseStatus::Surviving);
        model.applicants.push(applicant("Bob", "Doe", Relationship::Child));
        model.filing.joint_affidavit = true;

        let document = generate(&model, &StyleProfile::default());
        assert!(document.section("affidavit.2").is_none());
        assert!(document
            .checkbox_group("priority.1")
            .expect("spouse")
            .is_checked("spouse"));
        assert!(document
            .checkbox_group("priority.2")
            .expect("child")
            .is_checked("child_with_surviving_spouse"));
    }
}
