//! Short-form affidavit of applicant (Form P3) for grants with a will.
//!
//! One affidavit is produced per deponent group; a joint affidavit covers
//! every applicant in a single document section.

use super::common::{
    court_caption, deceased_name, deponent_groups, form_reference, numbered_id, Deponents,
    ModelClauses,
};
use crate::document::{ClauseTable, DocumentContent, DocumentKind, Section};
use crate::estate::{Applicant, EstateModel, Relationship};
use crate::format::{
    blank_filler, format_date, join_list, letter_marker, or_blank, Composer, ParagraphOptions,
    StyleProfile,
};

pub(crate) fn applicant_standing() -> ClauseTable<Applicant> {
    ClauseTable::<Applicant>::new("applicant_standing", "unspecified")
        .clause("named_executor", |applicant| applicant.named_in_will)
        .clause("by_relationship", |applicant| {
            !applicant.named_in_will && applicant.relationship != Relationship::Unspecified
        })
}

pub(crate) fn will_recital() -> ModelClauses {
    ModelClauses::new("will_recital", "not_located")
        .clause("located", |model| model.will_exists())
}

pub(crate) fn codicils() -> ModelClauses {
    ModelClauses::new("codicils", "none").clause("present", |model| {
        model.will_exists()
            && model
                .will
                .as_ref()
                .is_some_and(|will| !will.codicils.is_empty())
    })
}

pub(crate) fn other_executors() -> ModelClauses {
    ModelClauses::new("other_executors", "none")
        .clause("listed", |model| !model.other_executors.is_empty())
}

pub(crate) fn alterations() -> ModelClauses {
    ModelClauses::new("alterations", "no_alterations")
        .clause("alterations", |model| {
            model.will_exists()
                && model
                    .will
                    .as_ref()
                    .is_some_and(|will| will.has_alterations && !will.has_obliterations)
        })
        .clause("obliterations", |model| {
            model.will_exists() && model.will.as_ref().is_some_and(|will| will.has_obliterations)
        })
}

pub(crate) fn referenced_documents() -> ModelClauses {
    ModelClauses::new("referenced_documents", "none").clause("listed", |model| {
        model.will_exists()
            && model
                .will
                .as_ref()
                .is_some_and(|will| !will.referenced_documents.is_empty())
    })
}

pub fn generate(model: &EstateModel, style: &StyleProfile) -> DocumentContent {
    let compose = Composer::new(style);
    let mut document = DocumentContent::new(
        DocumentKind::ShortFormAffidavit,
        "AFFIDAVIT OF APPLICANT FOR GRANT OF PROBATE OR GRANT OF ADMINISTRATION WITH WILL \
         ANNEXED",
        style,
    );

    for (idx, deponents) in deponent_groups(model).iter().enumerate() {
        document.push(affidavit(&compose, model, deponents, idx + 1));
        document.push(exhibit(&compose, model, deponents, idx + 1));
    }

    document
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

    section.push(form_reference(compose, "P3", "Rule 25-3 (2)"));
    section.extend(court_caption(compose, model));
    section.push(compose.title(
        "AFFIDAVIT OF APPLICANT FOR GRANT OF PROBATE OR GRANT OF ADMINISTRATION WITH WILL \
         ANNEXED",
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
            "{pronoun} {be} {role} for a {} in relation to the estate of {}, deceased, and \
             make this affidavit in support of the submission for estate grant.",
            model.grant_type.label(),
            deceased_name(model)
        ),
    ));

    section.push(compose.numbered("2.", format!("As to {my} standing to apply:")));
    let members: Vec<Option<&Applicant>> = if deponents.members.is_empty() {
        vec![None]
    } else {
        deponents.members.iter().copied().map(Some).collect()
    };
    let fallback_applicant = Applicant::default();
    for (offset, applicant) in members.into_iter().enumerate() {
        let applicant = applicant.unwrap_or(&fallback_applicant);
        let selection = applicant_standing().select(applicant);
        let name = or_blank(&applicant.display_name(), 30);
        section.push(compose.choice(
            numbered_id(selection.group, deponents.first_index + offset),
            deponents.is_joint().then(|| format!("{name}:")),
            &selection,
            vec![
                (
                    "named_executor",
                    "is named as an executor in the will".to_string(),
                ),
                (
                    "by_relationship",
                    format!(
                        "is not named as an executor in the will and applies as the {} of \
                         the deceased",
                        or_blank(applicant.relationship.label(), 20)
                    ),
                ),
                (
                    "unspecified",
                    format!("applies on the following basis: {}", blank_filler(40)),
                ),
            ],
        ));
    }

    let will = model.will.clone().unwrap_or_default();
    let selection = will_recital().select(model);
    section.push(compose.numbered("3.", "As to the will:"));
    section.push(compose.choice(
        selection.group,
        None,
        &selection,
        vec![
            (
                "located",
                format!(
                    "{pronoun} believe that the document attached as Exhibit A to this \
                     affidavit is the last will of the deceased, made on {} at {}.",
                    format_date(will.signed_on, 20),
                    or_blank(&will.signed_at, 20)
                ),
            ),
            (
                "not_located",
                format!(
                    "The last will of the deceased has not been located: {}",
                    blank_filler(30)
                ),
            ),
        ],
    ));

    let dates: Vec<String> = will
        .codicils
        .iter()
        .map(|codicil| format_date(codicil.signed_on, 16))
        .collect();
    let selection = codicils().select(model);
    section.push(compose.choice(
        selection.group,
        None,
        &selection,
        vec![
            (
                "present",
                format!(
                    "The will is accompanied by {} codicil(s), dated {}, which form part of \
                     Exhibit A.",
                    will.codicils.len(),
                    join_list(&dates)
                ),
            ),
            (
                "none",
                format!("{pronoun} {be} not aware of any codicil to the will."),
            ),
        ],
    ));

    let selection = other_executors().select(model);
    section.push(compose.numbered("4.", "As to the other executors named in the will:"));
    section.push(compose.choice(
        selection.group,
        None,
        &selection,
        vec![
            (
                "listed",
                "The following persons named as executors are not applying, for the reasons \
                 shown:"
                    .to_string(),
            ),
            (
                "none",
                "No person other than the applicant(s) is named as executor in the will."
                    .to_string(),
            ),
        ],
    ));
    for (idx, executor) in model.other_executors.iter().enumerate() {
        section.push(compose.numbered_at(
            letter_marker(idx),
            format!(
                "{}, who {}.",
                or_blank(&executor.name, 30),
                executor.disposition.reason()
            ),
            2,
        ));
    }

    section.push(compose.numbered(
        "5.",
        format!(
            "{pronoun} have made a diligent search for any testamentary document of the \
             deceased and the results of the search for a wills notice are reflected in the \
             submission for estate grant."
        ),
    ));

    section.push(compose.numbered(
        "6.",
        format!("To the best of {my} knowledge, the will:"),
    ));
    for (idx, recital) in [
        "is in writing;",
        "was signed at its end by the will-maker, or the signature at its end was \
         acknowledged by the will-maker as theirs, in the presence of 2 or more witnesses \
         present at the same time; and",
        "was signed by 2 or more of the witnesses in the presence of the will-maker.",
    ]
    .into_iter()
    .enumerate()
    {
        section.push(compose.numbered_at(letter_marker(idx), recital, 1));
    }

    let selection = alterations().select(model);
    section.push(compose.numbered("7.", "As to the condition of the will:"));
    section.push(compose.choice(
        selection.group,
        None,
        &selection,
        vec![
            (
                "no_alterations",
                "The will contains no alterations, erasures or obliterations.".to_string(),
            ),
            (
                "alterations",
                "The will contains alterations made before it was signed, as explained in an \
                 accompanying affidavit."
                    .to_string(),
            ),
            (
                "obliterations",
                "The will contains obliterations or erasures, as explained in an accompanying \
                 affidavit."
                    .to_string(),
            ),
        ],
    ));

    let selection = referenced_documents().select(model);
    section.push(compose.numbered("8.", "As to documents referred to in the will:"));
    section.push(compose.choice(
        selection.group,
        None,
        &selection,
        vec![
            (
                "listed",
                format!(
                    "The will refers to the following documents: {}",
                    join_list(&will.referenced_documents)
                ),
            ),
            (
                "none",
                "The will does not refer to any other document.".to_string(),
            ),
        ],
    ));

    section.push(compose.numbered(
        "9.",
        format!(
            "{pronoun} will administer the estate according to law and will prepare an \
             accounting as to how the estate was administered."
        ),
    ));

    section.push(compose.jurat(&deponents.place(), None, &deponents.names()));
    section
}

fn exhibit(
    compose: &Composer<'_>,
    model: &EstateModel,
    deponents: &Deponents<'_>,
    number: usize,
) -> Section {
    let mut section = Section::new(numbered_id("exhibit_a", number));
    section.push(compose.page_break());

    let names = deponents.names();
    let names = if names.is_empty() {
        blank_filler(30)
    } else {
        join_list(&names)
    };
    section.push(compose.paragraph(
        format!(
            "This is Exhibit A referred to in the affidavit of {names} sworn (or affirmed) \
             before me on {}.",
            blank_filler(20)
        ),
        ParagraphOptions::default().centered(),
    ));
    section.push(compose.signature_block(
        "",
        "A commissioner for taking affidavits for British Columbia",
    ));

    let attachment = if model.will_exists() {
        "[Attach a copy of the will and any codicils]"
    } else {
        "[Attach a copy of the document believed to be the will]"
    };
    section.push(compose.paragraph(attachment, ParagraphOptions::default().italic().centered()));
    section
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estate::{Codicil, ExecutorDisposition, GrantType, OtherExecutor};
    use crate::forms::fixtures::{
        applicant, assert_exclusive, assert_single_choice, date, model_grid, probate_model,
    };

    const GROUPS: [&str; 6] = [
        "applicant_standing",
        "will_recital",
        "codicils",
        "other_executors",
        "alterations",
        "referenced_documents",
    ];

    #[test]
    fn clause_groups_are_mutually_exclusive() {
        let style = StyleProfile::default();
        for model in model_grid() {
            for table in [
                will_recital(),
                codicils(),
                other_executors(),
                alterations(),
                referenced_documents(),
            ] {
                assert_exclusive(&table, &model);
            }
            for applicant in &model.applicants {
                assert_exclusive(&applicant_standing(), applicant);
            }
            assert_single_choice(&generate(&model, &style), &GROUPS);
        }
    }

    #[test]
    fn standing_distinguishes_named_executor_and_relationship() {
        let mut model = probate_model();
        let mut second = applicant("Bob", "Doe", Relationship::Sibling);
        second.named_in_will = false;
        model.applicants.push(second);

        let document = generate(&model, &StyleProfile::default());
        assert!(document
            .checkbox_group("applicant_standing.1")
            .expect("first deponent")
            .is_checked("named_executor"));
        assert!(document
            .checkbox_group("applicant_standing.2")
            .expect("second deponent")
            .is_checked("by_relationship"));
        assert!(document.section("affidavit.2").is_some());
    }

    #[test]
    fn joint_affidavit_is_a_single_section() {
        let mut model = probate_model();
        model.applicants.push(applicant("Bob", "Doe", Relationship::Child));
        model.filing.joint_affidavit = true;

        let document = generate(&model, &StyleProfile::default());
        assert!(document.section("affidavit.1").is_some());
        assert!(document.section("affidavit.2").is_none());
        assert!(document.checkbox_group("applicant_standing.2").is_some());
        assert!(document.plain_text().contains("We, Jane Doe"));
    }

    #[test]
    fn other_executors_are_enumerated_with_reasons() {
        let mut model = probate_model();
        model.other_executors = vec![
            OtherExecutor {
                name: "Tom Renouncer".to_string(),
                disposition: ExecutorDisposition::Renounced,
            },
            OtherExecutor {
                name: "Old Friend".to_string(),
                disposition: ExecutorDisposition::Deceased,
            },
        ];
        let text = generate(&model, &StyleProfile::default()).plain_text();
        assert!(text.contains("(a) Tom Renouncer, who has renounced executorship."));
        assert!(text.contains("(b) Old Friend, who has died."));
    }

    #[test]
    fn codicils_are_recited_with_dates() {
        let mut model = probate_model();
        if let Some(will) = model.will.as_mut() {
            will.codicils = vec![Codicil {
                signed_on: Some(date(2019, 5, 20)),
            }];
        }
        let document = generate(&model, &StyleProfile::default());
        assert!(document
            .checkbox_group("codicils")
            .expect("codicils")
            .is_checked("present"));
        assert!(document.plain_text().contains("May 20, 2019"));
    }

    #[test]
    fn will_that_does_not_exist_is_never_affirmed() {
        let mut model = probate_model();
        model.grant_type = GrantType::AdministrationWithWill;
        if let Some(will) = model.will.as_mut() {
            will.exists = false;
            will.has_alterations = true;
            will.referenced_documents = vec!["Memo".to_string()];
        }

        let document = generate(&model, &StyleProfile::default());
        let checked = |group: &str, option: &str| {
            document
                .checkbox_group(group)
                .unwrap_or_else(|| panic!("{group} group"))
                .is_checked(option)
        };
        assert!(checked("will_recital", "not_located"));
        assert!(checked("alterations", "no_alterations"));
        assert!(!checked("alterations", "alterations"));
        assert!(checked("referenced_documents", "none"));
        assert!(!checked("referenced_documents", "listed"));

        if let Some(will) = model.will.as_mut() {
            will.has_obliterations = true;
        }
        assert_eq!(alterations().select(&model).active, "no_alterations");
    }

    #[test]
    fn execution_recital_is_fixed() {
        let first = generate(&probate_model(), &StyleProfile::default()).plain_text();
        let empty = generate(&EstateModel::default(), &StyleProfile::default()).plain_text();
        for text in [first, empty] {
            assert!(text.contains("(a) is in writing;"));
            assert!(text.contains("in the presence of the will-maker."));
        }
    }
}
