//! Submission for estate grant (Form P2): the cover form filed with the
//! registry. Part 3 is the enclosed-documents checklist; Part 4 is the
//! schedule of interested persons for will-based grants.

use super::common::{
    applicant_affidavit_form, court_caption, deceased_name, form_reference, ModelClauses, NONE,
};
use crate::document::{DocumentContent, DocumentKind, Section};
use crate::estate::{EstateModel, ExecutorDisposition, FamilyMember, GrantType, SpouseStatus};
use crate::format::{
    address_or_blank, blank_filler, format_address, format_date, letter_marker, or_blank,
    Composer, ParagraphOptions, StyleProfile,
};

pub(crate) fn grant_type() -> ModelClauses {
    ModelClauses::new("grant_type", GrantType::default().id())
        .clause("probate", |model| model.grant_type == GrantType::Probate)
        .clause("administration_with_will", |model| {
            model.grant_type == GrantType::AdministrationWithWill
        })
        .clause("administration_without_will", |model| {
            model.grant_type == GrantType::AdministrationWithoutWill
        })
        .clause("ancillary_probate", |model| {
            model.grant_type == GrantType::AncillaryProbate
        })
        .clause("ancillary_administration_with_will", |model| {
            model.grant_type == GrantType::AncillaryAdministrationWithWill
        })
        .clause("ancillary_administration_without_will", |model| {
            model.grant_type == GrantType::AncillaryAdministrationWithoutWill
        })
}

pub(crate) fn nisgaa() -> ModelClauses {
    ModelClauses::new("nisgaa", "not_nisgaa_citizen")
        .clause("nisgaa_citizen", |model| model.deceased.indigenous.nisgaa_citizen)
        .clause("not_nisgaa_citizen", |model| {
            !model.deceased.indigenous.nisgaa_citizen
        })
}

pub(crate) fn treaty_first_nation() -> ModelClauses {
    ModelClauses::new("treaty_first_nation", "not_member")
        .clause("member", |model| {
            model.deceased.indigenous.treaty_first_nation_member
        })
        .clause("not_member", |model| {
            !model.deceased.indigenous.treaty_first_nation_member
        })
}

pub(crate) fn domicile() -> ModelClauses {
    ModelClauses::new("domicile", "not_domiciled")
        .clause("domiciled", |model| model.deceased.domiciled_in_jurisdiction)
        .clause("not_domiciled", |model| {
            !model.deceased.domiciled_in_jurisdiction
        })
}

pub(crate) fn certified_copies() -> ModelClauses {
    ModelClauses::new("certified_copies", "none_requested")
        .clause("requested", |model| model.filing.certified_copies > 0)
}

pub(crate) fn affidavit_mode() -> ModelClauses {
    ModelClauses::new("affidavit_mode", "single_applicant")
        .clause("single_applicant", |model| {
            model.is_sole_applicant()
                && !model.filing.joint_affidavit
                && !model.filing.supplemental_affidavit
        })
        .clause("separate_affidavits", |model| {
            !model.is_sole_applicant()
                && !model.filing.joint_affidavit
                && !model.filing.supplemental_affidavit
        })
        .clause("joint_affidavit", |model| {
            model.filing.joint_affidavit && !model.filing.supplemental_affidavit
        })
        .clause("supplemental_p8", |model| model.filing.supplemental_affidavit)
}

pub(crate) fn delivery_affidavit() -> ModelClauses {
    ModelClauses::new("delivery_affidavit", "not_filed")
        .clause("filed", |model| {
            !model.filing.delivery_waived && !model.deliveries.is_empty()
        })
        .clause("waived", |model| model.filing.delivery_waived)
        .clause("not_filed", |model| {
            !model.filing.delivery_waived && model.deliveries.is_empty()
        })
}

pub(crate) fn wills_search() -> ModelClauses {
    ModelClauses::new("wills_search", "not_filed")
        .clause("filed", |model| model.filing.wills_search_certificate)
        .clause("not_filed", |model| !model.filing.wills_search_certificate)
}

pub(crate) fn will_documents() -> ModelClauses {
    ModelClauses::new("will_documents", "no_will")
        .clause("originals", |model| {
            model.will_exists() && model.will.as_ref().is_some_and(|will| will.original_available)
        })
        .clause("copies", |model| {
            model.will_exists()
                && !model.will.as_ref().is_some_and(|will| will.original_available)
        })
        .clause("no_will", |model| !model.will_exists())
}

pub(crate) fn assets_affidavit() -> ModelClauses {
    ModelClauses::new("assets_affidavit", "not_filed")
        .clause("filed", |model| model.filing.assets_affidavit_submitted)
        .clause("not_filed", |model| !model.filing.assets_affidavit_submitted)
}

pub(crate) fn translation() -> ModelClauses {
    ModelClauses::new("translation", "not_required").clause("required", |model| {
        model.will_exists() && model.will.as_ref().is_some_and(|will| will.translation_required)
    })
}

pub(crate) fn renunciations() -> ModelClauses {
    ModelClauses::new("renunciations", "none")
        .clause("filed", |model| model.has_renunciations())
        .clause("none", |model| !model.has_renunciations())
}

pub(crate) fn foreign_grant() -> ModelClauses {
    ModelClauses::new("foreign_grant", "not_applicable")
        .clause("attached", |model| model.grant_type.is_ancillary())
        .clause("not_applicable", |model| !model.grant_type.is_ancillary())
}

pub fn generate(model: &EstateModel, style: &StyleProfile) -> DocumentContent {
    let compose = Composer::new(style);
    let mut document =
        DocumentContent::new(DocumentKind::Submission, "SUBMISSION FOR ESTATE GRANT", style);

    let mut header = Section::new("header");
    header.push(form_reference(&compose, "P2", "Rules 25-3 (2), 25-3 (11)"));
    header.extend(court_caption(&compose, model));
    header.push(compose.title("SUBMISSION FOR ESTATE GRANT"));
    header.push(compose.text(format!(
        "This submission for estate grant is made by the applicant(s) listed in Part 2 in \
         relation to the estate of {}, deceased, and is submitted to the {} registry.",
        deceased_name(model),
        or_blank(&model.filing.registry, 20)
    )));
    document.push(header);

    document.push(deceased_part(&compose, model));
    document.push(applicant_part(&compose, model));
    document.push(documents_part(&compose, model));
    if model.grant_type.implies_will() {
        document.push(schedule_part(&compose, model));
    }
    document.push(signature_section(&compose, model));

    document
}

fn deceased_part(compose: &Composer<'_>, model: &EstateModel) -> Section {
    let mut section = Section::with_heading("part_1", "PART 1: DECEASED'S INFORMATION");
    let deceased = &model.deceased;

    section.push(compose.numbered(
        "1.",
        format!("First name: {}", or_blank(&deceased.name.first, 20)),
    ));
    section.push(compose.numbered(
        "2.",
        format!("Middle name(s): {}", or_blank(&deceased.name.middle, 20)),
    ));
    section.push(compose.numbered(
        "3.",
        format!("Last name: {}", or_blank(&deceased.name.last, 20)),
    ));
    section.push(compose.numbered(
        "4.",
        "Other names by which the deceased was known:",
    ));
    if deceased.aliases.is_empty() {
        section.push(compose.paragraph(NONE, ParagraphOptions::default().indented(1)));
    }
    for (idx, alias) in deceased.aliases.iter().enumerate() {
        section.push(compose.numbered_at(letter_marker(idx), alias.clone(), 1));
    }
    section.push(compose.numbered(
        "5.",
        format!(
            "Last residential address: {}",
            address_or_blank(&deceased.last_address, 40)
        ),
    ));
    section.push(compose.numbered(
        "6.",
        format!("Date of death: {}", format_date(deceased.date_of_death, 20)),
    ));

    let selection = grant_type().select(model);
    section.push(compose.numbered("7.", "The applicant(s) apply for the following grant:"));
    section.push(compose.choice(
        selection.group,
        None,
        &selection,
        GrantType::ordered()
            .into_iter()
            .map(|grant| (grant.id(), capitalize(grant.label())))
            .collect(),
    ));

    let selection = nisgaa().select(model);
    section.push(compose.numbered("8.", "Was the deceased a Nisga'a citizen?"));
    section.push(compose.choice(
        selection.group,
        None,
        &selection,
        vec![
            ("nisgaa_citizen", "Yes".to_string()),
            ("not_nisgaa_citizen", "No".to_string()),
        ],
    ));

    let selection = treaty_first_nation().select(model);
    section.push(compose.numbered(
        "9.",
        "Was the deceased a member of a treaty first nation?",
    ));
    section.push(compose.choice(
        selection.group,
        None,
        &selection,
        vec![
            (
                "member",
                format!(
                    "Yes, of the following treaty first nation: {}",
                    or_blank(&deceased.indigenous.treaty_first_nation, 20)
                ),
            ),
            ("not_member", "No".to_string()),
        ],
    ));

    let selection = domicile().select(model);
    section.push(compose.numbered(
        "10.",
        "Was the deceased ordinarily resident in British Columbia at death?",
    ));
    section.push(compose.choice(
        selection.group,
        None,
        &selection,
        vec![
            ("domiciled", "Yes".to_string()),
            ("not_domiciled", "No".to_string()),
        ],
    ));

    section
}

fn applicant_part(compose: &Composer<'_>, model: &EstateModel) -> Section {
    let mut section = Section::with_heading(
        "part_2",
        "PART 2: CONTACT INFORMATION FOR APPLICANT(S)",
    );

    if model.applicants.is_empty() {
        section.push(compose.numbered(
            "1.",
            format!("Name: {}  Address: {}", blank_filler(30), blank_filler(40)),
        ));
    }
    for (idx, applicant) in model.applicants.iter().enumerate() {
        section.push(compose.numbered(
            format!("{}.", idx + 1),
            format!(
                "Name: {}  Address: {}",
                or_blank(&applicant.display_name(), 30),
                address_or_blank(&applicant.address, 40)
            ),
        ));
    }

    let service = model
        .filing
        .address_for_service
        .as_ref()
        .map(format_address)
        .or_else(|| {
            model
                .applicants
                .first()
                .map(|applicant| format_address(&applicant.address))
        })
        .unwrap_or_default();
    section.push(compose.paragraph(
        format!("Address for service: {}", or_blank(&service, 40)),
        ParagraphOptions::default().bold(),
    ));
    section.push(compose.text(format!(
        "Email: {}    Telephone: {}",
        or_blank(&model.filing.service_email, 30),
        or_blank(&model.filing.service_phone, 20)
    )));

    let selection = certified_copies().select(model);
    section.push(compose.choice(
        selection.group,
        Some("Certified copies of the estate grant:".to_string()),
        &selection,
        vec![
            (
                "requested",
                format!(
                    "The applicant(s) request {} certified cop{} of the estate grant.",
                    model.filing.certified_copies,
                    if model.filing.certified_copies == 1 {
                        "y"
                    } else {
                        "ies"
                    }
                ),
            ),
            (
                "none_requested",
                "The applicant(s) do not request certified copies of the estate grant."
                    .to_string(),
            ),
        ],
    ));

    section
}

fn documents_part(compose: &Composer<'_>, model: &EstateModel) -> Section {
    let mut section = Section::with_heading(
        "part_3",
        "PART 3: DOCUMENTS FILED WITH THIS SUBMISSION FOR ESTATE GRANT",
    );
    let form = applicant_affidavit_form(model.grant_type);

    let selection = affidavit_mode().select(model);
    section.push(compose.numbered("1.", "Affidavit(s) of applicant:"));
    section.push(compose.choice(
        selection.group,
        None,
        &selection,
        vec![
            (
                "single_applicant",
                format!("an affidavit of the applicant in Form {form}"),
            ),
            (
                "separate_affidavits",
                format!("an affidavit in Form {form} of each of the applicants"),
            ),
            (
                "joint_affidavit",
                format!("a joint affidavit of the applicants in Form {form}"),
            ),
            (
                "supplemental_p8",
                "a supplemental affidavit of the applicant(s) in Form P8".to_string(),
            ),
        ],
    ));

    let selection = delivery_affidavit().select(model);
    section.push(compose.numbered("2.", "Affidavit of delivery:"));
    section.push(compose.choice(
        selection.group,
        None,
        &selection,
        vec![
            (
                "filed",
                "an affidavit of delivery in Form P9 that confirms delivery of the notice of \
                 proposed application"
                    .to_string(),
            ),
            (
                "waived",
                "no affidavit of delivery, as no person is entitled to notice".to_string(),
            ),
            (
                "not_filed",
                format!(
                    "the affidavit of delivery will be filed later: {}",
                    blank_filler(20)
                ),
            ),
        ],
    ));

    let selection = wills_search().select(model);
    section.push(compose.numbered("3.", "Wills notice search:"));
    section.push(compose.choice(
        selection.group,
        None,
        &selection,
        vec![
            (
                "filed",
                "a certificate of the chief executive officer under the Vital Statistics Act \
                 indicating the results of a search for a wills notice"
                    .to_string(),
            ),
            (
                "not_filed",
                "the wills notice search certificate is to follow".to_string(),
            ),
        ],
    ));

    let selection = will_documents().select(model);
    section.push(compose.numbered("4.", "Will:"));
    section.push(compose.choice(
        selection.group,
        None,
        &selection,
        vec![
            (
                "originals",
                "the originally signed will and any codicils".to_string(),
            ),
            (
                "copies",
                "copies of the will and any codicils, with an affidavit explaining why the \
                 originals are not available"
                    .to_string(),
            ),
            (
                "no_will",
                "no will, as the deceased did not leave a will".to_string(),
            ),
        ],
    ));

    let selection = assets_affidavit().select(model);
    section.push(compose.numbered("5.", "Affidavit of assets and liabilities:"));
    section.push(compose.choice(
        selection.group,
        None,
        &selection,
        vec![
            (
                "filed",
                "an affidavit of assets and liabilities in Form P10".to_string(),
            ),
            (
                "not_filed",
                "the affidavit of assets and liabilities is to follow".to_string(),
            ),
        ],
    ));

    let selection = translation().select(model);
    section.push(compose.numbered("6.", "Translation:"));
    section.push(compose.choice(
        selection.group,
        None,
        &selection,
        vec![
            (
                "required",
                "a translation of the will and an affidavit of the translator".to_string(),
            ),
            (
                "not_required",
                "no translation is required".to_string(),
            ),
        ],
    ));

    let selection = renunciations().select(model);
    section.push(compose.numbered("7.", "Renunciations:"));
    section.push(compose.choice(
        selection.group,
        None,
        &selection,
        vec![
            (
                "filed",
                "a renunciation executed by each executor named in the will who is not \
                 applying and has renounced"
                    .to_string(),
            ),
            ("none", "no renunciations".to_string()),
        ],
    ));

    let selection = foreign_grant().select(model);
    let foreign = model.foreign_grant.clone().unwrap_or_default();
    section.push(compose.numbered("8.", "Foreign grant:"));
    section.push(compose.choice(
        selection.group,
        None,
        &selection,
        vec![
            (
                "attached",
                format!(
                    "a copy of the grant issued by {} of {}, certified by that court",
                    or_blank(&foreign.court, 20),
                    or_blank(&foreign.jurisdiction, 20)
                ),
            ),
            ("not_applicable", "not applicable".to_string()),
        ],
    ));

    section
}

fn schedule_part(compose: &Composer<'_>, model: &EstateModel) -> Section {
    let mut section = Section::with_heading("part_4", "PART 4: SCHEDULE");
    let family = &model.family;

    let reserved: Vec<String> = model
        .other_executors
        .iter()
        .filter(|executor| executor.disposition == ExecutorDisposition::PowerReserved)
        .map(|executor| executor.name.clone())
        .collect();

    let spouse = match family.spouse.status {
        SpouseStatus::Surviving => vec![or_blank(&family.spouse.name, 30)],
        SpouseStatus::Deceased => {
            vec![format!("{} (deceased)", or_blank(&family.spouse.name, 30))]
        }
        SpouseStatus::NeverMarried | SpouseStatus::Unspecified => Vec::new(),
    };

    let with_status = |members: &[FamilyMember]| -> Vec<String> {
        members
            .iter()
            .map(|member| {
                let name = or_blank(&member.name, 30);
                if member.surviving {
                    name
                } else {
                    format!("{name} (deceased)")
                }
            })
            .collect()
    };

    let successors: Vec<String> = family
        .intestate_successors
        .iter()
        .map(|successor| {
            if successor.relationship.is_empty() {
                successor.name.clone()
            } else {
                format!("{} ({})", successor.name, successor.relationship)
            }
        })
        .collect();

    let lists: [(&str, Vec<String>); 6] = [
        ("Executors to whom power is reserved", reserved),
        ("Spouse of the deceased", spouse),
        ("Children of the deceased", with_status(&family.children)),
        (
            "Other beneficiaries under the will",
            with_status(&family.other_beneficiaries),
        ),
        ("Intestate successors", successors),
        ("Citors", model.citors.clone()),
    ];

    for (number, (caption, entries)) in lists.into_iter().enumerate() {
        section.push(compose.numbered(format!("{}.", number + 1), caption));
        if entries.is_empty() {
            section.push(compose.paragraph(NONE, ParagraphOptions::default().indented(1)));
        }
        for (idx, entry) in entries.into_iter().enumerate() {
            section.push(compose.numbered_at(letter_marker(idx), entry, 1));
        }
    }

    section
}

fn signature_section(compose: &Composer<'_>, model: &EstateModel) -> Section {
    let mut section = Section::new("signatures");
    section.push(compose.date_line("Date", model.filing.submission_date));
    let names = model.applicant_names();
    if names.is_empty() {
        section.push(compose.signature_block("", "Signature of applicant"));
    }
    for name in &names {
        section.push(compose.signature_block(name, "Signature of applicant"));
    }
    section
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estate::{OtherExecutor, Relationship};
    use crate::forms::fixtures::{
        applicant, assert_exclusive, assert_single_choice, model_grid, probate_model,
    };

    const GROUPS: [&str; 13] = [
        "grant_type",
        "nisgaa",
        "treaty_first_nation",
        "domicile",
        "certified_copies",
        "affidavit_mode",
        "delivery_affidavit",
        "wills_search",
        "will_documents",
        "assets_affidavit",
        "translation",
        "renunciations",
        "foreign_grant",
    ];

    fn tables() -> Vec<ModelClauses> {
        vec![
            grant_type(),
            nisgaa(),
            treaty_first_nation(),
            domicile(),
            certified_copies(),
            affidavit_mode(),
            delivery_affidavit(),
            wills_search(),
            will_documents(),
            assets_affidavit(),
            translation(),
            renunciations(),
            foreign_grant(),
        ]
    }

    #[test]
    fn clause_groups_are_mutually_exclusive() {
        let style = StyleProfile::default();
        let tables = tables();
        for model in model_grid() {
            for table in &tables {
                assert_exclusive(table, &model);
            }
            let document = generate(&model, &style);
            assert_single_choice(&document, &GROUPS);
            for group in GROUPS {
                assert!(
                    document.checkbox_group(group).is_some(),
                    "group {group} missing"
                );
            }
        }
    }

    #[test]
    fn single_probate_applicant_checks_only_the_single_box() {
        let document = generate(&probate_model(), &StyleProfile::default());
        let group = document
            .checkbox_group("affidavit_mode")
            .expect("affidavit mode group");
        assert!(group.is_checked("single_applicant"));
        assert!(!group.is_checked("joint_affidavit"));
        assert!(!group.is_checked("supplemental_p8"));
        assert!(document
            .checkbox_group("grant_type")
            .expect("grant type")
            .is_checked("probate"));
    }

    #[test]
    fn schedule_lists_render_none_when_empty() {
        let mut model = probate_model();
        model.family.children.clear();
        let text = generate(&model, &StyleProfile::default()).plain_text();

        let schedule = text
            .split("PART 4: SCHEDULE")
            .nth(1)
            .expect("schedule rendered");
        assert_eq!(schedule.matches("None.").count(), 5);
        assert!(schedule.contains("Mary Doe (deceased)"));
    }

    #[test]
    fn schedule_orders_reserved_executors_first() {
        let mut model = probate_model();
        model.other_executors.push(OtherExecutor {
            name: "Reserved Person".to_string(),
            disposition: ExecutorDisposition::PowerReserved,
        });
        model.other_executors.push(OtherExecutor {
            name: "Renouncing Person".to_string(),
            disposition: ExecutorDisposition::Renounced,
        });
        let document = generate(&model, &StyleProfile::default());
        let schedule = document.section("part_4").expect("schedule");
        let first_entry = schedule
            .blocks
            .iter()
            .find_map(|block| match block {
                crate::document::Block::Paragraph(paragraph)
                    if paragraph.number.as_deref() == Some("(a)") =>
                {
                    Some(paragraph.text())
                }
                _ => None,
            })
            .expect("first entry");
        assert_eq!(first_entry, "(a) Reserved Person");
        assert!(!document.plain_text().contains("(a) Renouncing Person"));
        assert!(document
            .checkbox_group("renunciations")
            .expect("renunciations")
            .is_checked("filed"));
    }

    #[test]
    fn schedule_is_omitted_without_a_will() {
        let mut model = probate_model();
        model.grant_type = GrantType::AdministrationWithoutWill;
        model.will = None;
        model.applicants = vec![
            applicant("Ann", "Doe", Relationship::Child),
            applicant("Bob", "Doe", Relationship::Child),
        ];
        let document = generate(&model, &StyleProfile::default());
        assert!(document.section("part_4").is_none());
        let group = document
            .checkbox_group("affidavit_mode")
            .expect("affidavit mode");
        assert!(group.is_checked("separate_affidavits"));
        assert!(document.plain_text().contains("Form P5"));
    }
}
