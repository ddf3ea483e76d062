//! Notice of proposed application (Form P1), delivered to every person
//! entitled to notice before the submission is filed.

use super::common::{court_caption, deceased_name, form_reference, ModelClauses, NONE};
use crate::document::{DocumentContent, DocumentKind, Section};
use crate::estate::{EstateModel, GrantType};
use crate::format::{
    address_or_blank, blank_filler, format_address, format_date, join_list, or_blank, Composer,
    ParagraphOptions, StyleProfile,
};

pub(crate) fn will_basis() -> ModelClauses {
    ModelClauses::new("will_basis", "undetermined")
        .clause("no_will", |model| {
            !model.grant_type.implies_will() && !model.grant_type.is_ancillary()
        })
        .clause("physical_will", |model| {
            !model.grant_type.is_ancillary()
                && model.will_exists()
                && !model.will.as_ref().is_some_and(|will| will.electronic)
        })
        .clause("electronic_will", |model| {
            !model.grant_type.is_ancillary()
                && model.will_exists()
                && model.will.as_ref().is_some_and(|will| will.electronic)
        })
        .clause("foreign_grant", |model| model.grant_type.is_ancillary())
}

pub(crate) fn electronic_will_copy() -> ModelClauses {
    ModelClauses::new("electronic_will_copy", "copy_attached").clause("demanded", |model| {
        model
            .will
            .as_ref()
            .is_some_and(|will| will.electronic_demand.demanded)
    })
}

pub(crate) fn service_address() -> ModelClauses {
    ModelClauses::new("service_address", "mailing").clause("distinct", |model| {
        let mailing = model.applicants.first().map(|applicant| &applicant.address);
        model
            .filing
            .address_for_service
            .as_ref()
            .is_some_and(|service| Some(service) != mailing)
    })
}

pub(crate) fn indigenous_notice() -> ModelClauses {
    ModelClauses::new("indigenous_notice", "none")
        .clause("nisgaa", |model| model.deceased.indigenous.nisgaa_citizen)
        .clause("treaty_first_nation", |model| {
            !model.deceased.indigenous.nisgaa_citizen
                && model.deceased.indigenous.treaty_first_nation_member
        })
}

pub fn generate(model: &EstateModel, style: &StyleProfile) -> DocumentContent {
    let compose = Composer::new(style);
    let mut document = DocumentContent::new(
        DocumentKind::Notice,
        "NOTICE OF PROPOSED APPLICATION IN FORM P1",
        style,
    );

    let mut header = Section::new("header");
    header.push(form_reference(&compose, "P1", "Rules 25-2 (2) and (3)"));
    header.extend(court_caption(&compose, model));
    header.push(compose.title("NOTICE OF PROPOSED APPLICATION IN FORM P1"));
    document.push(header);

    document.push(application_section(&compose, model));
    document.push(applicants_section(&compose, model));
    document.push(notices_section(&compose, model));
    document.push(signature_section(&compose, model));

    document
}

fn application_section(compose: &Composer<'_>, model: &EstateModel) -> Section {
    let mut section = Section::new("application");
    let deceased = &model.deceased;

    section.push(compose.paragraph("TAKE NOTICE THAT:", ParagraphOptions::default().bold()));
    section.push(compose.numbered(
        "1.",
        format!(
            "The applicant(s) named in this notice propose to apply, in the {} registry of the \
             court, for a {} in relation to the estate of the deceased described below:",
            or_blank(&model.filing.registry, 20),
            model.grant_type.label()
        ),
    ));
    section.push(compose.numbered_at(
        "(a)",
        format!("Full legal name of the deceased: {}", deceased_name(model)),
        1,
    ));
    let aliases = if deceased.aliases.is_empty() {
        NONE.to_string()
    } else {
        join_list(&deceased.aliases)
    };
    section.push(compose.numbered_at(
        "(b)",
        format!("Other names by which the deceased was known: {aliases}"),
        1,
    ));
    section.push(compose.numbered_at(
        "(c)",
        format!(
            "Last residential address of the deceased: {}",
            address_or_blank(&deceased.last_address, 40)
        ),
        1,
    ));
    section.push(compose.numbered_at(
        "(d)",
        format!(
            "Date of death: {}",
            format_date(deceased.date_of_death, 20)
        ),
        1,
    ));

    let basis = will_basis().select(model);
    let signed_on = model.will.as_ref().and_then(|will| will.signed_on);
    let foreign = model.foreign_grant.clone().unwrap_or_default();
    section.push(compose.numbered("2.", "The application is based on the following:"));
    section.push(compose.choice(
        basis.group,
        None,
        &basis,
        vec![
            (
                "no_will",
                "The deceased did not leave a will; the applicant(s) propose to apply for a \
                 grant of administration without will annexed."
                    .to_string(),
            ),
            (
                "physical_will",
                format!(
                    "The applicant(s) propose to apply for a grant in relation to the will of \
                     the deceased dated {}. A copy of the will is attached to this notice.",
                    format_date(signed_on, 20)
                ),
            ),
            (
                "electronic_will",
                format!(
                    "The applicant(s) propose to apply for a grant in relation to the \
                     electronic will of the deceased dated {}.",
                    format_date(signed_on, 20)
                ),
            ),
            (
                "foreign_grant",
                format!(
                    "The applicant(s) propose to apply for the resealing of, or an ancillary \
                     grant based on, a grant issued by {} of {} on {}. A copy of that grant \
                     is attached to this notice.",
                    or_blank(&foreign.court, 20),
                    or_blank(&foreign.jurisdiction, 20),
                    format_date(foreign.issued_on, 20)
                ),
            ),
            (
                "undetermined",
                format!("The basis of the application is: {}", blank_filler(40)),
            ),
        ],
    ));

    if basis.is("electronic_will") {
        let copy = electronic_will_copy().select(model);
        let provided_to = model
            .will
            .as_ref()
            .map(|will| will.electronic_demand.provided_to.clone())
            .unwrap_or_default();
        let recipients = if provided_to.is_empty() {
            blank_filler(30)
        } else {
            join_list(&provided_to)
        };
        section.push(compose.choice(
            copy.group,
            None,
            &copy,
            vec![
                (
                    "demanded",
                    format!(
                        "A copy of the electronic will was demanded and has been provided in \
                         the form demanded to: {recipients}"
                    ),
                ),
                (
                    "copy_attached",
                    "A paper copy of the electronic will is attached to this notice."
                        .to_string(),
                ),
            ],
        ));
    }

    section
}

fn applicants_section(compose: &Composer<'_>, model: &EstateModel) -> Section {
    let mut section = Section::with_heading("applicants", "Applicant information");

    let applicants: Vec<_> = if model.applicants.is_empty() {
        vec![None]
    } else {
        model.applicants.iter().map(Some).collect()
    };

    for (idx, applicant) in applicants.into_iter().enumerate() {
        let (name, address) = match applicant {
            Some(applicant) => (
                or_blank(&applicant.display_name(), 30),
                address_or_blank(&applicant.address, 40),
            ),
            None => (blank_filler(30), blank_filler(40)),
        };
        section.push(compose.paragraph(
            format!("Applicant {}", idx + 1),
            ParagraphOptions::default().bold(),
        ));
        section.push(compose.paragraph(
            format!("Name: {name}"),
            ParagraphOptions::default().indented(1),
        ));
        section.push(compose.paragraph(
            format!("Mailing address: {address}"),
            ParagraphOptions::default().indented(1),
        ));
    }

    let selection = service_address().select(model);
    let service = model
        .filing
        .address_for_service
        .as_ref()
        .map(format_address)
        .unwrap_or_default();
    section.push(compose.choice(
        selection.group,
        Some("Address for service of the applicant(s):".to_string()),
        &selection,
        vec![
            (
                "mailing",
                "The address for service is the mailing address of the applicant shown above."
                    .to_string(),
            ),
            (
                "distinct",
                format!("The address for service is: {}", or_blank(&service, 40)),
            ),
        ],
    ));
    section.push(compose.paragraph(
        format!(
            "Email address for service: {}",
            or_blank(&model.filing.service_email, 30)
        ),
        ParagraphOptions::default().indented(1),
    ));
    section.push(compose.paragraph(
        format!(
            "Telephone number for service: {}",
            or_blank(&model.filing.service_phone, 20)
        ),
        ParagraphOptions::default().indented(1),
    ));

    section
}

fn notices_section(compose: &Composer<'_>, model: &EstateModel) -> Section {
    let mut section = Section::with_heading("notices", "Notices to recipients");

    section.push(compose.numbered(
        "3.",
        "The applicant(s) may submit the submission for estate grant to the court registry \
         after 21 days have passed since this notice was delivered to you.",
    ));
    section.push(compose.numbered(
        "4.",
        "If you are a person to whom this notice is delivered, you may be entitled to \
         contest the will or to claim against the estate under the Wills, Estates and \
         Succession Act. You should obtain legal advice promptly, as time limits apply.",
    ));
    section.push(compose.numbered(
        "5.",
        "You may file a notice of dispute in the registry to prevent a grant from issuing \
         without notice to you.",
    ));

    let indigenous = indigenous_notice().select(model);
    let nation = or_blank(&model.deceased.indigenous.treaty_first_nation, 20);
    section.push(compose.choice(
        indigenous.group,
        Some("Indigenous status of the deceased:".to_string()),
        &indigenous,
        vec![
            (
                "nisgaa",
                "The deceased was a Nisga'a citizen; a copy of this notice must also be \
                 delivered to the Nisga'a Lisims Government."
                    .to_string(),
            ),
            (
                "treaty_first_nation",
                format!(
                    "The deceased was a member of the {nation} treaty first nation; a copy of \
                     this notice must also be delivered to that treaty first nation."
                ),
            ),
            (
                "none",
                "The deceased was neither a Nisga'a citizen nor a member of a treaty first \
                 nation."
                    .to_string(),
            ),
        ],
    ));

    if model.grant_type == GrantType::AdministrationWithoutWill {
        section.push(compose.numbered(
            "6.",
            "If you believe the deceased left a will, you should advise the applicant(s) \
             immediately.",
        ));
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
