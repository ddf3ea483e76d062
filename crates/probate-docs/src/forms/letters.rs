//! Correspondence that travels with the filed forms: the cover letter to the
//! probate registry and the checklist letter sent to the applicants.

use super::common::{applicant_affidavit_form, deceased_name, deponent_groups, ModelClauses};
use crate::document::{DocumentContent, DocumentKind, Section, TableRow};
use crate::estate::EstateModel;
use crate::format::{
    address_or_blank, blank_filler, format_currency, format_date, join_list, letter_marker,
    or_blank, Composer, ParagraphOptions, StyleProfile,
};
use chrono::{Days, NaiveDate};

/// Days a notice must have been delivered before the submission is filed.
pub const NOTICE_PERIOD_DAYS: u64 = 21;

/// The day after which the submission may be filed: the latest recorded
/// delivery plus the notice period. `None` when no delivery carries a date.
pub fn earliest_submission_date(model: &EstateModel) -> Option<NaiveDate> {
    model
        .deliveries
        .iter()
        .filter_map(|delivery| delivery.delivered_on)
        .max()
        .and_then(|latest| latest.checked_add_days(Days::new(NOTICE_PERIOD_DAYS)))
}

/// Documents listed in the registry cover letter, in filing order.
pub fn cover_letter_enclosures(model: &EstateModel) -> Vec<String> {
    let mut enclosures = vec!["Submission for estate grant (Form P2)".to_string()];

    let affidavits = deponent_groups(model).len();
    let form = applicant_affidavit_form(model.grant_type);
    enclosures.push(if affidavits > 1 {
        format!("{affidavits} affidavits of applicant (Form {form})")
    } else {
        format!("Affidavit of applicant (Form {form})")
    });

    if !model.deliveries.is_empty() || !model.filing.delivery_waived {
        enclosures.push("Affidavit of delivery (Form P9)".to_string());
    }
    if model.filing.assets_affidavit_submitted {
        enclosures.push("Affidavit of assets and liabilities (Form P10)".to_string());
    }
    if model.will_exists() {
        let original = model
            .will
            .as_ref()
            .is_some_and(|will| will.original_available);
        enclosures.push(if original {
            "Originally signed will and any codicils".to_string()
        } else {
            "Copy of the will and any codicils".to_string()
        });
    }
    if model.filing.wills_search_certificate {
        enclosures.push("Certificate of wills search".to_string());
    }
    if model.foreign_grant.is_some() {
        enclosures.push("Certified copy of the foreign grant".to_string());
    }
    if model.filing.certified_copies > 0 {
        enclosures.push(format!(
            "Fee for {} certified copies of the grant",
            model.filing.certified_copies
        ));
    }

    enclosures
}

fn letter_head(compose: &Composer<'_>, model: &EstateModel, salutation: String) -> Section {
    let mut section = Section::new("letterhead");
    section.push(compose.date_line("Date", model.filing.submission_date));
    section.push(compose.text(salutation));
    section.push(compose.paragraph(
        format!(
            "Re: Estate of {}, deceased (date of death {})",
            deceased_name(model),
            format_date(model.deceased.date_of_death, 20)
        ),
        ParagraphOptions::default().bold(),
    ));
    section
}

fn closing(compose: &Composer<'_>, model: &EstateModel) -> Section {
    let mut section = Section::new("closing");
    section.push(compose.text("Yours truly,"));
    let names = model.applicant_names();
    if names.is_empty() {
        section.push(compose.signature_block("", "Applicant"));
    }
    for name in &names {
        section.push(compose.signature_block(name, "Applicant"));
    }
    section
}

pub fn registry_cover_letter(model: &EstateModel, style: &StyleProfile) -> DocumentContent {
    let compose = Composer::new(style);
    let mut document = DocumentContent::new(
        DocumentKind::RegistryCoverLetter,
        "COVER LETTER TO PROBATE REGISTRY",
        style,
    );

    document.push(letter_head(
        &compose,
        model,
        format!(
            "To: Supreme Court of British Columbia, Probate Registry, {}",
            or_blank(&model.filing.registry, 20)
        ),
    ));

    let mut body = Section::new("body");
    body.push(compose.text(format!(
        "Please find enclosed an application for a {} in the estate of {}. The following \
         documents are enclosed:",
        model.grant_type.label(),
        deceased_name(model)
    )));
    let rows = cover_letter_enclosures(model)
        .into_iter()
        .enumerate()
        .map(|(idx, item)| TableRow::new(vec![letter_marker(idx), item]))
        .collect();
    body.push(compose.table("enclosures", &["", "Enclosure"], rows));

    let service = model
        .filing
        .address_for_service
        .as_ref()
        .or_else(|| model.applicants.first().map(|applicant| &applicant.address));
    body.push(compose.text(format!(
        "Please direct any correspondence about this application to {}.",
        service.map_or_else(|| blank_filler(40), |address| address_or_blank(address, 40))
    )));
    document.push(body);

    document.push(closing(&compose, model));
    document
}

pub(crate) fn delivery_step() -> ModelClauses {
    ModelClauses::new("delivery_step", "outstanding")
        .clause("waived", |model| model.filing.delivery_waived)
        .clause("complete", |model| {
            !model.filing.delivery_waived && !model.deliveries.is_empty()
        })
}

pub(crate) fn earliest_submission() -> ModelClauses {
    ModelClauses::new("earliest_submission", "not_scheduled").clause("scheduled", |model| {
        !model.filing.delivery_waived && earliest_submission_date(model).is_some()
    })
}

pub(crate) fn creditor_notice() -> ModelClauses {
    ModelClauses::new("creditor_notice", "none_known")
        .clause("listed", |model| !model.creditors.is_empty())
}

pub fn filing_checklist_letter(model: &EstateModel, style: &StyleProfile) -> DocumentContent {
    let compose = Composer::new(style);
    let mut document = DocumentContent::new(
        DocumentKind::FilingChecklistLetter,
        "FILING CHECKLIST",
        style,
    );

    let names = model.applicant_names();
    let addressee = if names.is_empty() {
        blank_filler(30)
    } else {
        join_list(&names)
    };
    document.push(letter_head(&compose, model, format!("Dear {addressee}:")));

    let mut signing = Section::with_heading("signing", "1. Signing the documents");
    let form = applicant_affidavit_form(model.grant_type);
    signing.push(compose.text(format!(
        "Sign the submission for estate grant (Form P2). Swear or affirm the affidavit of \
         applicant (Form {form}) before a lawyer, notary public or commissioner for taking \
         affidavits. Do not sign the affidavit until you are in front of that person."
    )));
    if model.filing.assets_affidavit_submitted {
        signing.push(compose.text(
            "The affidavit of assets and liabilities (Form P10) must be sworn at the same \
             time. Check each value against your records before you sign.",
        ));
    }
    document.push(signing);

    let mut delivery = Section::with_heading("delivery", "2. Delivering the notice");
    let selection = delivery_step().select(model);
    delivery.push(compose.choice(
        selection.group,
        None,
        &selection,
        vec![
            (
                "complete",
                format!(
                    "The notice of proposed application (Form P1) has been delivered to {} \
                     person(s). Swear the affidavit of delivery (Form P9) after the last \
                     delivery.",
                    model.deliveries.len()
                ),
            ),
            (
                "waived",
                "No person is entitled to notice, so no affidavit of delivery is required."
                    .to_string(),
            ),
            (
                "outstanding",
                "Deliver the notice of proposed application (Form P1) to every person entitled \
                 to notice, then swear the affidavit of delivery (Form P9)."
                    .to_string(),
            ),
        ],
    ));

    let selection = earliest_submission().select(model);
    delivery.push(compose.choice(
        selection.group,
        None,
        &selection,
        vec![
            (
                "scheduled",
                format!(
                    "The submission may be filed on or after {}, which is {} days after the \
                     last delivery.",
                    format_date(earliest_submission_date(model), 20),
                    NOTICE_PERIOD_DAYS
                ),
            ),
            (
                "not_scheduled",
                format!(
                    "The submission may be filed {NOTICE_PERIOD_DAYS} days after the last \
                     delivery, on or after {}.",
                    blank_filler(20)
                ),
            ),
        ],
    ));
    document.push(delivery);

    let mut creditors = Section::with_heading("creditors", "3. Creditors");
    let selection = creditor_notice().select(model);
    creditors.push(compose.choice(
        selection.group,
        None,
        &selection,
        vec![
            (
                "listed",
                "Give notice of the application to the following creditors of the estate:"
                    .to_string(),
            ),
            (
                "none_known",
                "No creditors of the estate are known. Tell us if any come forward.".to_string(),
            ),
        ],
    ));
    if !model.creditors.is_empty() {
        let rows = model
            .creditors
            .iter()
            .map(|creditor| {
                TableRow::new(vec![
                    or_blank(&creditor.name, 30),
                    creditor
                        .amount
                        .map_or_else(|| blank_filler(12), format_currency),
                ])
            })
            .collect();
        creditors.push(compose.table("creditors", &["Creditor", "Amount owing"], rows));
    }
    document.push(creditors);

    let mut copies = Section::with_heading("certified_copies", "4. Certified copies");
    copies.push(compose.text(if model.filing.certified_copies > 0 {
        format!(
            "You have asked for {} certified copies of the grant. Include the registry fee for \
             each copy with the filing. Banks and land title offices usually need their own \
             copy.",
            model.filing.certified_copies
        )
    } else {
        "You have not asked for certified copies of the grant. Most financial institutions \
         and the land title office will need one; copies can be ordered later for a fee."
            .to_string()
    }));
    document.push(copies);

    document.push(closing(&compose, model));
    document
}
