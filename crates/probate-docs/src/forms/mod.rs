//! Per-document generators. Each one is a pure function of the estate model
//! and style profile; the same inputs always produce the same tree.

pub mod administration_affidavit;
pub mod assets_affidavit;
mod common;
pub mod delivery_affidavit;
pub mod letters;
pub mod notice;
pub mod short_affidavit;
pub mod submission;

#[cfg(test)]
pub(crate) mod fixtures;

pub use assets_affidavit::EstateTotals;
pub use letters::earliest_submission_date;

use crate::document::{DispatchError, DocumentContent, DocumentKind};
use crate::estate::EstateModel;
use crate::format::StyleProfile;
use tracing::info;

pub fn generate(kind: DocumentKind, model: &EstateModel, style: &StyleProfile) -> DocumentContent {
    let document = match kind {
        DocumentKind::Notice => notice::generate(model, style),
        DocumentKind::Submission => submission::generate(model, style),
        DocumentKind::ShortFormAffidavit => short_affidavit::generate(model, style),
        DocumentKind::AdministrationAffidavit => administration_affidavit::generate(model, style),
        DocumentKind::DeliveryAffidavit => delivery_affidavit::generate(model, style),
        DocumentKind::AssetsAffidavit => assets_affidavit::generate(model, style),
        DocumentKind::RegistryCoverLetter => letters::registry_cover_letter(model, style),
        DocumentKind::FilingChecklistLetter => letters::filing_checklist_letter(model, style),
    };

    info!(
        kind = %kind,
        grant_type = model.grant_type.id(),
        sections = document.sections.len(),
        "document generated"
    );

    document
}

/// Parses the kind identifier first so an unknown id fails before any work.
pub fn generate_by_id(
    kind: &str,
    model: &EstateModel,
    style: &StyleProfile,
) -> Result<DocumentContent, DispatchError> {
    let kind: DocumentKind = kind.parse()?;
    Ok(generate(kind, model, style))
}
