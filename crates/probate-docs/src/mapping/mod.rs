//! Builds the canonical [`EstateModel`] from case-management records.
//!
//! Every field follows the same precedence: a well-formed manual override
//! wins, then the value derived from the records, then an empty default.
//! Building never fails; whatever is missing is left blank for the printed
//! form to be completed by hand.

mod coerce;
mod import;
mod names;
mod overrides;
mod people;
mod records;
mod schedule;

pub use import::{ScheduleImportError, ScheduleImporter};
pub use names::split_full_name;
pub use overrides::ManualOverrides;
pub use records::{
    AddressRecord, BeneficiaryRecord, CaseRecord, CreditorRecord, DeliveryRecord,
    ExecutorRecord, IntakeDraft, ScheduleRecord,
};
pub use schedule::AssetCategory;

use crate::config::DocumentConfig;
use crate::estate::{
    Address, AssetSchedule, Codicil, Creditor, Deceased, Delivery, DeliveryCapacity,
    DeliveryMethod, ElectronicWillDemand, EstateModel, Family, Filing, ForeignGrant, GrantType,
    IndigenousStatus, Will,
};
use coerce::{clean, money_from_value, non_empty, parse_date, parse_optional_date};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

/// Every input of a single generation request, as posted to the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseBundle {
    pub case: CaseRecord,
    pub intake: Option<IntakeDraft>,
    pub executors: Vec<ExecutorRecord>,
    pub beneficiaries: Vec<BeneficiaryRecord>,
    pub schedules: Vec<ScheduleRecord>,
    pub overrides: ManualOverrides,
}

impl CaseBundle {
    /// Builds the model, filling the registry from configuration when neither
    /// the records nor the overrides name one.
    pub fn build(&self, config: &DocumentConfig) -> EstateModel {
        let mut model = build_estate_model(
            &self.case,
            self.intake.as_ref(),
            &self.executors,
            &self.beneficiaries,
            &self.schedules,
            &self.overrides,
        );

        if model.filing.registry.trim().is_empty() && !config.default_registry.is_empty() {
            model.filing.registry = config.default_registry.clone();
        }

        model
    }
}

pub fn build_estate_model(
    case: &CaseRecord,
    intake: Option<&IntakeDraft>,
    executors: &[ExecutorRecord],
    beneficiaries: &[BeneficiaryRecord],
    schedules: &[ScheduleRecord],
    overrides: &ManualOverrides,
) -> EstateModel {
    let has_will = overrides
        .flag("will.exists")
        .or_else(|| intake.and_then(|draft| draft.has_will))
        .or(case.has_will);

    let grant_type = overrides
        .text("grant_type")
        .and_then(|raw| GrantType::parse(&raw))
        .or_else(|| case.grant_type.as_deref().and_then(GrantType::parse))
        .unwrap_or(if has_will.unwrap_or(false) {
            GrantType::Probate
        } else {
            GrantType::AdministrationWithoutWill
        });

    let (derived_applicants, derived_others) = people::partition_executors(executors);
    let payload = intake.map(|draft| &draft.payload);

    let model = EstateModel {
        deceased: deceased(case, overrides),
        grant_type,
        will: grant_type
            .implies_will()
            .then(|| will(intake, has_will.unwrap_or(true), overrides)),
        applicants: overrides
            .value("applicants")
            .unwrap_or(derived_applicants),
        other_executors: overrides
            .value("other_executors")
            .unwrap_or(derived_others),
        family: family(beneficiaries, payload, overrides),
        assets: assets(schedules, payload, overrides),
        deliveries: overrides
            .value("deliveries")
            .unwrap_or_else(|| deliveries(case)),
        filing: filing(case, overrides),
        citors: overrides.value("citors").unwrap_or_else(|| {
            case.citors
                .iter()
                .map(|citor| citor.trim().to_string())
                .filter(|citor| !citor.is_empty())
                .collect()
        }),
        creditors: overrides
            .value("creditors")
            .unwrap_or_else(|| creditors(case)),
        foreign_grant: overrides
            .value("foreign_grant")
            .or_else(|| foreign_grant(case, grant_type)),
    };

    debug!(
        grant_type = model.grant_type.id(),
        applicants = model.applicants.len(),
        deliveries = model.deliveries.len(),
        overrides = overrides.keys().count(),
        "estate model built"
    );

    model
}

fn deceased(case: &CaseRecord, overrides: &ManualOverrides) -> Deceased {
    let mut name = people::name_from_parts(
        case.deceased_first_name.as_ref(),
        case.deceased_middle_name.as_ref(),
        case.deceased_last_name.as_ref(),
        case.deceased_full_name.as_ref(),
    );
    if let Some(first) = overrides.text("deceased.first_name") {
        name.first = first;
    }
    if let Some(middle) = overrides.text("deceased.middle_name") {
        name.middle = middle;
    }
    if let Some(last) = overrides.text("deceased.last_name") {
        name.last = last;
    }

    let treaty_first_nation = overrides
        .text("deceased.treaty_first_nation")
        .unwrap_or_else(|| clean(case.treaty_first_nation.as_ref()));

    Deceased {
        name,
        aliases: overrides.value("deceased.aliases").unwrap_or_else(|| {
            case.deceased_aliases
                .iter()
                .map(|alias| alias.trim().to_string())
                .filter(|alias| !alias.is_empty())
                .collect()
        }),
        date_of_death: overrides
            .date("deceased.date_of_death")
            .or_else(|| parse_optional_date(case.date_of_death.as_ref())),
        place_of_death: overrides
            .text("deceased.place_of_death")
            .unwrap_or_else(|| clean(case.place_of_death.as_ref())),
        last_address: overrides.value("deceased.last_address").unwrap_or_else(|| {
            case.last_address
                .as_ref()
                .map(people::address_from_record)
                .unwrap_or_default()
        }),
        domiciled_in_jurisdiction: overrides
            .flag("deceased.domiciled_in_jurisdiction")
            .or(case.domiciled_in_bc)
            .unwrap_or(false),
        indigenous: IndigenousStatus {
            nisgaa_citizen: overrides
                .flag("deceased.nisgaa_citizen")
                .or(case.nisgaa_citizen)
                .unwrap_or(false),
            treaty_first_nation_member: !treaty_first_nation.is_empty(),
            treaty_first_nation,
        },
    }
}

fn will(intake: Option<&IntakeDraft>, exists: bool, overrides: &ManualOverrides) -> Will {
    let draft = intake.cloned().unwrap_or_default();

    let codicils = overrides.value("will.codicils").unwrap_or_else(|| {
        draft
            .codicil_dates
            .iter()
            .filter(|raw| !raw.trim().is_empty())
            .map(|raw| Codicil {
                signed_on: parse_date(raw),
            })
            .collect()
    });

    let referenced_documents = overrides
        .value("will.referenced_documents")
        .unwrap_or_else(|| trimmed_list(&draft.will_referenced_documents));

    Will {
        exists,
        signed_on: overrides
            .date("will.signed_on")
            .or_else(|| parse_optional_date(draft.will_date.as_ref())),
        signed_at: overrides
            .text("will.signed_at")
            .unwrap_or_else(|| clean(draft.will_signed_at.as_ref())),
        electronic: overrides
            .flag("will.electronic")
            .or(draft.will_electronic)
            .unwrap_or(false),
        original_available: overrides
            .flag("will.original_available")
            .or(draft.will_original_available)
            .unwrap_or(false),
        codicils,
        has_alterations: overrides
            .flag("will.has_alterations")
            .or(draft.will_has_alterations)
            .unwrap_or(false),
        has_obliterations: overrides
            .flag("will.has_obliterations")
            .or(draft.will_has_obliterations)
            .unwrap_or(false),
        referenced_documents,
        translation_required: overrides
            .flag("will.translation_required")
            .or(draft.will_translation_required)
            .unwrap_or(false),
        electronic_demand: ElectronicWillDemand {
            demanded: overrides
                .flag("will.electronic_demand.demanded")
                .or(draft.electronic_will_demanded)
                .unwrap_or(false),
            provided_to: overrides
                .value("will.electronic_demand.provided_to")
                .unwrap_or_else(|| trimmed_list(&draft.electronic_will_provided_to)),
        },
    }
}

fn trimmed_list(items: &[String]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

fn family(
    beneficiaries: &[BeneficiaryRecord],
    payload: Option<&Value>,
    overrides: &ManualOverrides,
) -> Family {
    let mut family = people::family_from_records(beneficiaries, payload);

    if let Some(status) = overrides.value("family.spouse.status") {
        family.spouse.status = status;
    }
    if let Some(name) = overrides.text("family.spouse.name") {
        family.spouse.name = name;
    }
    if let Some(children) = overrides.value("family.children") {
        family.children = children;
    }
    if let Some(others) = overrides.value("family.other_beneficiaries") {
        family.other_beneficiaries = others;
    }
    if let Some(successors) = overrides.value("family.intestate_successors") {
        family.intestate_successors = successors;
    }

    family
}

fn assets(
    schedules: &[ScheduleRecord],
    payload: Option<&Value>,
    overrides: &ManualOverrides,
) -> AssetSchedule {
    let mut assets = if !schedules.is_empty() {
        schedule::assets_from_schedule(schedules)
    } else if let Some(payload) = payload {
        schedule::assets_from_schedule(&schedule::schedule_from_payload(payload))
    } else {
        AssetSchedule::default()
    };

    if let Some(items) = overrides.secured_assets("assets.real_property") {
        assets.real_property = items;
    }
    if let Some(items) = overrides.secured_assets("assets.tangible_property") {
        assets.tangible_property = items;
    }
    if let Some(items) = overrides.assets("assets.intangible_property") {
        assets.intangible_property = items;
    }
    if let Some(items) = overrides.assets("assets.outside_real_property") {
        assets.outside_real_property = items;
    }
    if let Some(items) = overrides.assets("assets.outside_personal_property") {
        assets.outside_personal_property = items;
    }

    assets
}

fn deliveries(case: &CaseRecord) -> Vec<Delivery> {
    case.deliveries
        .iter()
        .filter_map(|record| {
            let raw_method = clean(record.method.as_ref());
            let Some(method) = DeliveryMethod::parse(&raw_method) else {
                warn!(method = %raw_method, "skipping delivery with unknown method");
                return None;
            };

            let on_behalf_of = non_empty(record.on_behalf_of.as_ref()).map(|person| {
                DeliveryCapacity {
                    person,
                    capacity: clean(record.capacity.as_ref()),
                }
            });

            Some(Delivery {
                recipient: clean(record.recipient.as_ref()),
                method,
                delivered_on: parse_optional_date(record.delivered_on.as_ref()),
                on_behalf_of,
                acknowledged: record.acknowledged.unwrap_or(false),
            })
        })
        .collect()
}

fn creditors(case: &CaseRecord) -> Vec<Creditor> {
    case.creditors
        .iter()
        .filter_map(|record| {
            let name = non_empty(record.name.as_ref())?;
            Some(Creditor {
                name,
                amount: record.amount.as_ref().and_then(money_from_value),
            })
        })
        .collect()
}

fn filing(case: &CaseRecord, overrides: &ManualOverrides) -> Filing {
    let address_for_service = overrides
        .value::<Address>("filing.address_for_service")
        .or_else(|| {
            case.service_address
                .as_ref()
                .map(people::address_from_record)
        })
        .filter(|address| !address.is_empty());

    Filing {
        registry: overrides
            .text("filing.registry")
            .unwrap_or_else(|| clean(case.registry.as_ref())),
        submission_date: overrides
            .date("filing.submission_date")
            .or_else(|| parse_optional_date(case.submission_date.as_ref())),
        certified_copies: overrides
            .count("filing.certified_copies")
            .or(case.certified_copies)
            .unwrap_or(0),
        address_for_service,
        service_email: overrides
            .text("filing.service_email")
            .unwrap_or_else(|| clean(case.service_email.as_ref())),
        service_phone: overrides
            .text("filing.service_phone")
            .unwrap_or_else(|| clean(case.service_phone.as_ref())),
        joint_affidavit: flag(overrides, "filing.joint_affidavit", case.joint_affidavit),
        supplemental_affidavit: flag(
            overrides,
            "filing.supplemental_affidavit",
            case.supplemental_affidavit,
        ),
        wills_search_certificate: flag(
            overrides,
            "filing.wills_search_certificate",
            case.wills_search_certificate,
        ),
        assets_affidavit_submitted: flag(
            overrides,
            "filing.assets_affidavit_submitted",
            case.assets_affidavit_submitted,
        ),
        delivery_waived: flag(overrides, "filing.delivery_waived", case.delivery_waived),
    }
}

fn flag(overrides: &ManualOverrides, key: &str, derived: Option<bool>) -> bool {
    overrides.flag(key).or(derived).unwrap_or(false)
}

fn foreign_grant(case: &CaseRecord, grant_type: GrantType) -> Option<ForeignGrant> {
    let court = clean(case.foreign_grant_court.as_ref());
    let jurisdiction = clean(case.foreign_grant_jurisdiction.as_ref());
    let issued_on = parse_optional_date(case.foreign_grant_date.as_ref());

    let present = !court.is_empty() || !jurisdiction.is_empty() || issued_on.is_some();
    (grant_type.is_ancillary() || present).then_some(ForeignGrant {
        court,
        jurisdiction,
        issued_on,
    })
}
