use super::coerce::{clean, non_empty};
use super::names::split_full_name;
use super::records::{AddressRecord, BeneficiaryRecord, ExecutorRecord};
use crate::estate::{
    Address, Applicant, ApplicantKind, ExecutorDisposition, Family, FamilyMember,
    IntestateSuccessor, OtherExecutor, PersonName, Relationship, Spouse, SpouseStatus,
};
use serde_json::Value;
use tracing::warn;

pub(crate) fn address_from_record(record: &AddressRecord) -> Address {
    let street = [record.line1.as_ref(), record.line2.as_ref()]
        .into_iter()
        .filter_map(non_empty)
        .collect::<Vec<_>>()
        .join(", ");

    Address {
        po_box: clean(record.po_box.as_ref()),
        street,
        city: clean(record.city.as_ref()),
        region: clean(record.region.as_ref()),
        country: clean(record.country.as_ref()),
        postal_code: clean(record.postal_code.as_ref()),
    }
}

/// Structured name parts win over the free-text name when any part is set.
pub(crate) fn name_from_parts(
    first: Option<&String>,
    middle: Option<&String>,
    last: Option<&String>,
    full_name: Option<&String>,
) -> PersonName {
    let structured = PersonName::new(clean(first), clean(middle), clean(last));
    if structured.is_empty() {
        split_full_name(&clean(full_name))
    } else {
        structured
    }
}

fn disposition_for(status: Option<&String>) -> Option<ExecutorDisposition> {
    let status = clean(status).to_ascii_lowercase();
    match status.as_str() {
        "renounced" | "renouncing" => Some(ExecutorDisposition::Renounced),
        "deceased" | "died" | "predeceased" => Some(ExecutorDisposition::Deceased),
        "reserved" | "power_reserved" | "power reserved" => {
            Some(ExecutorDisposition::PowerReserved)
        }
        _ => None,
    }
}

fn applicant_from_record(record: &ExecutorRecord) -> Applicant {
    let kind = if record.is_organization.unwrap_or(false) {
        ApplicantKind::Organization
    } else {
        ApplicantKind::Individual
    };

    Applicant {
        name: name_from_parts(
            record.first_name.as_ref(),
            record.middle_name.as_ref(),
            record.last_name.as_ref(),
            record.full_name.as_ref(),
        ),
        organization_name: clean(record.organization_name.as_ref()),
        kind,
        address: record
            .address
            .as_ref()
            .map(address_from_record)
            .unwrap_or_default(),
        email: clean(record.email.as_ref()),
        phone: clean(record.phone.as_ref()),
        named_in_will: record.named_in_will.unwrap_or(false),
        relationship: Relationship::parse(&clean(record.relationship.as_ref())),
    }
}

/// Splits executor records into people applying and people who are not.
pub(crate) fn partition_executors(
    records: &[ExecutorRecord],
) -> (Vec<Applicant>, Vec<OtherExecutor>) {
    let mut applicants = Vec::new();
    let mut others = Vec::new();

    for record in records {
        let applicant = applicant_from_record(record);
        match disposition_for(record.status.as_ref()) {
            Some(disposition) => others.push(OtherExecutor {
                name: applicant.display_name(),
                disposition,
            }),
            None => applicants.push(applicant),
        }
    }

    (applicants, others)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BeneficiaryKind {
    Spouse,
    Child,
    IntestateSuccessor,
    Other,
}

impl BeneficiaryKind {
    fn parse(raw: Option<&String>) -> Self {
        let normalized = clean(raw).to_ascii_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "spouse" => Self::Spouse,
            "child" | "stepchild" | "step_child" => Self::Child,
            "intestate_successor" | "successor" => Self::IntestateSuccessor,
            _ => Self::Other,
        }
    }
}

fn is_surviving(status: Option<&String>) -> bool {
    !matches!(
        clean(status).to_ascii_lowercase().as_str(),
        "deceased" | "predeceased" | "died"
    )
}

/// Partitions the beneficiary list by its `type` tag. The intake payload is
/// consulted only for the marital status when no spouse record exists.
pub(crate) fn family_from_records(
    records: &[BeneficiaryRecord],
    payload: Option<&Value>,
) -> Family {
    let mut family = Family::default();
    let mut spouse: Option<Spouse> = None;

    for record in records {
        let name = clean(record.full_name.as_ref());
        let surviving = is_surviving(record.status.as_ref());

        match BeneficiaryKind::parse(record.kind.as_ref()) {
            BeneficiaryKind::Spouse => {
                if spouse.is_some() {
                    warn!(name = %name, "ignoring additional spouse record");
                    continue;
                }
                let status = if surviving {
                    SpouseStatus::Surviving
                } else {
                    SpouseStatus::Deceased
                };
                spouse = Some(Spouse { status, name });
            }
            BeneficiaryKind::Child => family.children.push(FamilyMember { name, surviving }),
            BeneficiaryKind::IntestateSuccessor => {
                family.intestate_successors.push(IntestateSuccessor {
                    name,
                    relationship: clean(record.relationship.as_ref()),
                })
            }
            BeneficiaryKind::Other => family
                .other_beneficiaries
                .push(FamilyMember { name, surviving }),
        }
    }

    family.spouse = spouse.unwrap_or_else(|| {
        let never_married = payload
            .and_then(|payload| payload.get("marital_status"))
            .and_then(Value::as_str)
            .is_some_and(|status| status.trim().eq_ignore_ascii_case("never_married"));
        Spouse {
            status: if never_married {
                SpouseStatus::NeverMarried
            } else {
                SpouseStatus::Unspecified
            },
            name: String::new(),
        }
    });

    family
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn executor(full_name: &str, status: Option<&str>) -> ExecutorRecord {
        ExecutorRecord {
            full_name: Some(full_name.to_string()),
            status: status.map(str::to_string),
            ..ExecutorRecord::default()
        }
    }

    fn beneficiary(name: &str, kind: &str, status: Option<&str>) -> BeneficiaryRecord {
        BeneficiaryRecord {
            full_name: Some(name.to_string()),
            kind: Some(kind.to_string()),
            status: status.map(str::to_string),
            relationship: None,
        }
    }

    #[test]
    fn address_lines_are_concatenated() {
        let address = address_from_record(&AddressRecord {
            line1: Some("12 Oak St".to_string()),
            line2: Some(" Unit 4 ".to_string()),
            city: Some("Victoria".to_string()),
            ..AddressRecord::default()
        });
        assert_eq!(address.street, "12 Oak St, Unit 4");
        assert_eq!(address.city, "Victoria");
    }

    #[test]
    fn renounced_and_deceased_executors_are_not_applicants() {
        let mut named = executor("Jane Q Public", Some("active"));
        named.named_in_will = Some(true);
        let records = vec![
            named,
            executor("Tom Renouncer", Some("Renounced")),
            executor("Old Friend", Some("deceased")),
            executor("Later Applicant", Some("reserved")),
        ];

        let (applicants, others) = partition_executors(&records);
        assert_eq!(applicants.len(), 1);
        assert_eq!(applicants[0].name, PersonName::new("Jane", "Q", "Public"));
        assert!(applicants[0].named_in_will);
        let dispositions: Vec<_> = others.iter().map(|other| other.disposition).collect();
        assert_eq!(
            dispositions,
            vec![
                ExecutorDisposition::Renounced,
                ExecutorDisposition::Deceased,
                ExecutorDisposition::PowerReserved
            ]
        );
        assert_eq!(others[0].name, "Tom Renouncer");
    }

    #[test]
    fn structured_name_parts_take_priority() {
        let name = name_from_parts(
            Some(&"Ada".to_string()),
            None,
            Some(&"Lovelace".to_string()),
            Some(&"Augusta Ada King".to_string()),
        );
        assert_eq!(name.display(), "Ada Lovelace");
    }

    #[test]
    fn beneficiaries_are_partitioned_by_type() {
        let family = family_from_records(
            &[
                beneficiary("Pat Spouse", "spouse", None),
                beneficiary("Kid One", "child", None),
                beneficiary("Kid Two", "stepchild", Some("predeceased")),
                beneficiary("Cousin", "friend", None),
                beneficiary("Heir", "intestate_successor", None),
            ],
            None,
        );

        assert_eq!(family.spouse.status, SpouseStatus::Surviving);
        assert_eq!(family.spouse.name, "Pat Spouse");
        assert_eq!(family.children.len(), 2);
        assert!(!family.children[1].surviving);
        assert_eq!(family.other_beneficiaries[0].name, "Cousin");
        assert_eq!(family.intestate_successors[0].name, "Heir");
    }

    #[test]
    fn missing_spouse_uses_payload_marital_status() {
        let payload = json!({ "marital_status": "never_married" });
        let family = family_from_records(&[], Some(&payload));
        assert_eq!(family.spouse.status, SpouseStatus::NeverMarried);

        let family = family_from_records(&[], None);
        assert_eq!(family.spouse.status, SpouseStatus::Unspecified);
        assert!(family.children.is_empty());
    }
}
