//! Model builders shared by the generator unit tests.

use crate::document::{ClauseTable, DocumentContent};
use crate::estate::{
    Address, Applicant, Asset, Codicil, Delivery, DeliveryCapacity, DeliveryMethod,
    ElectronicWillDemand, EstateModel, ExecutorDisposition, FamilyMember, ForeignGrant, GrantType,
    Money, OtherExecutor, PersonName, Relationship, SecuredAsset, SecuredDebt, Spouse,
    SpouseStatus, Will,
};
use chrono::NaiveDate;

pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(crate) fn applicant(first: &str, last: &str, relationship: Relationship) -> Applicant {
    Applicant {
        name: PersonName::new(first, "", last),
        address: Address {
            street: "100 Government St".to_string(),
            city: "Victoria".to_string(),
            region: "BC".to_string(),
            country: "Canada".to_string(),
            postal_code: "V8W 1A1".to_string(),
            ..Address::default()
        },
        named_in_will: true,
        relationship,
        ..Applicant::default()
    }
}

/// A complete probate case with one applicant.
pub(crate) fn probate_model() -> EstateModel {
    let mut model = EstateModel {
        grant_type: GrantType::Probate,
        will: Some(Will {
            exists: true,
            signed_on: Some(date(2015, 6, 1)),
            signed_at: "Victoria".to_string(),
            original_available: true,
            ..Will::default()
        }),
        applicants: vec![applicant("Jane", "Doe", Relationship::Child)],
        ..EstateModel::default()
    };
    model.deceased.name = PersonName::new("John", "Albert", "Doe");
    model.deceased.date_of_death = Some(date(2024, 1, 15));
    model.deceased.domiciled_in_jurisdiction = true;
    model.deceased.last_address.city = "Victoria".to_string();
    model.filing.registry = "Victoria".to_string();
    model.family.spouse = Spouse {
        status: SpouseStatus::Deceased,
        name: "Mary Doe".to_string(),
    };
    model.family.children = vec![FamilyMember {
        name: "Jane Doe".to_string(),
        surviving: true,
    }];
    model
}

/// Every combination of the facts that drive clause selection.
pub(crate) fn model_grid() -> Vec<EstateModel> {
    let relationships = [
        Relationship::Spouse,
        Relationship::Child,
        Relationship::Grandchild,
        Relationship::Parent,
        Relationship::Sibling,
        Relationship::Other("niece".to_string()),
        Relationship::Unspecified,
    ];
    let spouse_statuses = [
        SpouseStatus::Surviving,
        SpouseStatus::Deceased,
        SpouseStatus::NeverMarried,
        SpouseStatus::Unspecified,
    ];

    let mut models = Vec::new();
    for grant_type in GrantType::ordered() {
        for will_variant in 0..4 {
            for applicant_count in 0..3 {
                for (idx, status) in spouse_statuses.iter().enumerate() {
                    for toggle in [false, true] {
                        let pick = (idx * 2 + applicant_count + usize::from(toggle))
                            % relationships.len();
                        let relationship = relationships[pick].clone();
                        models.push(grid_model(
                            grant_type,
                            will_variant,
                            applicant_count,
                            *status,
                            relationship,
                            toggle,
                        ));
                    }
                }
            }
        }
    }
    models
}

fn grid_model(
    grant_type: GrantType,
    will_variant: usize,
    applicant_count: usize,
    spouse_status: SpouseStatus,
    relationship: Relationship,
    toggle: bool,
) -> EstateModel {
    let mut model = EstateModel {
        grant_type,
        ..EstateModel::default()
    };

    if grant_type.implies_will() {
        model.will = Some(Will {
            exists: will_variant != 0,
            electronic: will_variant >= 2,
            original_available: toggle,
            codicils: if toggle {
                vec![Codicil {
                    signed_on: Some(date(2018, 3, 4)),
                }]
            } else {
                Vec::new()
            },
            has_alterations: will_variant <= 1 && toggle,
            has_obliterations: will_variant == 3 || (will_variant == 0 && !toggle),
            referenced_documents: if toggle {
                vec!["Memorandum of wishes".to_string()]
            } else {
                Vec::new()
            },
            translation_required: !toggle,
            electronic_demand: ElectronicWillDemand {
                demanded: will_variant == 3,
                provided_to: if toggle {
                    vec!["Sam Doe".to_string()]
                } else {
                    Vec::new()
                },
            },
            ..Will::default()
        });
    }

    model.applicants = (0..applicant_count)
        .map(|idx| {
            let mut applicant = applicant(&format!("Applicant{idx}"), "Doe", relationship.clone());
            applicant.named_in_will = toggle && idx == 0;
            applicant
        })
        .collect();
    model.filing.joint_affidavit = toggle && applicant_count > 1;
    model.filing.supplemental_affidavit = will_variant == 3;
    model.filing.delivery_waived = will_variant == 2;
    model.filing.wills_search_certificate = toggle;
    model.filing.assets_affidavit_submitted = !toggle;
    model.filing.certified_copies = if toggle { 2 } else { 0 };
    model.filing.address_for_service = toggle.then(|| Address {
        street: "1 Law Chambers".to_string(),
        city: "Vancouver".to_string(),
        ..Address::default()
    });

    model.deceased.domiciled_in_jurisdiction = toggle;
    model.deceased.indigenous.nisgaa_citizen = will_variant == 1;
    model.deceased.indigenous.treaty_first_nation_member = will_variant >= 1 && toggle;
    model.family.spouse = Spouse {
        status: spouse_status,
        name: "Pat Doe".to_string(),
    };
    if toggle {
        model.family.children = vec![FamilyMember {
            name: "Kid Doe".to_string(),
            surviving: will_variant != 1,
        }];
        model.other_executors = vec![OtherExecutor {
            name: "Other Executor".to_string(),
            disposition: if will_variant == 2 {
                ExecutorDisposition::PowerReserved
            } else {
                ExecutorDisposition::Renounced
            },
        }];
        model.citors = vec!["A Citor".to_string()];
    }

    if will_variant % 2 == 0 {
        model.deliveries = vec![
            Delivery {
                recipient: "Postal Person".to_string(),
                method: DeliveryMethod::Postal,
                delivered_on: Some(date(2024, 2, 1)),
                on_behalf_of: toggle.then(|| DeliveryCapacity {
                    person: "Guardian".to_string(),
                    capacity: "parent".to_string(),
                }),
                acknowledged: false,
            },
            Delivery {
                recipient: "Email Person".to_string(),
                method: DeliveryMethod::Electronic,
                delivered_on: Some(date(2024, 2, 3)),
                on_behalf_of: None,
                acknowledged: toggle,
            },
        ];
    }

    if toggle {
        model.assets.real_property = vec![SecuredAsset {
            description: "House".to_string(),
            value: Money::from_dollars(400_000),
            secured_debt: Some(SecuredDebt {
                creditor: "Bank".to_string(),
                amount: Money::from_dollars(100_000),
            }),
        }];
    }
    if will_variant == 3 {
        model.assets.outside_real_property = vec![Asset {
            description: "Cabin in Alberta".to_string(),
            value: Money::from_dollars(75_000),
        }];
    }
    if grant_type.is_ancillary() {
        model.foreign_grant = Some(ForeignGrant {
            court: "Court of King's Bench".to_string(),
            jurisdiction: "Alberta".to_string(),
            issued_on: Some(date(2024, 4, 2)),
        });
    }

    model
}

/// At most one row may match, so selection never has to resolve a conflict.
pub(crate) fn assert_exclusive<C>(table: &ClauseTable<C>, ctx: &C) {
    let matches = table.matching(ctx);
    assert!(
        matches.len() <= 1,
        "group {} matched {:?}",
        table.group(),
        matches
    );
    let selection = table.select(ctx);
    assert!(table.ids().contains(&selection.active));
}

/// Every rendered choice group must show exactly one checked box.
pub(crate) fn assert_single_choice(document: &DocumentContent, group_prefixes: &[&str]) {
    for group in document.checkbox_groups() {
        let base = group.id.split('.').next().unwrap_or_default();
        if group_prefixes.contains(&base) {
            assert_eq!(
                group.checked().len(),
                1,
                "group {} in {} has {} checked",
                group.id,
                document.kind,
                group.checked().len()
            );
        }
    }
}
