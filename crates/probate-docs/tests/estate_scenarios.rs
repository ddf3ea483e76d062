use chrono::NaiveDate;
use probate_docs::document::DocumentKind;
use probate_docs::estate::{
    Applicant, Asset, AssetSchedule, Delivery, DeliveryMethod, EstateModel, GrantType, Money,
    PersonName, Relationship, SecuredAsset, SecuredDebt, SpouseStatus, Will,
};
use probate_docs::format::StyleProfile;
use probate_docs::forms::{self, EstateTotals};
use probate_docs::mapping::{build_estate_model, CaseRecord, ManualOverrides};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn applicant(first: &str, relationship: Relationship) -> Applicant {
    Applicant {
        name: PersonName::new(first, "", "Doe"),
        relationship,
        ..Applicant::default()
    }
}

fn probate_case() -> EstateModel {
    let mut model = EstateModel {
        grant_type: GrantType::Probate,
        will: Some(Will {
            exists: true,
            signed_on: Some(date(2016, 2, 29)),
            original_available: true,
            ..Will::default()
        }),
        applicants: vec![applicant("Jane", Relationship::Child)],
        ..EstateModel::default()
    };
    model.deceased.name = PersonName::new("John", "", "Doe");
    model.deceased.date_of_death = Some(date(2024, 1, 15));
    model
}

fn delivery(recipient: &str, method: DeliveryMethod, acknowledged: bool) -> Delivery {
    Delivery {
        recipient: recipient.to_string(),
        method,
        delivered_on: Some(date(2024, 2, 1)),
        on_behalf_of: None,
        acknowledged,
    }
}

#[test]
fn scenario_a_aggregates_real_and_intangible_property() {
    let assets = AssetSchedule {
        real_property: vec![
            SecuredAsset {
                description: "House".to_string(),
                value: Money::from_dollars(500_000),
                secured_debt: Some(SecuredDebt {
                    creditor: "Bank".to_string(),
                    amount: Money::from_dollars(200_000),
                }),
            },
            SecuredAsset {
                description: "Lot".to_string(),
                value: Money::from_dollars(300_000),
                secured_debt: None,
            },
        ],
        intangible_property: vec![Asset {
            description: "Savings".to_string(),
            value: Money::from_dollars(50_000),
        }],
        ..AssetSchedule::default()
    };

    let totals = EstateTotals::compute(&assets);
    assert_eq!(totals.real, Money::from_dollars(800_000));
    assert_eq!(totals.real_secured, Money::from_dollars(200_000));
    assert_eq!(totals.tangible, Money::ZERO);
    assert_eq!(totals.intangible, Money::from_dollars(50_000));
    assert_eq!(totals.gross, Money::from_dollars(850_000));
    assert_eq!(totals.net, Money::from_dollars(650_000));

    let mut model = probate_case();
    model.assets = assets;
    let text = forms::generate(DocumentKind::AssetsAffidavit, &model, &StyleProfile::default())
        .plain_text();
    assert!(text.contains("$850,000.00"));
    assert!(text.contains("$650,000.00"));
}

#[test]
fn scenario_b_single_applicant_probate_checks_single_mode() {
    let model = probate_case();
    let document = forms::generate(DocumentKind::Submission, &model, &StyleProfile::default());
    let mode = document
        .checkbox_group("affidavit_mode")
        .expect("affidavit mode group");

    assert!(mode.is_checked("single_applicant"));
    assert!(!mode.is_checked("joint_affidavit"));
    assert!(!mode.is_checked("supplemental_p8"));
}

#[test]
fn scenario_c_deliveries_are_split_by_method() {
    let mut model = probate_case();
    model.deliveries = vec![
        delivery("A", DeliveryMethod::Postal, false),
        delivery("B", DeliveryMethod::Postal, false),
        delivery("C", DeliveryMethod::Electronic, true),
    ];

    let document = forms::generate(
        DocumentKind::DeliveryAffidavit,
        &model,
        &StyleProfile::default(),
    );
    let postal = document.table("postal_deliveries").expect("postal table");
    assert_eq!(postal.column(0), vec!["A", "B"]);
    let electronic = document
        .table("electronic_deliveries")
        .expect("electronic table");
    assert_eq!(electronic.column(0), vec!["C"]);
    assert!(document
        .checkbox_group("electronic_acknowledged")
        .expect("acknowledgement box")
        .is_checked("electronic_acknowledged"));
}

#[test]
fn scenario_d_child_with_surviving_spouse_priority() {
    let mut model = probate_case();
    model.grant_type = GrantType::AdministrationWithoutWill;
    model.will = None;
    model.family.spouse.status = SpouseStatus::Surviving;

    let document = forms::generate(
        DocumentKind::AdministrationAffidavit,
        &model,
        &StyleProfile::default(),
    );
    let priority = document.checkbox_group("priority.1").expect("priority group");
    assert!(priority.is_checked("child_with_surviving_spouse"));
    assert!(!priority.is_checked("child_without_spouse"));
}

#[test]
fn generators_are_deterministic() {
    let mut model = probate_case();
    model.deliveries = vec![delivery("A", DeliveryMethod::Personal, false)];
    let style = StyleProfile::default();

    for kind in DocumentKind::ordered() {
        let first = forms::generate(kind, &model, &style);
        let second = forms::generate(kind, &model.clone(), &style);
        assert_eq!(first, second, "{kind} differs between runs");
        assert_eq!(
            serde_json::to_string(&first).expect("serializes"),
            serde_json::to_string(&second).expect("serializes")
        );
    }
}

#[test]
fn empty_records_yield_a_printable_document_set() {
    let model = build_estate_model(
        &CaseRecord::default(),
        None,
        &[],
        &[],
        &[],
        &ManualOverrides::new(),
    );
    assert!(model.applicants.is_empty());
    assert!(model.deliveries.is_empty());
    assert!(model.assets.real_property.is_empty());
    assert!(model.family.children.is_empty());
    assert_eq!(EstateTotals::compute(&model.assets), EstateTotals::default());

    let style = StyleProfile::default();
    for kind in DocumentKind::ordered() {
        let document = forms::generate(kind, &model, &style);
        assert!(!document.sections.is_empty());
        for group in document.checkbox_groups() {
            assert!(!group.options.is_empty(), "{} has no options", group.id);
        }
        assert!(document.plain_text().contains("...."));
    }
}

#[test]
fn dispatch_accepts_ids_and_rejects_unknown_kinds() {
    let model = probate_case();
    let style = StyleProfile::default();

    let document = forms::generate_by_id("p10-assets-affidavit", &model, &style)
        .expect("known kind");
    assert_eq!(document.kind, DocumentKind::AssetsAffidavit);

    assert!(forms::generate_by_id("p8-supplemental", &model, &style).is_err());
}
