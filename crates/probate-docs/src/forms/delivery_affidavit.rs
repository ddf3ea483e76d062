//! Affidavit of delivery (Form P9).

use super::common::{
    all_applicants, court_caption, deceased_name, form_reference, ModelClauses, NONE,
};
use crate::document::{DocumentContent, DocumentKind, Section, TableRow};
use crate::estate::{Delivery, DeliveryMethod, EstateModel};
use crate::format::{
    blank_filler, format_date, join_list, letter_marker, or_blank, Composer, ParagraphOptions,
    StyleProfile,
};

fn group_id(method: DeliveryMethod) -> &'static str {
    match method {
        DeliveryMethod::Postal => "delivery_postal",
        DeliveryMethod::Personal => "delivery_personal",
        DeliveryMethod::Electronic => "delivery_electronic",
    }
}

fn table_id(method: DeliveryMethod) -> &'static str {
    match method {
        DeliveryMethod::Postal => "postal_deliveries",
        DeliveryMethod::Personal => "personal_deliveries",
        DeliveryMethod::Electronic => "electronic_deliveries",
    }
}

fn method_description(method: DeliveryMethod) -> &'static str {
    match method {
        DeliveryMethod::Postal => "by ordinary or registered mail to the following persons",
        DeliveryMethod::Personal => "by personally handing the documents to the following persons",
        DeliveryMethod::Electronic => {
            "by e-mail or other electronic means to the following persons"
        }
    }
}

/// Checked only when at least one electronic delivery exists and every one of
/// them was acknowledged.
pub fn all_electronic_acknowledged(model: &EstateModel) -> bool {
    let electronic = model.deliveries_by(DeliveryMethod::Electronic);
    !electronic.is_empty() && electronic.iter().all(|delivery| delivery.acknowledged)
}

pub(crate) fn will_copy() -> ModelClauses {
    ModelClauses::new("will_copy", "no_will")
        .clause("will_copy_attached", |model| {
            model.will_exists() && model.will.as_ref().is_some_and(|will| !will.electronic)
        })
        .clause("electronic_will_copy", |model| {
            model.will_exists() && model.will.as_ref().is_some_and(|will| will.electronic)
        })
}

pub(crate) fn electronic_will_demand() -> ModelClauses {
    ModelClauses::new("electronic_will_demand", "not_demanded").clause("demanded", |model| {
        model.will_exists()
            && model
                .will
                .as_ref()
                .is_some_and(|will| will.electronic && will.electronic_demand.demanded)
    })
}

pub fn generate(model: &EstateModel, style: &StyleProfile) -> DocumentContent {
    let compose = Composer::new(style);
    let mut document =
        DocumentContent::new(DocumentKind::DeliveryAffidavit, "AFFIDAVIT OF DELIVERY", style);

    let deponents = all_applicants(model);

    let mut section = Section::new("affidavit");
    section.push(form_reference(&compose, "P9", "Rule 25-3 (2)"));
    section.extend(court_caption(&compose, model));
    section.push(compose.title("AFFIDAVIT OF DELIVERY"));
    section.push(compose.paragraph(
        deponents.introduction(),
        ParagraphOptions::default().bold(),
    ));
    let pronoun = deponents.pronoun();

    section.push(compose.numbered(
        "1.",
        format!(
            "{pronoun} delivered a copy of the notice of proposed application in Form P1 in \
             relation to the estate of {}, deceased, to each of the persons named below, in \
             the manner and on the date shown:",
            deceased_name(model)
        ),
    ));

    for method in DeliveryMethod::ordered() {
        let deliveries = model.deliveries_by(method);
        section.push(compose.checkboxes(
            group_id(method),
            None,
            vec![(
                group_id(method),
                method_description(method).to_string(),
                !deliveries.is_empty(),
            )],
            1,
        ));
        if deliveries.is_empty() {
            continue;
        }

        if method == DeliveryMethod::Electronic {
            section.push(compose.table(
                table_id(method),
                &["Recipient", "Date delivered", "Receipt acknowledged"],
                deliveries
                    .iter()
                    .map(|delivery| {
                        let mut cells = delivery_cells(delivery);
                        cells.push(if delivery.acknowledged { "Yes" } else { "No" }.to_string());
                        TableRow::new(cells)
                    })
                    .collect(),
            ));
            section.push(compose.checkboxes(
                "electronic_acknowledged",
                None,
                vec![(
                    "electronic_acknowledged",
                    "Each person who received the documents electronically has acknowledged \
                     receipt."
                        .to_string(),
                    all_electronic_acknowledged(model),
                )],
                2,
            ));
        } else {
            section.push(compose.table(
                table_id(method),
                &["Recipient", "Date delivered"],
                deliveries
                    .iter()
                    .map(|delivery| TableRow::new(delivery_cells(delivery)))
                    .collect(),
            ));
        }
    }

    section.push(compose.numbered(
        "2.",
        "The following persons received the documents on behalf of another person:",
    ));
    let represented: Vec<&Delivery> = model
        .deliveries
        .iter()
        .filter(|delivery| delivery.on_behalf_of.is_some())
        .collect();
    if represented.is_empty() {
        section.push(compose.paragraph(NONE, ParagraphOptions::default().indented(1)));
    }
    for (idx, delivery) in represented.into_iter().enumerate() {
        if let Some(capacity) = &delivery.on_behalf_of {
            section.push(compose.numbered_at(
                letter_marker(idx),
                format!(
                    "{} received delivery on behalf of {}, in the capacity of {}.",
                    or_blank(&capacity.person, 30),
                    or_blank(&delivery.recipient, 30),
                    or_blank(&capacity.capacity, 20)
                ),
                1,
            ));
        }
    }

    let will = model.will.clone().unwrap_or_default();
    let selection = will_copy().select(model);
    section.push(compose.numbered("3.", format!("With the notice, {pronoun} delivered:")));
    section.push(compose.choice(
        selection.group,
        None,
        &selection,
        vec![
            (
                "will_copy_attached",
                "a copy of the will and of any codicil.".to_string(),
            ),
            (
                "electronic_will_copy",
                "notice that the will is an electronic will, together with a copy of the will \
                 or an explanation of how a copy may be obtained."
                    .to_string(),
            ),
            (
                "no_will",
                "no will, as the deceased is not known to have left one.".to_string(),
            ),
        ],
    ));

    let selection = electronic_will_demand().select(model);
    section.push(compose.numbered("4.", "As to demands for a copy of the electronic will:"));
    section.push(compose.choice(
        selection.group,
        None,
        &selection,
        vec![
            (
                "demanded",
                format!(
                    "A copy of the electronic will was demanded and was provided to: {}",
                    if will.electronic_demand.provided_to.is_empty() {
                        blank_filler(30)
                    } else {
                        join_list(&will.electronic_demand.provided_to)
                    }
                ),
            ),
            (
                "not_demanded",
                "No person demanded a copy of an electronic will.".to_string(),
            ),
        ],
    ));

    section.push(compose.jurat(&deponents.place(), None, &deponents.names()));
    document.push(section);
    document
}

fn delivery_cells(delivery: &Delivery) -> Vec<String> {
    vec![
        or_blank(&delivery.recipient, 30),
        format_date(delivery.delivered_on, 20),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estate::{DeliveryCapacity, ElectronicWillDemand, GrantType};
    use crate::forms::fixtures::{
        assert_exclusive, assert_single_choice, date, model_grid, probate_model,
    };

    fn delivery(recipient: &str, method: DeliveryMethod, acknowledged: bool) -> Delivery {
        Delivery {
            recipient: recipient.to_string(),
            method,
            delivered_on: Some(date(2024, 3, 1)),
            on_behalf_of: None,
            acknowledged,
        }
    }

    #[test]
    fn deliveries_are_grouped_by_method() {
        let mut model = probate_model();
        model.deliveries = vec![
            delivery("A", DeliveryMethod::Postal, false),
            delivery("B", DeliveryMethod::Postal, false),
            delivery("C", DeliveryMethod::Electronic, true),
        ];

        let document = generate(&model, &StyleProfile::default());
        assert_eq!(
            document.table("postal_deliveries").expect("postal").column(0),
            vec!["A", "B"]
        );
        assert_eq!(
            document
                .table("electronic_deliveries")
                .expect("electronic")
                .column(0),
            vec!["C"]
        );
        assert!(document.table("personal_deliveries").is_none());
        assert!(document
            .checkbox_group("electronic_acknowledged")
            .expect("acknowledged")
            .is_checked("electronic_acknowledged"));
        assert!(document
            .checkbox_group("delivery_postal")
            .expect("postal")
            .is_checked("delivery_postal"));
        assert!(!document
            .checkbox_group("delivery_personal")
            .expect("personal")
            .is_checked("delivery_personal"));
    }

    #[test]
    fn acknowledgement_requires_every_electronic_delivery() {
        let mut model = probate_model();
        assert!(!all_electronic_acknowledged(&model));

        model.deliveries = vec![
            delivery("C", DeliveryMethod::Electronic, true),
            delivery("D", DeliveryMethod::Electronic, false),
        ];
        assert!(!all_electronic_acknowledged(&model));

        model.deliveries[1].acknowledged = true;
        assert!(all_electronic_acknowledged(&model));
    }

    #[test]
    fn capacity_statements_follow_represented_recipients() {
        let mut model = probate_model();
        let mut minor = delivery("Kid Doe", DeliveryMethod::Personal, false);
        minor.on_behalf_of = Some(DeliveryCapacity {
            person: "Pat Guardian".to_string(),
            capacity: "parent and guardian".to_string(),
        });
        model.deliveries = vec![minor, delivery("Adult", DeliveryMethod::Postal, false)];

        let text = generate(&model, &StyleProfile::default()).plain_text();
        assert!(text.contains(
            "(a) Pat Guardian received delivery on behalf of Kid Doe, in the capacity of parent \
             and guardian."
        ));
        assert!(!text.contains("(b)"));
    }

    #[test]
    fn demand_flag_gates_the_provided_to_wording() {
        let mut model = probate_model();
        if let Some(will) = model.will.as_mut() {
            will.electronic = true;
            will.electronic_demand = ElectronicWillDemand {
                demanded: false,
                provided_to: vec!["Sam Doe".to_string()],
            };
        }
        let document = generate(&model, &StyleProfile::default());
        assert!(document
            .checkbox_group("electronic_will_demand")
            .expect("demand")
            .is_checked("not_demanded"));
        assert!(document
            .checkbox_group("will_copy")
            .expect("will copy")
            .is_checked("electronic_will_copy"));

        model.grant_type = GrantType::AdministrationWithoutWill;
        let document = generate(&model, &StyleProfile::default());
        assert!(document
            .checkbox_group("will_copy")
            .expect("will copy")
            .is_checked("no_will"));
    }

    #[test]
    fn clause_groups_are_mutually_exclusive() {
        let style = StyleProfile::default();
        for model in model_grid() {
            assert_exclusive(&will_copy(), &model);
            assert_exclusive(&electronic_will_demand(), &model);
            assert_single_choice(
                &generate(&model, &style),
                &["will_copy", "electronic_will_demand"],
            );
        }
    }

    #[test]
    fn each_method_has_its_own_group_and_table() {
        let mut model = probate_model();
        model.deliveries = DeliveryMethod::ordered()
            .into_iter()
            .map(|method| delivery(&format!("{method:?} recipient"), method, false))
            .collect();

        let document = generate(&model, &StyleProfile::default());
        for method in DeliveryMethod::ordered() {
            assert!(document
                .checkbox_group(group_id(method))
                .expect("presence box")
                .is_checked(group_id(method)));
            let table = document.table(table_id(method)).expect("method table");
            assert_eq!(table.column(0), vec![format!("{method:?} recipient")]);
        }
    }
}
