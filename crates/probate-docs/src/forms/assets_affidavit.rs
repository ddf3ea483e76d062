//! Affidavit of assets and liabilities for domiciled estate grant (Form P10).
//!
//! This is the only generator that aggregates money. [`EstateTotals`] is
//! computed once from the asset schedule and every printed subtotal and the
//! summary read from it, so the tables and the summary cannot disagree.

use super::common::{
    all_applicants, court_caption, deceased_name, form_reference, ModelClauses, NONE,
};
use crate::document::{Block, DocumentContent, DocumentKind, Section, TableRow};
use crate::estate::{Asset, AssetSchedule, EstateModel, Money, SecuredAsset};
use crate::format::{
    blank_filler, format_currency, or_blank, Composer, ParagraphOptions, StyleProfile,
};
use serde::Serialize;

/// Subtotals, secured-debt totals and the gross and net values of an estate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EstateTotals {
    pub real: Money,
    pub real_secured: Money,
    pub tangible: Money,
    pub tangible_secured: Money,
    pub intangible: Money,
    pub outside_real: Money,
    pub outside_personal: Money,
    pub secured_total: Money,
    pub gross: Money,
    pub net: Money,
}

impl EstateTotals {
    pub fn compute(assets: &AssetSchedule) -> Self {
        let real = subtotal_secured(&assets.real_property);
        let tangible = subtotal_secured(&assets.tangible_property);
        let intangible = subtotal(&assets.intangible_property);
        let outside_real = subtotal(&assets.outside_real_property);
        let outside_personal = subtotal(&assets.outside_personal_property);
        let real_secured = secured(&assets.real_property);
        let tangible_secured = secured(&assets.tangible_property);

        let gross: Money = [real, tangible, intangible, outside_real, outside_personal]
            .into_iter()
            .sum();
        let secured_total = real_secured + tangible_secured;

        Self {
            real,
            real_secured,
            tangible,
            tangible_secured,
            intangible,
            outside_real,
            outside_personal,
            secured_total,
            gross,
            net: gross - secured_total,
        }
    }
}

fn subtotal_secured(items: &[SecuredAsset]) -> Money {
    items.iter().map(|item| item.value).sum()
}

fn subtotal(items: &[Asset]) -> Money {
    items.iter().map(|item| item.value).sum()
}

fn secured(items: &[SecuredAsset]) -> Money {
    items
        .iter()
        .filter_map(|item| item.secured_debt.as_ref())
        .map(|debt| debt.amount)
        .sum()
}

pub(crate) fn domicile() -> ModelClauses {
    ModelClauses::new("domicile", "not_domiciled")
        .clause("domiciled", |model| model.deceased.domiciled_in_jurisdiction)
}

pub(crate) fn outside_property() -> ModelClauses {
    ModelClauses::new("outside_property", "no_outside")
        .clause("has_outside", |model| model.assets.has_outside_property())
}

pub fn generate(model: &EstateModel, style: &StyleProfile) -> DocumentContent {
    let compose = Composer::new(style);
    let totals = EstateTotals::compute(&model.assets);
    let mut document = DocumentContent::new(
        DocumentKind::AssetsAffidavit,
        "AFFIDAVIT OF ASSETS AND LIABILITIES FOR DOMICILED ESTATE GRANT",
        style,
    );

    document.push(affidavit(&compose, model, &totals));
    document.push(exhibit_a(&compose, model, &totals));
    if model.assets.has_outside_property() {
        document.push(exhibit_b(&compose, model, &totals));
    }

    document
}

fn affidavit(compose: &Composer<'_>, model: &EstateModel, totals: &EstateTotals) -> Section {
    let deponents = all_applicants(model);
    let pronoun = deponents.pronoun();

    let mut section = Section::new("affidavit");
    section.push(form_reference(compose, "P10", "Rule 25-3 (2)"));
    section.extend(court_caption(compose, model));
    section.push(compose.title(
        "AFFIDAVIT OF ASSETS AND LIABILITIES FOR DOMICILED ESTATE GRANT",
    ));
    section.push(compose.paragraph(
        deponents.introduction(),
        ParagraphOptions::default().bold(),
    ));

    let selection = domicile().select(model);
    section.push(compose.numbered("1.", "As to the domicile of the deceased:"));
    section.push(compose.choice(
        selection.group,
        None,
        &selection,
        vec![
            (
                "domiciled",
                format!(
                    "{} was ordinarily resident in British Columbia at the date of death.",
                    deceased_name(model)
                ),
            ),
            (
                "not_domiciled",
                format!(
                    "{} was not ordinarily resident in British Columbia at the date of death, \
                     but was ordinarily resident in {}.",
                    deceased_name(model),
                    blank_filler(20)
                ),
            ),
        ],
    ));

    section.push(compose.numbered(
        "2.",
        format!(
            "Attached as Exhibit A is a statement of all property of the deceased, \
             irrespective of its nature, location or value, that passes to the applicant in \
             that capacity. The gross value of that property is {} and the net value, after \
             deducting secured debts of {}, is {}.",
            format_currency(totals.gross),
            format_currency(totals.secured_total),
            format_currency(totals.net)
        ),
    ));

    let selection = outside_property().select(model);
    section.push(compose.numbered("3.", "As to property outside British Columbia:"));
    section.push(compose.choice(
        selection.group,
        None,
        &selection,
        vec![
            (
                "has_outside",
                "The deceased had property outside British Columbia, described in Exhibit B."
                    .to_string(),
            ),
            (
                "no_outside",
                "The deceased had no property outside British Columbia.".to_string(),
            ),
        ],
    ));

    section.push(compose.numbered(
        "4.",
        format!(
            "{pronoun} will deliver to the registry an affidavit of any property or debt of \
             the deceased discovered after this affidavit is sworn."
        ),
    ));

    section.push(compose.jurat(&deponents.place(), None, &deponents.names()));
    section
}

fn secured_table(
    compose: &Composer<'_>,
    id: &str,
    items: &[SecuredAsset],
    total: Money,
    secured: Money,
) -> Block {
    let mut rows: Vec<TableRow> = items
        .iter()
        .map(|item| {
            let (creditor, amount) = match &item.secured_debt {
                Some(debt) => (
                    or_blank(&debt.creditor, 20),
                    format_currency(debt.amount),
                ),
                None => (String::new(), String::new()),
            };
            TableRow::new(vec![
                or_blank(&item.description, 30),
                format_currency(item.value),
                creditor,
                amount,
            ])
        })
        .collect();
    if rows.is_empty() {
        rows.push(TableRow::new(vec![
            NONE.to_string(),
            String::new(),
            String::new(),
            String::new(),
        ]));
    }
    rows.push(TableRow::emphasized(vec![
        "Subtotal".to_string(),
        format_currency(total),
        String::new(),
        format_currency(secured),
    ]));

    compose.table(
        id,
        &["Description", "Value at date of death", "Secured creditor", "Secured amount"],
        rows,
    )
}

fn value_table(compose: &Composer<'_>, id: &str, items: &[Asset], total: Money) -> Block {
    let mut rows: Vec<TableRow> = items
        .iter()
        .map(|item| {
            TableRow::new(vec![
                or_blank(&item.description, 30),
                format_currency(item.value),
            ])
        })
        .collect();
    if rows.is_empty() {
        rows.push(TableRow::new(vec![NONE.to_string(), String::new()]));
    }
    rows.push(TableRow::emphasized(vec![
        "Subtotal".to_string(),
        format_currency(total),
    ]));

    compose.table(id, &["Description", "Value at date of death"], rows)
}

fn exhibit_heading(compose: &Composer<'_>, model: &EstateModel, letter: &str) -> Vec<Block> {
    let names = all_applicants(model).names();
    let deponent = if names.is_empty() {
        blank_filler(30)
    } else {
        names.join(", ")
    };
    vec![
        compose.page_break(),
        compose.paragraph(
            format!(
                "This is Exhibit {letter} referred to in the affidavit of {deponent} sworn (or \
                 affirmed) before me on {}.",
                blank_filler(20)
            ),
            ParagraphOptions::default().centered(),
        ),
        compose.signature_block(
            "",
            "A commissioner for taking affidavits for British Columbia",
        ),
    ]
}

fn exhibit_a(compose: &Composer<'_>, model: &EstateModel, totals: &EstateTotals) -> Section {
    let assets = &model.assets;
    let mut section = Section::with_heading("exhibit_a", "EXHIBIT A: STATEMENT OF ASSETS");
    section.extend(exhibit_heading(compose, model, "A"));

    section.push(compose.heading("Part I: Real property in British Columbia"));
    section.push(secured_table(
        compose,
        "real_property",
        &assets.real_property,
        totals.real,
        totals.real_secured,
    ));
    section.push(compose.heading("Part II: Tangible personal property in British Columbia"));
    section.push(secured_table(
        compose,
        "tangible_property",
        &assets.tangible_property,
        totals.tangible,
        totals.tangible_secured,
    ));
    section.push(compose.heading("Part III: Intangible personal property"));
    section.push(value_table(
        compose,
        "intangible_property",
        &assets.intangible_property,
        totals.intangible,
    ));

    section.push(compose.heading("Summary"));
    let mut rows = vec![
        TableRow::new(vec![
            "Real property".to_string(),
            format_currency(totals.real),
        ]),
        TableRow::new(vec![
            "Tangible personal property".to_string(),
            format_currency(totals.tangible),
        ]),
        TableRow::new(vec![
            "Intangible personal property".to_string(),
            format_currency(totals.intangible),
        ]),
    ];
    if assets.has_outside_property() {
        rows.push(TableRow::new(vec![
            "Property outside British Columbia (Exhibit B)".to_string(),
            format_currency(totals.outside_real + totals.outside_personal),
        ]));
    }
    rows.extend([
        TableRow::emphasized(vec![
            "Gross value".to_string(),
            format_currency(totals.gross),
        ]),
        TableRow::new(vec![
            "Less secured debts".to_string(),
            format_currency(totals.secured_total),
        ]),
        TableRow::emphasized(vec![
            "Net value".to_string(),
            format_currency(totals.net),
        ]),
    ]);
    section.push(compose.table("estate_summary", &["", "Amount"], rows));
    section
}

fn exhibit_b(compose: &Composer<'_>, model: &EstateModel, totals: &EstateTotals) -> Section {
    let assets = &model.assets;
    let mut section = Section::with_heading(
        "exhibit_b",
        "EXHIBIT B: PROPERTY OUTSIDE BRITISH COLUMBIA",
    );
    section.extend(exhibit_heading(compose, model, "B"));

    section.push(compose.heading("Real property outside British Columbia"));
    section.push(value_table(
        compose,
        "outside_real_property",
        &assets.outside_real_property,
        totals.outside_real,
    ));
    section.push(compose.heading("Personal property outside British Columbia"));
    section.push(value_table(
        compose,
        "outside_personal_property",
        &assets.outside_personal_property,
        totals.outside_personal,
    ));
    section
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estate::{Relationship, SecuredDebt};
    use crate::forms::fixtures::{
        applicant, assert_exclusive, assert_single_choice, model_grid, probate_model,
    };

    fn house(value: i64, secured: Option<i64>) -> SecuredAsset {
        SecuredAsset {
            description: format!("House worth {value}"),
            value: Money::from_dollars(value),
            secured_debt: secured.map(|amount| SecuredDebt {
                creditor: "Bank".to_string(),
                amount: Money::from_dollars(amount),
            }),
        }
    }

    fn scenario_a() -> AssetSchedule {
        AssetSchedule {
            real_property: vec![house(500_000, Some(200_000)), house(300_000, None)],
            intangible_property: vec![Asset {
                description: "Savings account".to_string(),
                value: Money::from_dollars(50_000),
            }],
            ..AssetSchedule::default()
        }
    }

    #[test]
    fn scenario_a_totals() {
        let totals = EstateTotals::compute(&scenario_a());
        assert_eq!(totals.real, Money::from_dollars(800_000));
        assert_eq!(totals.real_secured, Money::from_dollars(200_000));
        assert_eq!(totals.tangible, Money::ZERO);
        assert_eq!(totals.intangible, Money::from_dollars(50_000));
        assert_eq!(totals.gross, Money::from_dollars(850_000));
        assert_eq!(totals.net, Money::from_dollars(650_000));
    }

    #[test]
    fn empty_schedule_totals_are_zero() {
        assert_eq!(
            EstateTotals::compute(&AssetSchedule::default()),
            EstateTotals::default()
        );
    }

    #[test]
    fn gross_is_sum_of_subtotals_including_outside_property() {
        let mut assets = scenario_a();
        assets.tangible_property = vec![SecuredAsset {
            description: "Car".to_string(),
            value: Money::from_cents(1_250_050),
            secured_debt: Some(SecuredDebt {
                creditor: "Lender".to_string(),
                amount: Money::from_cents(400_025),
            }),
        }];
        assets.outside_personal_property = vec![Asset {
            description: "Brokerage account in Ontario".to_string(),
            value: Money::from_cents(99),
        }];

        let totals = EstateTotals::compute(&assets);
        assert_eq!(
            totals.gross,
            totals.real
                + totals.tangible
                + totals.intangible
                + totals.outside_real
                + totals.outside_personal
        );
        assert_eq!(totals.secured_total, totals.real_secured + totals.tangible_secured);
        assert_eq!(totals.net, totals.gross - totals.secured_total);
        assert_eq!(totals.net.cents(), 65_000_000 + 1_250_050 + 99 - 400_025);
    }

    #[test]
    fn tables_print_subtotals_and_summary() {
        let mut model = probate_model();
        model.assets = scenario_a();

        let document = generate(&model, &StyleProfile::default());
        let real = document.table("real_property").expect("real property table");
        assert_eq!(real.body_rows().count(), 2);
        let subtotal = real.rows.last().expect("subtotal row");
        assert!(subtotal.emphasis);
        assert_eq!(subtotal.cells[1], "$800,000.00");
        assert_eq!(subtotal.cells[3], "$200,000.00");

        let tangible = document.table("tangible_property").expect("tangible table");
        assert_eq!(tangible.column(0), vec![NONE]);

        let summary = document.table("estate_summary").expect("summary");
        let text: Vec<String> = summary.rows.iter().map(|row| row.cells.join(" ")).collect();
        assert!(text.contains(&"Gross value $850,000.00".to_string()));
        assert!(text.contains(&"Net value $650,000.00".to_string()));
        assert!(document.section("exhibit_b").is_none());
        assert!(document
            .checkbox_group("outside_property")
            .expect("outside")
            .is_checked("no_outside"));
    }

    #[test]
    fn outside_property_appends_exhibit_b() {
        let mut model = probate_model();
        model.assets.outside_real_property = vec![Asset {
            description: "Cabin in Alberta".to_string(),
            value: Money::from_dollars(75_000),
        }];

        let document = generate(&model, &StyleProfile::default());
        assert!(document.section("exhibit_b").is_some());
        assert_eq!(
            document
                .table("outside_real_property")
                .expect("outside real")
                .column(0),
            vec!["Cabin in Alberta"]
        );
        assert!(document
            .checkbox_group("outside_property")
            .expect("outside")
            .is_checked("has_outside"));
    }

    #[test]
    fn clause_groups_are_mutually_exclusive() {
        let style = StyleProfile::default();
        for model in model_grid() {
            assert_exclusive(&domicile(), &model);
            assert_exclusive(&outside_property(), &model);
            assert_single_choice(&generate(&model, &style), &["domicile", "outside_property"]);
        }
    }

    #[test]
    fn every_applicant_swears_the_affidavit() {
        let mut model = probate_model();
        model.applicants.push(applicant("Bob", "Doe", Relationship::Child));
        model.filing.joint_affidavit = false;

        let document = generate(&model, &StyleProfile::default());
        let section = document.section("affidavit").expect("affidavit");
        let jurat = section
            .blocks
            .iter()
            .find_map(|block| match block {
                Block::Jurat(jurat) => Some(jurat),
                _ => None,
            })
            .expect("jurat");
        assert_eq!(jurat.deponents.len(), 2);
        assert!(jurat.deponents[0].ends_with("Jane Doe"));
        assert!(jurat.deponents[1].ends_with("Bob Doe"));

        let text = document.plain_text();
        assert!(text.contains("We, Jane Doe, of"));
        assert!(text.contains("Bob Doe, of"));
        assert!(text.contains("affidavit of Jane Doe, Bob Doe sworn"));
    }
}
