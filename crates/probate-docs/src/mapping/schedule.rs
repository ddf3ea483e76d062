use super::coerce::money_from_value;
use super::records::ScheduleRecord;
use crate::estate::{Asset, AssetSchedule, Money, SecuredAsset, SecuredDebt};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetCategory {
    RealProperty,
    TangibleProperty,
    IntangibleProperty,
    OutsideRealProperty,
    OutsidePersonalProperty,
}

impl AssetCategory {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::RealProperty,
            Self::TangibleProperty,
            Self::IntangibleProperty,
            Self::OutsideRealProperty,
            Self::OutsidePersonalProperty,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::RealProperty => "real_property",
            Self::TangibleProperty => "tangible_property",
            Self::IntangibleProperty => "intangible_property",
            Self::OutsideRealProperty => "outside_real_property",
            Self::OutsidePersonalProperty => "outside_personal_property",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "real" | "real_property" => Some(Self::RealProperty),
            "tangible" | "tangible_property" | "tangible_personal_property"
            | "personal_property" => Some(Self::TangibleProperty),
            "intangible" | "intangible_property" | "intangible_personal_property" => {
                Some(Self::IntangibleProperty)
            }
            "outside_real" | "outside_real_property" => Some(Self::OutsideRealProperty),
            "outside_personal" | "outside_personal_property" => {
                Some(Self::OutsidePersonalProperty)
            }
            _ => None,
        }
    }

    const fn carries_secured_debt(self) -> bool {
        matches!(self, Self::RealProperty | Self::TangibleProperty)
    }
}

/// Places each schedule line into its collection. Lines with an unknown
/// category are dropped; missing values count as zero.
pub(crate) fn assets_from_schedule(records: &[ScheduleRecord]) -> AssetSchedule {
    let mut schedule = AssetSchedule::default();

    for record in records {
        let Some(category) = AssetCategory::parse(&record.category) else {
            warn!(category = %record.category, "skipping schedule line with unknown category");
            continue;
        };

        let description = record.description.trim().to_string();
        let value = record
            .value
            .as_ref()
            .and_then(money_from_value)
            .unwrap_or(Money::ZERO);

        if category.carries_secured_debt() {
            let secured_debt = secured_debt_for(record);
            let item = SecuredAsset {
                description,
                value,
                secured_debt,
            };
            match category {
                AssetCategory::RealProperty => schedule.real_property.push(item),
                _ => schedule.tangible_property.push(item),
            }
        } else {
            let item = Asset { description, value };
            match category {
                AssetCategory::IntangibleProperty => schedule.intangible_property.push(item),
                AssetCategory::OutsideRealProperty => schedule.outside_real_property.push(item),
                _ => schedule.outside_personal_property.push(item),
            }
        }
    }

    schedule
}

fn secured_debt_for(record: &ScheduleRecord) -> Option<SecuredDebt> {
    let creditor = record
        .secured_creditor
        .as_deref()
        .map(str::trim)
        .unwrap_or_default()
        .to_string();
    let amount = record.secured_amount.as_ref().and_then(money_from_value);

    match amount {
        Some(amount) if amount > Money::ZERO => Some(SecuredDebt { creditor, amount }),
        _ if !creditor.is_empty() => Some(SecuredDebt {
            creditor,
            amount: amount.unwrap_or(Money::ZERO),
        }),
        _ => None,
    }
}

/// A hand-entered asset line. Amounts are dollars, as in every other input.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OverrideLine {
    description: String,
    value: Option<Value>,
    secured_debt: Option<OverrideDebt>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OverrideDebt {
    creditor: String,
    amount: Option<Value>,
}

fn override_lines(value: &Value) -> Option<Vec<OverrideLine>> {
    serde_json::from_value(value.clone()).ok()
}

/// A blank amount is zero; a negative or malformed one rejects the line.
fn override_amount(value: Option<&Value>) -> Option<Money> {
    match value {
        None | Some(Value::Null) => Some(Money::ZERO),
        Some(value) => money_from_value(value),
    }
}

/// Converts an override list for a collection that carries secured debts.
/// Returns `None` when any amount is unusable so the whole list is ignored.
pub(crate) fn secured_assets_from_override(value: &Value) -> Option<Vec<SecuredAsset>> {
    override_lines(value)?
        .into_iter()
        .map(|line| {
            let secured_debt = match line.secured_debt {
                Some(debt) => Some(SecuredDebt {
                    creditor: debt.creditor.trim().to_string(),
                    amount: override_amount(debt.amount.as_ref())?,
                }),
                None => None,
            };
            Some(SecuredAsset {
                description: line.description.trim().to_string(),
                value: override_amount(line.value.as_ref())?,
                secured_debt,
            })
        })
        .collect()
}

/// Same as [`secured_assets_from_override`] for value-only collections.
pub(crate) fn assets_from_override(value: &Value) -> Option<Vec<Asset>> {
    override_lines(value)?
        .into_iter()
        .map(|line| {
            Some(Asset {
                description: line.description.trim().to_string(),
                value: override_amount(line.value.as_ref())?,
            })
        })
        .collect()
}

/// Pulls schedule lines out of the intake payload bag
/// (`{"assets": {"real_property": [...], ...}}`), tolerating any missing or
/// oddly typed field.
pub(crate) fn schedule_from_payload(payload: &Value) -> Vec<ScheduleRecord> {
    let Some(assets) = payload.get("assets") else {
        return Vec::new();
    };

    let mut records = Vec::new();
    for category in AssetCategory::ordered() {
        let items = assets
            .get(category.key())
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();

        for item in items {
            records.push(payload_item(category, item));
        }
    }
    records
}

fn payload_item(category: AssetCategory, item: &Value) -> ScheduleRecord {
    let text = |keys: &[&str]| -> Option<String> {
        keys.iter()
            .find_map(|key| item.get(*key).and_then(Value::as_str))
            .map(|value| value.trim().to_string())
    };
    let number = |keys: &[&str]| -> Option<Value> {
        keys.iter()
            .find_map(|key| item.get(*key))
            .filter(|value| !value.is_null())
            .cloned()
    };

    let nested = item.get("secured_debt");
    let nested_creditor = nested
        .and_then(|debt| debt.get("creditor"))
        .and_then(Value::as_str)
        .map(str::to_string);
    let nested_amount = nested.and_then(|debt| debt.get("amount")).cloned();

    ScheduleRecord {
        category: category.key().to_string(),
        description: text(&["description", "name", "label"]).unwrap_or_default(),
        value: number(&["value", "market_value", "amount"]),
        secured_creditor: nested_creditor
            .or_else(|| text(&["secured_creditor", "mortgage_holder"])),
        secured_amount: nested_amount.or_else(|| number(&["secured_amount", "mortgage_amount"])),
    }
}
