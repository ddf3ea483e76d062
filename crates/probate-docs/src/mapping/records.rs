//! Raw record shapes supplied by the case-management system. Every field is
//! optional on the wire so sparse intakes still deserialize.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressRecord {
    pub po_box: Option<String>,
    pub line1: Option<String>,
    pub line2: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliveryRecord {
    pub recipient: Option<String>,
    pub method: Option<String>,
    pub delivered_on: Option<String>,
    pub on_behalf_of: Option<String>,
    pub capacity: Option<String>,
    pub acknowledged: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreditorRecord {
    pub name: Option<String>,
    pub amount: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseRecord {
    pub id: Option<String>,
    pub deceased_full_name: Option<String>,
    pub deceased_first_name: Option<String>,
    pub deceased_middle_name: Option<String>,
    pub deceased_last_name: Option<String>,
    pub deceased_aliases: Vec<String>,
    pub date_of_death: Option<String>,
    pub place_of_death: Option<String>,
    pub last_address: Option<AddressRecord>,
    pub domiciled_in_bc: Option<bool>,
    pub nisgaa_citizen: Option<bool>,
    pub treaty_first_nation: Option<String>,
    pub grant_type: Option<String>,
    pub has_will: Option<bool>,
    pub registry: Option<String>,
    pub submission_date: Option<String>,
    pub certified_copies: Option<u32>,
    pub service_address: Option<AddressRecord>,
    pub service_email: Option<String>,
    pub service_phone: Option<String>,
    pub joint_affidavit: Option<bool>,
    pub supplemental_affidavit: Option<bool>,
    pub wills_search_certificate: Option<bool>,
    pub assets_affidavit_submitted: Option<bool>,
    pub delivery_waived: Option<bool>,
    pub deliveries: Vec<DeliveryRecord>,
    pub citors: Vec<String>,
    pub creditors: Vec<CreditorRecord>,
    pub foreign_grant_court: Option<String>,
    pub foreign_grant_jurisdiction: Option<String>,
    pub foreign_grant_date: Option<String>,
}

/// Wizard draft; `payload` is the loosely-typed bag of intake answers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeDraft {
    pub has_will: Option<bool>,
    pub will_date: Option<String>,
    pub will_signed_at: Option<String>,
    pub will_electronic: Option<bool>,
    pub will_original_available: Option<bool>,
    pub codicil_dates: Vec<String>,
    pub will_has_alterations: Option<bool>,
    pub will_has_obliterations: Option<bool>,
    pub will_referenced_documents: Vec<String>,
    pub will_translation_required: Option<bool>,
    pub electronic_will_demanded: Option<bool>,
    pub electronic_will_provided_to: Vec<String>,
    pub payload: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutorRecord {
    pub full_name: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub organization_name: Option<String>,
    pub is_organization: Option<bool>,
    pub status: Option<String>,
    pub named_in_will: Option<bool>,
    pub relationship: Option<String>,
    pub address: Option<AddressRecord>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeneficiaryRecord {
    pub full_name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub status: Option<String>,
    pub relationship: Option<String>,
}

/// One asset line from a supplemental schedule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleRecord {
    pub category: String,
    pub description: String,
    pub value: Option<Value>,
    pub secured_creditor: Option<String>,
    pub secured_amount: Option<Value>,
}
