use super::money::Money;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonName {
    pub first: String,
    pub middle: String,
    pub last: String,
}

impl PersonName {
    pub fn new(
        first: impl Into<String>,
        middle: impl Into<String>,
        last: impl Into<String>,
    ) -> Self {
        Self {
            first: first.into(),
            middle: middle.into(),
            last: last.into(),
        }
    }

    /// Space-joined display form; empty parts are skipped so the parts can be
    /// recombined without inventing separators.
    pub fn display(&self) -> String {
        [&self.first, &self.middle, &self.last]
            .iter()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn is_empty(&self) -> bool {
        self.display().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub po_box: String,
    pub street: String,
    pub city: String,
    pub region: String,
    pub country: String,
    pub postal_code: String,
}

impl Address {
    pub fn is_empty(&self) -> bool {
        [
            &self.po_box,
            &self.street,
            &self.city,
            &self.region,
            &self.country,
            &self.postal_code,
        ]
        .iter()
        .all(|part| part.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndigenousStatus {
    pub nisgaa_citizen: bool,
    pub treaty_first_nation_member: bool,
    pub treaty_first_nation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Deceased {
    pub name: PersonName,
    pub aliases: Vec<String>,
    pub date_of_death: Option<NaiveDate>,
    pub place_of_death: String,
    pub last_address: Address,
    pub domiciled_in_jurisdiction: bool,
    pub indigenous: IndigenousStatus,
}

/// The court authorization being sought.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantType {
    #[default]
    Probate,
    AdministrationWithWill,
    AdministrationWithoutWill,
    AncillaryProbate,
    AncillaryAdministrationWithWill,
    AncillaryAdministrationWithoutWill,
}

impl GrantType {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Probate,
            Self::AdministrationWithWill,
            Self::AdministrationWithoutWill,
            Self::AncillaryProbate,
            Self::AncillaryAdministrationWithWill,
            Self::AncillaryAdministrationWithoutWill,
        ]
    }

    pub const fn id(self) -> &'static str {
        match self {
            Self::Probate => "probate",
            Self::AdministrationWithWill => "administration_with_will",
            Self::AdministrationWithoutWill => "administration_without_will",
            Self::AncillaryProbate => "ancillary_probate",
            Self::AncillaryAdministrationWithWill => "ancillary_administration_with_will",
            Self::AncillaryAdministrationWithoutWill => "ancillary_administration_without_will",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Probate => "grant of probate",
            Self::AdministrationWithWill => "grant of administration with will annexed",
            Self::AdministrationWithoutWill => "grant of administration without will annexed",
            Self::AncillaryProbate => "ancillary grant of probate",
            Self::AncillaryAdministrationWithWill => {
                "ancillary grant of administration with will annexed"
            }
            Self::AncillaryAdministrationWithoutWill => {
                "ancillary grant of administration without will annexed"
            }
        }
    }

    pub const fn implies_will(self) -> bool {
        !matches!(
            self,
            Self::AdministrationWithoutWill | Self::AncillaryAdministrationWithoutWill
        )
    }

    pub const fn is_ancillary(self) -> bool {
        matches!(
            self,
            Self::AncillaryProbate
                | Self::AncillaryAdministrationWithWill
                | Self::AncillaryAdministrationWithoutWill
        )
    }

    /// Lenient parse of identifiers as they appear in case records.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw
            .trim()
            .to_ascii_lowercase()
            .replace(['-', ' '], "_");
        match normalized.as_str() {
            "probate" => Some(Self::Probate),
            "administration_with_will" | "administration_with_will_annexed" => {
                Some(Self::AdministrationWithWill)
            }
            "administration_without_will"
            | "administration_without_will_annexed"
            | "administration" => Some(Self::AdministrationWithoutWill),
            "ancillary_probate" => Some(Self::AncillaryProbate),
            "ancillary_administration_with_will" => Some(Self::AncillaryAdministrationWithWill),
            "ancillary_administration_without_will" | "ancillary_administration" => {
                Some(Self::AncillaryAdministrationWithoutWill)
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Codicil {
    pub signed_on: Option<NaiveDate>,
}

/// Whether a copy of an electronic will was demanded and who received one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElectronicWillDemand {
    pub demanded: bool,
    pub provided_to: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Will {
    pub exists: bool,
    pub signed_on: Option<NaiveDate>,
    pub signed_at: String,
    pub electronic: bool,
    pub original_available: bool,
    pub codicils: Vec<Codicil>,
    pub has_alterations: bool,
    pub has_obliterations: bool,
    pub referenced_documents: Vec<String>,
    pub translation_required: bool,
    pub electronic_demand: ElectronicWillDemand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicantKind {
    #[default]
    Individual,
    Organization,
}

/// Applicant relationship to the deceased, normalized for priority clauses.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relationship {
    Spouse,
    Child,
    Grandchild,
    Parent,
    Sibling,
    Other(String),
    #[default]
    Unspecified,
}

impl Relationship {
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "" => Self::Unspecified,
            "spouse" | "husband" | "wife" | "common-law partner" | "common law partner" => {
                Self::Spouse
            }
            "child" | "son" | "daughter" => Self::Child,
            "grandchild" | "grandson" | "granddaughter" => Self::Grandchild,
            "parent" | "mother" | "father" => Self::Parent,
            "sibling" | "brother" | "sister" => Self::Sibling,
            _ => Self::Other(raw.trim().to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Spouse => "spouse",
            Self::Child => "child",
            Self::Grandchild => "grandchild",
            Self::Parent => "parent",
            Self::Sibling => "sibling",
            Self::Other(value) => value.as_str(),
            Self::Unspecified => "",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Applicant {
    pub name: PersonName,
    pub organization_name: String,
    pub kind: ApplicantKind,
    pub address: Address,
    pub email: String,
    pub phone: String,
    pub named_in_will: bool,
    pub relationship: Relationship,
}

impl Applicant {
    pub fn display_name(&self) -> String {
        match self.kind {
            ApplicantKind::Organization if !self.organization_name.trim().is_empty() => {
                self.organization_name.trim().to_string()
            }
            _ => self.name.display(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutorDisposition {
    Renounced,
    Deceased,
    PowerReserved,
}

impl ExecutorDisposition {
    pub const fn reason(self) -> &'static str {
        match self {
            Self::Renounced => "has renounced executorship",
            Self::Deceased => "has died",
            Self::PowerReserved => "has had power reserved to apply at a later date",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherExecutor {
    pub name: String,
    pub disposition: ExecutorDisposition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpouseStatus {
    Surviving,
    Deceased,
    NeverMarried,
    #[default]
    Unspecified,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spouse {
    pub status: SpouseStatus,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FamilyMember {
    pub name: String,
    pub surviving: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntestateSuccessor {
    pub name: String,
    pub relationship: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Family {
    pub spouse: Spouse,
    pub children: Vec<FamilyMember>,
    pub other_beneficiaries: Vec<FamilyMember>,
    pub intestate_successors: Vec<IntestateSuccessor>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecuredDebt {
    pub creditor: String,
    pub amount: Money,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecuredAsset {
    pub description: String,
    pub value: Money,
    pub secured_debt: Option<SecuredDebt>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Asset {
    pub description: String,
    pub value: Money,
}

/// In-jurisdiction collections carry secured debts; outside collections are
/// value-only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetSchedule {
    pub real_property: Vec<SecuredAsset>,
    pub tangible_property: Vec<SecuredAsset>,
    pub intangible_property: Vec<Asset>,
    pub outside_real_property: Vec<Asset>,
    pub outside_personal_property: Vec<Asset>,
}

impl AssetSchedule {
    pub fn has_outside_property(&self) -> bool {
        !self.outside_real_property.is_empty() || !self.outside_personal_property.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMethod {
    Postal,
    Personal,
    Electronic,
}

impl DeliveryMethod {
    pub const fn ordered() -> [Self; 3] {
        [Self::Postal, Self::Personal, Self::Electronic]
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "postal" | "mail" | "ordinary_mail" | "registered_mail" => Some(Self::Postal),
            "personal" | "in_person" | "hand" => Some(Self::Personal),
            "electronic" | "email" | "e-mail" => Some(Self::Electronic),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliveryCapacity {
    pub person: String,
    pub capacity: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivery {
    pub recipient: String,
    pub method: DeliveryMethod,
    #[serde(default)]
    pub delivered_on: Option<NaiveDate>,
    #[serde(default)]
    pub on_behalf_of: Option<DeliveryCapacity>,
    #[serde(default)]
    pub acknowledged: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Filing {
    pub registry: String,
    pub submission_date: Option<NaiveDate>,
    pub certified_copies: u32,
    pub address_for_service: Option<Address>,
    pub service_email: String,
    pub service_phone: String,
    pub joint_affidavit: bool,
    pub supplemental_affidavit: bool,
    pub wills_search_certificate: bool,
    pub assets_affidavit_submitted: bool,
    pub delivery_waived: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Creditor {
    pub name: String,
    pub amount: Option<Money>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForeignGrant {
    pub court: String,
    pub jurisdiction: String,
    pub issued_on: Option<NaiveDate>,
}

/// Normalized description of an estate; the only input generators consume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstateModel {
    pub deceased: Deceased,
    pub grant_type: GrantType,
    pub will: Option<Will>,
    pub applicants: Vec<Applicant>,
    pub other_executors: Vec<OtherExecutor>,
    pub family: Family,
    pub assets: AssetSchedule,
    pub deliveries: Vec<Delivery>,
    pub filing: Filing,
    pub citors: Vec<String>,
    pub creditors: Vec<Creditor>,
    pub foreign_grant: Option<ForeignGrant>,
}

impl EstateModel {
    pub fn is_sole_applicant(&self) -> bool {
        self.applicants.len() <= 1
    }

    pub fn applicant_names(&self) -> Vec<String> {
        self.applicants
            .iter()
            .map(Applicant::display_name)
            .filter(|name| !name.is_empty())
            .collect()
    }

    /// True only when the grant is will-based and the will is recorded as existing.
    pub fn will_exists(&self) -> bool {
        self.grant_type.implies_will() && self.will.as_ref().is_some_and(|will| will.exists)
    }

    pub fn has_renunciations(&self) -> bool {
        self.other_executors
            .iter()
            .any(|executor| executor.disposition == ExecutorDisposition::Renounced)
    }

    pub fn deliveries_by(&self, method: DeliveryMethod) -> Vec<&Delivery> {
        self.deliveries
            .iter()
            .filter(|delivery| delivery.method == method)
            .collect()
    }
}
