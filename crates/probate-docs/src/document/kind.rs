use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of documents the compiler can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentKind {
    #[serde(rename = "p1-notice")]
    Notice,
    #[serde(rename = "p2-submission")]
    Submission,
    #[serde(rename = "p3-affidavit")]
    ShortFormAffidavit,
    #[serde(rename = "p5-affidavit")]
    AdministrationAffidavit,
    #[serde(rename = "p9-delivery-affidavit")]
    DeliveryAffidavit,
    #[serde(rename = "p10-assets-affidavit")]
    AssetsAffidavit,
    RegistryCoverLetter,
    FilingChecklistLetter,
}

impl DocumentKind {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::Notice,
            Self::Submission,
            Self::ShortFormAffidavit,
            Self::AdministrationAffidavit,
            Self::DeliveryAffidavit,
            Self::AssetsAffidavit,
            Self::RegistryCoverLetter,
            Self::FilingChecklistLetter,
        ]
    }

    pub const fn id(self) -> &'static str {
        match self {
            Self::Notice => "p1-notice",
            Self::Submission => "p2-submission",
            Self::ShortFormAffidavit => "p3-affidavit",
            Self::AdministrationAffidavit => "p5-affidavit",
            Self::DeliveryAffidavit => "p9-delivery-affidavit",
            Self::AssetsAffidavit => "p10-assets-affidavit",
            Self::RegistryCoverLetter => "registry-cover-letter",
            Self::FilingChecklistLetter => "filing-checklist-letter",
        }
    }

    pub const fn form_number(self) -> Option<&'static str> {
        match self {
            Self::Notice => Some("P1"),
            Self::Submission => Some("P2"),
            Self::ShortFormAffidavit => Some("P3"),
            Self::AdministrationAffidavit => Some("P5"),
            Self::DeliveryAffidavit => Some("P9"),
            Self::AssetsAffidavit => Some("P10"),
            Self::RegistryCoverLetter | Self::FilingChecklistLetter => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Notice => "Notice of Proposed Application",
            Self::Submission => "Submission for Estate Grant",
            Self::ShortFormAffidavit => "Affidavit of Applicant for Grant of Probate or Grant of Administration with Will Annexed (Short Form)",
            Self::AdministrationAffidavit => "Affidavit of Applicant for Grant of Administration without Will Annexed",
            Self::DeliveryAffidavit => "Affidavit of Delivery",
            Self::AssetsAffidavit => "Affidavit of Assets and Liabilities for Domiciled Estate Grant",
            Self::RegistryCoverLetter => "Cover Letter to the Probate Registry",
            Self::FilingChecklistLetter => "Filing Checklist Letter",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    #[error("unknown document kind '{0}'")]
    UnknownDocumentKind(String),
}

impl FromStr for DocumentKind {
    type Err = DispatchError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase().replace('_', "-");
        let kind = match normalized.as_str() {
            "p1" | "p1-notice" => Self::Notice,
            "p2" | "p2-submission" => Self::Submission,
            "p3" | "p3-affidavit" => Self::ShortFormAffidavit,
            "p5" | "p5-affidavit" => Self::AdministrationAffidavit,
            "p9" | "p9-delivery-affidavit" => Self::DeliveryAffidavit,
            "p10" | "p10-assets-affidavit" => Self::AssetsAffidavit,
            "registry-cover-letter" => Self::RegistryCoverLetter,
            "filing-checklist-letter" => Self::FilingChecklistLetter,
            _ => return Err(DispatchError::UnknownDocumentKind(raw.to_string())),
        };
        Ok(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_from_str() {
        for kind in DocumentKind::ordered() {
            assert_eq!(kind.id().parse::<DocumentKind>(), Ok(kind));
        }
        assert_eq!("P10".parse::<DocumentKind>(), Ok(DocumentKind::AssetsAffidavit));
    }

    #[test]
    fn unknown_kind_fails_fast() {
        let err = "p4-long-form".parse::<DocumentKind>().expect_err("unknown kind");
        assert_eq!(err, DispatchError::UnknownDocumentKind("p4-long-form".to_string()));
        assert_eq!(err.to_string(), "unknown document kind 'p4-long-form'");
    }

    #[test]
    fn serde_uses_stable_ids() {
        let json = serde_json::to_string(&DocumentKind::DeliveryAffidavit).expect("serialize");
        assert_eq!(json, "\"p9-delivery-affidavit\"");
        let json = serde_json::to_string(&DocumentKind::RegistryCoverLetter).expect("serialize");
        assert_eq!(json, "\"registry-cover-letter\"");
    }
}
