//! Canonical estate model shared by the mapping layer and every generator.

mod model;
mod money;

pub use model::{
    Address, Applicant, ApplicantKind, Asset, AssetSchedule, Codicil, Creditor, Deceased,
    Delivery, DeliveryCapacity, DeliveryMethod, ElectronicWillDemand, EstateModel,
    ExecutorDisposition, Family, FamilyMember, Filing, ForeignGrant, GrantType, IndigenousStatus,
    IntestateSuccessor, OtherExecutor, PersonName, Relationship, SecuredAsset, SecuredDebt,
    Spouse, SpouseStatus, Will,
};
pub use money::Money;
