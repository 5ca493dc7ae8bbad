//! # Fee-Incurring Messages
//!
//! Every state-mutating Name Service message, as one closed enum. Each
//! variant carries an optional explicit `fee_payer`; when it is absent the
//! variant's signer pays.

use super::entities::{DomainType, Resource};
use serde::{Deserialize, Serialize};
use shared_types::Address;
use std::fmt;

/// Discriminant of a [`NameServiceMsg`], with stable snake_case names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MsgKind {
    RegisterDomain,
    RegisterAccount,
    RenewDomain,
    RenewAccount,
    TransferDomain,
    TransferAccount,
    DeleteDomain,
    DeleteAccount,
    ReplaceAccountResources,
    AddAccountCertificate,
    DeleteAccountCertificate,
    SetAccountMetadata,
}

impl MsgKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RegisterDomain => "register_domain",
            Self::RegisterAccount => "register_account",
            Self::RenewDomain => "renew_domain",
            Self::RenewAccount => "renew_account",
            Self::TransferDomain => "transfer_domain",
            Self::TransferAccount => "transfer_account",
            Self::DeleteDomain => "delete_domain",
            Self::DeleteAccount => "delete_account",
            Self::ReplaceAccountResources => "replace_account_resources",
            Self::AddAccountCertificate => "add_account_certificate",
            Self::DeleteAccountCertificate => "delete_account_certificate",
            Self::SetAccountMetadata => "set_account_metadata",
        }
    }
}

impl fmt::Display for MsgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fee-incurring Name Service message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NameServiceMsg {
    RegisterDomain {
        name: String,
        admin: Address,
        domain_type: DomainType,
        broker: Option<Address>,
        fee_payer: Option<Address>,
    },
    RegisterAccount {
        domain: String,
        name: String,
        owner: Address,
        registerer: Address,
        broker: Option<Address>,
        fee_payer: Option<Address>,
    },
    RenewDomain {
        domain: String,
        signer: Address,
        fee_payer: Option<Address>,
    },
    RenewAccount {
        domain: String,
        name: String,
        signer: Address,
        fee_payer: Option<Address>,
    },
    TransferDomain {
        domain: String,
        owner: Address,
        new_admin: Address,
        fee_payer: Option<Address>,
    },
    TransferAccount {
        domain: String,
        name: String,
        owner: Address,
        new_owner: Address,
        fee_payer: Option<Address>,
    },
    DeleteDomain {
        domain: String,
        owner: Address,
        fee_payer: Option<Address>,
    },
    DeleteAccount {
        domain: String,
        name: String,
        owner: Address,
        fee_payer: Option<Address>,
    },
    ReplaceAccountResources {
        domain: String,
        name: String,
        owner: Address,
        resources: Vec<Resource>,
        fee_payer: Option<Address>,
    },
    AddAccountCertificate {
        domain: String,
        name: String,
        owner: Address,
        certificate: Vec<u8>,
        fee_payer: Option<Address>,
    },
    DeleteAccountCertificate {
        domain: String,
        name: String,
        owner: Address,
        certificate: Vec<u8>,
        fee_payer: Option<Address>,
    },
    SetAccountMetadata {
        domain: String,
        name: String,
        owner: Address,
        metadata_uri: String,
        fee_payer: Option<Address>,
    },
}

impl NameServiceMsg {
    pub fn kind(&self) -> MsgKind {
        match self {
            Self::RegisterDomain { .. } => MsgKind::RegisterDomain,
            Self::RegisterAccount { .. } => MsgKind::RegisterAccount,
            Self::RenewDomain { .. } => MsgKind::RenewDomain,
            Self::RenewAccount { .. } => MsgKind::RenewAccount,
            Self::TransferDomain { .. } => MsgKind::TransferDomain,
            Self::TransferAccount { .. } => MsgKind::TransferAccount,
            Self::DeleteDomain { .. } => MsgKind::DeleteDomain,
            Self::DeleteAccount { .. } => MsgKind::DeleteAccount,
            Self::ReplaceAccountResources { .. } => MsgKind::ReplaceAccountResources,
            Self::AddAccountCertificate { .. } => MsgKind::AddAccountCertificate,
            Self::DeleteAccountCertificate { .. } => MsgKind::DeleteAccountCertificate,
            Self::SetAccountMetadata { .. } => MsgKind::SetAccountMetadata,
        }
    }

    /// Name of the domain the message targets.
    pub fn domain_name(&self) -> &str {
        match self {
            Self::RegisterDomain { name, .. } => name,
            Self::RegisterAccount { domain, .. }
            | Self::RenewDomain { domain, .. }
            | Self::RenewAccount { domain, .. }
            | Self::TransferDomain { domain, .. }
            | Self::TransferAccount { domain, .. }
            | Self::DeleteDomain { domain, .. }
            | Self::DeleteAccount { domain, .. }
            | Self::ReplaceAccountResources { domain, .. }
            | Self::AddAccountCertificate { domain, .. }
            | Self::DeleteAccountCertificate { domain, .. }
            | Self::SetAccountMetadata { domain, .. } => domain,
        }
    }

    /// The account charged for this message.
    pub fn fee_payer(&self) -> Address {
        match self {
            Self::RegisterDomain {
                admin, fee_payer, ..
            } => fee_payer.unwrap_or(*admin),
            Self::RegisterAccount {
                registerer,
                fee_payer,
                ..
            } => fee_payer.unwrap_or(*registerer),
            Self::RenewDomain {
                signer, fee_payer, ..
            }
            | Self::RenewAccount {
                signer, fee_payer, ..
            } => fee_payer.unwrap_or(*signer),
            Self::TransferDomain {
                owner, fee_payer, ..
            }
            | Self::TransferAccount {
                owner, fee_payer, ..
            }
            | Self::DeleteDomain {
                owner, fee_payer, ..
            }
            | Self::DeleteAccount {
                owner, fee_payer, ..
            }
            | Self::ReplaceAccountResources {
                owner, fee_payer, ..
            }
            | Self::AddAccountCertificate {
                owner, fee_payer, ..
            }
            | Self::DeleteAccountCertificate {
                owner, fee_payer, ..
            }
            | Self::SetAccountMetadata {
                owner, fee_payer, ..
            } => fee_payer.unwrap_or(*owner),
        }
    }
}
