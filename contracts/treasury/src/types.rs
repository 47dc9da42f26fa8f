use soroban_sdk::{contracttype, Address, Bytes, Vec};

/// Status of a withdrawal request. The discriminant doubles as the
/// transition rank: a status update is accepted only when the new
/// status ranks strictly above the current one.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RequestStatus {
    Pending = 0,
    Approved = 1,
    Rejected = 2,
}

impl RequestStatus {
    pub fn rank(&self) -> u32 {
        match self {
            RequestStatus::Pending => 0,
            RequestStatus::Approved => 1,
            RequestStatus::Rejected => 2,
        }
    }
}

/// Forward-only transition rule. Both Approved and Rejected are terminal
/// in practice because resolution also sets `is_processed`.
pub fn is_forward_transition(current: RequestStatus, next: RequestStatus) -> bool {
    next.rank() > current.rank()
}

/// Per-asset custody record.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetInfo {
    pub is_active: bool,
    /// Net custodied amount: credited on deposit, debited on resolution.
    pub total_custodied: i128,
    /// Per-line-item ceiling. 0 means unlimited.
    pub withdrawal_limit: i128,
}

/// A multi-asset withdrawal request. Kept forever as an audit record;
/// `assets` and `amounts` are parallel vectors of equal length.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawalRequest {
    pub requester: Address,
    pub assets: Vec<Address>,
    pub amounts: Vec<i128>,
    pub requested_at: u64,
    pub status: RequestStatus,
    pub is_processed: bool,
    /// Completion callback contract; None means no callback.
    pub target: Option<Address>,
    /// Opaque payload forwarded verbatim to the target on approval.
    pub payload: Bytes,
}

/// Named permission groups checked by every privileged entry point.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    Admin = 0,
    Manager = 1,
    WithdrawalOperator = 2,
    CustodianOperator = 3,
}

impl Role {
    /// The role whose members may grant or revoke this role.
    pub fn granting_authority(&self) -> Role {
        match self {
            Role::Admin => Role::Admin,
            Role::Manager => Role::Manager,
            Role::WithdrawalOperator => Role::Admin,
            Role::CustodianOperator => Role::Manager,
        }
    }
}
