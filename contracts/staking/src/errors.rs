/// Every failure the staking ledger can report.
///
/// Discriminants are part of the public interface: off-chain tooling matches
/// on the numeric code, so existing values must never be renumbered.
#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    InvalidAmount = 3,
    InsufficientStake = 4,
    LockupActive = 5,
    InsufficientRewardPool = 6,
    NothingStaked = 7,
    NotOperator = 8,
    NoPendingOperator = 9,
    ArithmeticOverflow = 10,
}

impl ContractError {
    /// Returns a human-readable reason for this error.
    pub fn message(&self) -> &'static str {
        match self {
            ContractError::NotInitialized => "Contract has not been initialized",
            ContractError::AlreadyInitialized => "Contract is already initialized",
            ContractError::InvalidAmount => "Amount must be greater than 0",
            ContractError::InsufficientStake => "Insufficient staked balance",
            ContractError::LockupActive => "Lockup period not passed",
            ContractError::InsufficientRewardPool => "Insufficient reward pool balance",
            ContractError::NothingStaked => "No tokens staked",
            ContractError::NotOperator => "Caller is not the operator",
            ContractError::NoPendingOperator => "No operator transfer is pending",
            ContractError::ArithmeticOverflow => "Arithmetic overflow in reward calculation",
        }
    }

    /// Maps a raw error code back to its variant.
    pub fn from_code(code: u32) -> Option<ContractError> {
        let error = match code {
            1 => ContractError::NotInitialized,
            2 => ContractError::AlreadyInitialized,
            3 => ContractError::InvalidAmount,
            4 => ContractError::InsufficientStake,
            5 => ContractError::LockupActive,
            6 => ContractError::InsufficientRewardPool,
            7 => ContractError::NothingStaked,
            8 => ContractError::NotOperator,
            9 => ContractError::NoPendingOperator,
            10 => ContractError::ArithmeticOverflow,
            _ => return None,
        };
        Some(error)
    }
}
