#![allow(deprecated)]

use soroban_sdk::{symbol_short, Address, Env};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the contract is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub operator: Address,
    pub staking_token: Address,
    pub reward_rate: i128,
    pub lockup_period: u64,
    pub timestamp: u64,
}

/// Fired when a user deposits stake.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakedEvent {
    pub staker: Address,
    pub amount: i128,
    pub new_principal: i128,
    pub new_total_staked: i128,
    pub timestamp: u64,
}

/// Fired when a user withdraws principal after the lockup.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnstakedEvent {
    pub staker: Address,
    pub amount: i128,
    pub remaining_principal: i128,
    pub new_total_staked: i128,
    pub timestamp: u64,
}

/// Fired when a user claims pending reward.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardClaimedEvent {
    pub staker: Address,
    pub amount: i128,
    pub pool_balance: i128,
    pub timestamp: u64,
}

/// Fired when a user bypasses the lockup and forfeits pending reward.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmergencyWithdrawnEvent {
    pub staker: Address,
    pub amount: i128,
    pub forfeited_reward: i128,
    pub timestamp: u64,
}

/// Fired when the operator tops up the reward pool.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardPoolFundedEvent {
    pub operator: Address,
    pub amount: i128,
    pub pool_balance: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardRateSetEvent {
    pub operator: Address,
    pub old_rate: i128,
    pub new_rate: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LockupPeriodSetEvent {
    pub operator: Address,
    pub old_period: u64,
    pub new_period: u64,
    pub timestamp: u64,
}

/// Fired when an operator transfer is proposed.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OperatorTransferProposedEvent {
    pub current_operator: Address,
    pub proposed_operator: Address,
    pub timestamp: u64,
}

/// Fired when an operator transfer is accepted.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OperatorTransferAcceptedEvent {
    pub old_operator: Address,
    pub new_operator: Address,
    pub timestamp: u64,
}

/// Fired when a pending operator transfer is cancelled.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OperatorTransferCancelledEvent {
    pub operator: Address,
    pub cancelled_proposed: Address,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(
    env: &Env,
    operator: Address,
    staking_token: Address,
    reward_rate: i128,
    lockup_period: u64,
) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            operator,
            staking_token,
            reward_rate,
            lockup_period,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_staked(
    env: &Env,
    staker: Address,
    amount: i128,
    new_principal: i128,
    new_total_staked: i128,
) {
    env.events().publish(
        (symbol_short!("STAKED"), staker.clone()),
        StakedEvent {
            staker,
            amount,
            new_principal,
            new_total_staked,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_unstaked(
    env: &Env,
    staker: Address,
    amount: i128,
    remaining_principal: i128,
    new_total_staked: i128,
) {
    env.events().publish(
        (symbol_short!("UNSTAKED"), staker.clone()),
        UnstakedEvent {
            staker,
            amount,
            remaining_principal,
            new_total_staked,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_reward_claimed(env: &Env, staker: Address, amount: i128, pool_balance: i128) {
    env.events().publish(
        (symbol_short!("CLAIMED"), staker.clone()),
        RewardClaimedEvent {
            staker,
            amount,
            pool_balance,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_emergency_withdrawn(
    env: &Env,
    staker: Address,
    amount: i128,
    forfeited_reward: i128,
) {
    env.events().publish(
        (symbol_short!("EMRG_WD"), staker.clone()),
        EmergencyWithdrawnEvent {
            staker,
            amount,
            forfeited_reward,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_reward_pool_funded(env: &Env, operator: Address, amount: i128, pool_balance: i128) {
    env.events().publish(
        (symbol_short!("FUNDED"), operator.clone()),
        RewardPoolFundedEvent {
            operator,
            amount,
            pool_balance,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_reward_rate_set(env: &Env, operator: Address, old_rate: i128, new_rate: i128) {
    env.events().publish(
        (symbol_short!("RATE_SET"), operator.clone()),
        RewardRateSetEvent {
            operator,
            old_rate,
            new_rate,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_lockup_period_set(env: &Env, operator: Address, old_period: u64, new_period: u64) {
    env.events().publish(
        (symbol_short!("LOCK_SET"), operator.clone()),
        LockupPeriodSetEvent {
            operator,
            old_period,
            new_period,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_operator_transfer_proposed(
    env: &Env,
    current_operator: Address,
    proposed_operator: Address,
) {
    env.events().publish(
        (symbol_short!("OP_PROP"), current_operator.clone()),
        OperatorTransferProposedEvent {
            current_operator,
            proposed_operator,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_operator_transfer_accepted(env: &Env, old_operator: Address, new_operator: Address) {
    env.events().publish(
        (symbol_short!("OP_ACPT"), new_operator.clone()),
        OperatorTransferAcceptedEvent {
            old_operator,
            new_operator,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_operator_transfer_cancelled(
    env: &Env,
    operator: Address,
    cancelled_proposed: Address,
) {
    env.events().publish(
        (symbol_short!("OP_CNCL"), operator.clone()),
        OperatorTransferCancelledEvent {
            operator,
            cancelled_proposed,
            timestamp: env.ledger().timestamp(),
        },
    );
}
