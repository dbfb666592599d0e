use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::errors::ContractError;

const CONFIG: Symbol = symbol_short!("CONFIG");

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

/// Global, operator-tunable parameters of the ledger.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakingConfig {
    /// Token contract that is both staked and paid out as reward.
    pub staking_token: Address,
    /// Reward per staked unit per second, scaled by [`crate::accrual::SCALE`].
    pub reward_rate: i128,
    /// Seconds a stake must rest before an ordinary unstake.
    pub lockup_period: u64,
}

/// Extends the TTL of instance storage, which holds every global key.
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&CONFIG)
}

pub fn load(env: &Env) -> Result<StakingConfig, ContractError> {
    env.storage()
        .instance()
        .get(&CONFIG)
        .ok_or(ContractError::NotInitialized)
}

pub fn store(env: &Env, config: &StakingConfig) {
    env.storage().instance().set(&CONFIG, config);
    extend_instance_ttl(env);
}

/// Overwrite the reward rate and return the previous one.
pub fn set_reward_rate(env: &Env, new_rate: i128) -> Result<i128, ContractError> {
    let mut config = load(env)?;
    let old_rate = config.reward_rate;
    config.reward_rate = new_rate;
    store(env, &config);
    Ok(old_rate)
}

/// Overwrite the lockup period and return the previous one.
pub fn set_lockup_period(env: &Env, new_period: u64) -> Result<u64, ContractError> {
    let mut config = load(env)?;
    let old_period = config.lockup_period;
    config.lockup_period = new_period;
    store(env, &config);
    Ok(old_period)
}
