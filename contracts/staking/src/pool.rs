use soroban_sdk::{symbol_short, Env, Symbol};

use crate::errors::ContractError;

// Tokens reserved for reward payouts. The contract's token balance also
// holds staked principal, so the reserve is tracked separately.
const REWARD_POOL: Symbol = symbol_short!("RWD_POOL");

pub fn balance(env: &Env) -> i128 {
    env.storage().instance().get(&REWARD_POOL).unwrap_or(0)
}

/// Credit operator funding to the reserve and return the new balance.
pub fn credit(env: &Env, amount: i128) -> Result<i128, ContractError> {
    if amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }
    let new_balance = balance(env)
        .checked_add(amount)
        .ok_or(ContractError::ArithmeticOverflow)?;
    env.storage().instance().set(&REWARD_POOL, &new_balance);
    Ok(new_balance)
}

/// Debit a reward payout from the reserve and return the new balance.
///
/// Never pays out more than the reserve holds; partial payouts are not made.
pub fn debit(env: &Env, amount: i128) -> Result<i128, ContractError> {
    let current = balance(env);
    if amount > current {
        return Err(ContractError::InsufficientRewardPool);
    }
    let new_balance = current - amount;
    env.storage().instance().set(&REWARD_POOL, &new_balance);
    Ok(new_balance)
}
