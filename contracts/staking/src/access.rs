use soroban_sdk::{log, symbol_short, Address, Env, Symbol};

use crate::errors::ContractError;

// ── Storage keys ────────────────────────────────────────────────────────────

const OPERATOR: Symbol = symbol_short!("OPERATOR");
const PENDING_OPERATOR: Symbol = symbol_short!("PEND_OP");

// ── Single-operator model ───────────────────────────────────────────────────

pub fn set_operator(env: &Env, operator: &Address) {
    env.storage().instance().set(&OPERATOR, operator);
}

pub fn operator(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&OPERATOR)
        .ok_or(ContractError::NotInitialized)
}

pub fn pending_operator(env: &Env) -> Option<Address> {
    env.storage().instance().get(&PENDING_OPERATOR)
}

/// Guard: `caller` must authorise the invocation and be the stored operator.
pub fn require_operator(env: &Env, caller: &Address) -> Result<(), ContractError> {
    caller.require_auth();
    let operator = operator(env)?;
    if *caller != operator {
        log!(env, "rejected privileged call from {}", caller.clone());
        return Err(ContractError::NotOperator);
    }
    Ok(())
}

// ── Two-step rotation ───────────────────────────────────────────────────────

/// Record `new_operator` as the proposed successor. Replaces any earlier proposal.
pub fn propose(env: &Env, caller: &Address, new_operator: &Address) -> Result<(), ContractError> {
    require_operator(env, caller)?;
    env.storage().instance().set(&PENDING_OPERATOR, new_operator);
    Ok(())
}

/// Complete a rotation. Returns the outgoing operator.
pub fn accept(env: &Env, new_operator: &Address) -> Result<Address, ContractError> {
    new_operator.require_auth();

    let pending = pending_operator(env).ok_or(ContractError::NoPendingOperator)?;
    if *new_operator != pending {
        return Err(ContractError::NotOperator);
    }

    let old_operator = operator(env)?;
    set_operator(env, new_operator);
    env.storage().instance().remove(&PENDING_OPERATOR);
    Ok(old_operator)
}

/// Drop the pending proposal. Returns the address that was proposed.
pub fn cancel(env: &Env, caller: &Address) -> Result<Address, ContractError> {
    require_operator(env, caller)?;
    let pending = pending_operator(env).ok_or(ContractError::NoPendingOperator)?;
    env.storage().instance().remove(&PENDING_OPERATOR);
    Ok(pending)
}
