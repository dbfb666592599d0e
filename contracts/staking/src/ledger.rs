use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

// ── Storage keys ────────────────────────────────────────────────────────────

const POSITION: Symbol = symbol_short!("POS");
const TOTAL_STAKED: Symbol = symbol_short!("TOT_STK");
const REWARD_INDEX: Symbol = symbol_short!("RWD_IDX");

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

// ── Types ───────────────────────────────────────────────────────────────────

/// Per-account staking record.
///
/// Absent records read as the zero position, so accounts never need to
/// register before their first stake. A record that drains back to zero is
/// kept and reused.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StakePosition {
    /// Tokens currently staked. Zero means no active position.
    pub principal: i128,
    /// Reward credited by settlement but not yet claimed.
    pub pending_reward: i128,
    /// Ledger timestamp of the last settlement.
    pub last_settlement: u64,
    /// Value of the global [`RewardIndex`] at the last settlement.
    pub reward_index_paid: i128,
    /// Ledger timestamp of the most recent stake; the lockup runs from here.
    pub lockup_start: u64,
}

impl StakePosition {
    pub fn is_empty(&self) -> bool {
        self.principal == 0 && self.pending_reward == 0
    }

    /// Earliest timestamp at which an ordinary unstake is allowed.
    pub fn unlock_time(&self, lockup_period: u64) -> u64 {
        self.lockup_start.saturating_add(lockup_period)
    }

    pub fn is_locked(&self, now: u64, lockup_period: u64) -> bool {
        now.saturating_sub(self.lockup_start) < lockup_period
    }
}

/// Cumulative reward per staked unit, scaled by [`crate::accrual::SCALE`].
///
/// Grows by `reward_rate × elapsed` and is checkpointed before every rate
/// change, so each window is priced at the rate that was live during it.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RewardIndex {
    pub value: i128,
    pub last_update: u64,
}

// ── Storage helpers ─────────────────────────────────────────────────────────

fn position_key(staker: &Address) -> (Symbol, Address) {
    (POSITION, staker.clone())
}

fn extend_ttl(env: &Env, key: &(Symbol, Address)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Load the position of `staker`, materialising the zero position if none exists.
pub fn load(env: &Env, staker: &Address) -> StakePosition {
    let key = position_key(staker);
    match env.storage().persistent().get(&key) {
        Some(position) => {
            extend_ttl(env, &key);
            position
        }
        None => StakePosition::default(),
    }
}

pub fn store(env: &Env, staker: &Address, position: &StakePosition) {
    let key = position_key(staker);
    env.storage().persistent().set(&key, position);
    extend_ttl(env, &key);
}

pub fn total_staked(env: &Env) -> i128 {
    env.storage().instance().get(&TOTAL_STAKED).unwrap_or(0)
}

fn set_total_staked(env: &Env, total: i128) {
    env.storage().instance().set(&TOTAL_STAKED, &total);
}

/// Add `amount` to the running total and return the new total.
pub fn increase_total(env: &Env, amount: i128) -> Option<i128> {
    let total = total_staked(env).checked_add(amount)?;
    set_total_staked(env, total);
    Some(total)
}

/// Remove `amount` from the running total and return the new total.
pub fn decrease_total(env: &Env, amount: i128) -> Option<i128> {
    let total = total_staked(env).checked_sub(amount)?;
    if total < 0 {
        return None;
    }
    set_total_staked(env, total);
    Some(total)
}

pub fn reward_index(env: &Env) -> RewardIndex {
    env.storage()
        .instance()
        .get(&REWARD_INDEX)
        .unwrap_or_default()
}

pub fn set_reward_index(env: &Env, index: &RewardIndex) {
    env.storage().instance().set(&REWARD_INDEX, index);
}
