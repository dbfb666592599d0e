use crate::errors::ContractError;
use crate::ledger::{RewardIndex, StakePosition};

/// Fixed-point scale of the reward rate.
///
/// A rate of `SCALE` pays one token unit per staked unit per second, so
/// `0.0001` tokens per token per second is stored as `10^14`.
pub const SCALE: i128 = 1_000_000_000_000_000_000;

// ── Core accrual engine ─────────────────────────────────────────────────────

/// Reward earned by `principal` over `elapsed` seconds at `reward_rate`.
///
/// ```text
/// reward = principal × reward_rate × elapsed / SCALE
/// ```
///
/// Truncates toward zero.
pub fn accrued(principal: i128, reward_rate: i128, elapsed: u64) -> Result<i128, ContractError> {
    earned(principal, index_growth(reward_rate, elapsed)?)
}

/// Reward earned by `principal` while the global index grew by `index_delta`.
pub fn earned(principal: i128, index_delta: i128) -> Result<i128, ContractError> {
    if principal <= 0 || index_delta <= 0 {
        return Ok(0);
    }
    mul_div_scale(principal, index_delta).ok_or(ContractError::ArithmeticOverflow)
}

fn index_growth(reward_rate: i128, elapsed: u64) -> Result<i128, ContractError> {
    if reward_rate <= 0 || elapsed == 0 {
        return Ok(0);
    }
    reward_rate
        .checked_mul(i128::from(elapsed))
        .ok_or(ContractError::ArithmeticOverflow)
}

/// Advance the global index to `now` at `reward_rate`.
///
/// Must run with the rate that was live since `index.last_update`; callers
/// advance before overwriting the rate. The index never moves backwards.
pub fn advance(
    index: &RewardIndex,
    now: u64,
    reward_rate: i128,
) -> Result<RewardIndex, ContractError> {
    let growth = index_growth(reward_rate, now.saturating_sub(index.last_update))?;
    Ok(RewardIndex {
        value: index
            .value
            .checked_add(growth)
            .ok_or(ContractError::ArithmeticOverflow)?,
        last_update: now.max(index.last_update),
    })
}

/// Settle `position` against an up-to-date global `index`.
///
/// Credits everything earned since the position's last snapshot to
/// `pending_reward` and moves the snapshot to `index`. Settling twice against
/// the same index is a no-op the second time.
pub fn settle(
    position: &StakePosition,
    index: &RewardIndex,
) -> Result<(StakePosition, i128), ContractError> {
    let delta = index
        .value
        .checked_sub(position.reward_index_paid)
        .ok_or(ContractError::ArithmeticOverflow)?;
    let amount = earned(position.principal, delta)?;

    let mut updated = position.clone();
    updated.pending_reward = position
        .pending_reward
        .checked_add(amount)
        .ok_or(ContractError::ArithmeticOverflow)?;
    updated.reward_index_paid = index.value.max(position.reward_index_paid);
    updated.last_settlement = index.last_update.max(position.last_settlement);

    Ok((updated, amount))
}

/// Reward claimable against `index` without persisting the settlement.
pub fn pending_at(position: &StakePosition, index: &RewardIndex) -> Result<i128, ContractError> {
    settle(position, index).map(|(settled, _)| settled.pending_reward)
}

/// Exact `floor(a × b / SCALE)` for non-negative operands.
///
/// Both factors are split into quotient and remainder against `SCALE` so the
/// only lossy step is the final remainder product, which always fits.
fn mul_div_scale(a: i128, b: i128) -> Option<i128> {
    let (a_hi, a_lo) = (a / SCALE, a % SCALE);
    let (b_hi, b_lo) = (b / SCALE, b % SCALE);

    let whole = a_hi.checked_mul(b_hi)?.checked_mul(SCALE)?;
    let cross = a_hi
        .checked_mul(b_lo)?
        .checked_add(a_lo.checked_mul(b_hi)?)?;
    let frac = a_lo.checked_mul(b_lo)? / SCALE;

    whole.checked_add(cross)?.checked_add(frac)
}

// ── Unit tests ──────────────────────────────────────────────────────────────
// Pure math, no Soroban environment needed.
