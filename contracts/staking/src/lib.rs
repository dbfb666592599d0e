#![no_std]

//! Single-token staking ledger.
//!
//! Holders stake a fungible token, accrue reward linearly in time while
//! staked, and withdraw principal once their lockup has elapsed. An
//! emergency path returns principal at any time but forfeits unclaimed
//! reward. A single operator funds the reward pool and tunes the reward rate
//! and lockup period.
//!
//! Every mutating entry point settles the caller's accrual first, commits the
//! ledger change, and only then calls the token contract. Accrual runs
//! against a global reward index that is checkpointed before each rate
//! change, so a window of time is always priced at the rate live during it,
//! whichever order accounts happen to transact in.

pub mod access;
pub mod accrual;
pub mod config;
pub mod errors;
pub mod events;
pub mod ledger;
pub mod pool;

use soroban_sdk::{contract, contractimpl, log, token, Address, Env, String};

pub use config::StakingConfig;
pub use errors::ContractError;
pub use ledger::{RewardIndex, StakePosition};

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct StakingContract;

#[contractimpl]
impl StakingContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the contract.
    ///
    /// * `operator`      – the single address allowed to fund and configure.
    /// * `staking_token` – token contract that is staked and paid as reward.
    /// * `reward_rate`   – reward per staked unit per second, scaled by [`accrual::SCALE`].
    /// * `lockup_period` – seconds a stake must rest before `unstake`.
    pub fn initialize(
        env: Env,
        operator: Address,
        staking_token: Address,
        reward_rate: i128,
        lockup_period: u64,
    ) -> Result<(), ContractError> {
        if config::is_initialized(&env) {
            return Err(ContractError::AlreadyInitialized);
        }
        if reward_rate < 0 {
            return Err(ContractError::InvalidAmount);
        }

        access::set_operator(&env, &operator);
        ledger::set_reward_index(
            &env,
            &RewardIndex {
                value: 0,
                last_update: env.ledger().timestamp(),
            },
        );
        config::store(
            &env,
            &StakingConfig {
                staking_token: staking_token.clone(),
                reward_rate,
                lockup_period,
            },
        );

        events::publish_initialized(&env, operator, staking_token, reward_rate, lockup_period);

        Ok(())
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Deposit `amount` tokens.
    ///
    /// Reward earned so far is settled at the old principal, then the
    /// lockup clock restarts for the whole position.
    pub fn stake(env: Env, staker: Address, amount: i128) -> Result<(), ContractError> {
        let config = config::load(&env)?;
        staker.require_auth();

        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }

        let index = Self::sync_index(&env, config.reward_rate)?;
        let position = ledger::load(&env, &staker);
        let (mut position, _) = accrual::settle(&position, &index)?;

        position.principal = position
            .principal
            .checked_add(amount)
            .ok_or(ContractError::ArithmeticOverflow)?;
        position.lockup_start = env.ledger().timestamp();
        ledger::store(&env, &staker, &position);
        let new_total =
            ledger::increase_total(&env, amount).ok_or(ContractError::ArithmeticOverflow)?;
        config::extend_instance_ttl(&env);

        token::Client::new(&env, &config.staking_token).transfer(
            &staker,
            &env.current_contract_address(),
            &amount,
        );

        events::publish_staked(&env, staker, amount, position.principal, new_total);

        Ok(())
    }

    /// Withdraw `amount` of principal once the lockup has elapsed.
    ///
    /// Reward keeps accruing up to this instant and stays claimable; it is
    /// not paid out here.
    pub fn unstake(env: Env, staker: Address, amount: i128) -> Result<(), ContractError> {
        let config = config::load(&env)?;
        staker.require_auth();

        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }

        let now = env.ledger().timestamp();
        let position = ledger::load(&env, &staker);
        if amount > position.principal {
            return Err(ContractError::InsufficientStake);
        }
        if position.is_locked(now, config.lockup_period) {
            return Err(ContractError::LockupActive);
        }

        let index = Self::sync_index(&env, config.reward_rate)?;
        let (mut position, _) = accrual::settle(&position, &index)?;
        position.principal -= amount;
        ledger::store(&env, &staker, &position);
        let new_total =
            ledger::decrease_total(&env, amount).ok_or(ContractError::InsufficientStake)?;
        config::extend_instance_ttl(&env);

        token::Client::new(&env, &config.staking_token).transfer(
            &env.current_contract_address(),
            &staker,
            &amount,
        );

        events::publish_unstaked(&env, staker, amount, position.principal, new_total);

        Ok(())
    }

    // ── Rewards ─────────────────────────────────────────────────────────────

    /// Pay out everything the staker has earned. Returns the amount paid.
    ///
    /// Fails with `InsufficientRewardPool` rather than paying a partial
    /// amount when the pool cannot cover the claim.
    pub fn claim_reward(env: Env, staker: Address) -> Result<i128, ContractError> {
        let config = config::load(&env)?;
        staker.require_auth();

        let index = Self::current_index(&env, config.reward_rate)?;
        let position = ledger::load(&env, &staker);
        let (mut position, _) = accrual::settle(&position, &index)?;

        let amount = position.pending_reward;
        if amount == 0 {
            return Ok(0);
        }

        let pool_balance = pool::debit(&env, amount)?;
        position.pending_reward = 0;
        ledger::set_reward_index(&env, &index);
        ledger::store(&env, &staker, &position);
        config::extend_instance_ttl(&env);

        token::Client::new(&env, &config.staking_token).transfer(
            &env.current_contract_address(),
            &staker,
            &amount,
        );

        events::publish_reward_claimed(&env, staker, amount, pool_balance);

        Ok(amount)
    }

    /// Return all principal immediately, ignoring the lockup.
    ///
    /// Accrual is not settled: pending and unsettled reward are forfeited
    /// and stay in the pool. Returns the principal paid back.
    pub fn emergency_withdraw(env: Env, staker: Address) -> Result<i128, ContractError> {
        let config = config::load(&env)?;
        staker.require_auth();

        let position = ledger::load(&env, &staker);
        let amount = position.principal;
        if amount <= 0 {
            return Err(ContractError::NothingStaked);
        }

        let now = env.ledger().timestamp();
        let forfeited = Self::current_index(&env, config.reward_rate)
            .and_then(|index| accrual::pending_at(&position, &index))
            .unwrap_or(position.pending_reward);

        let cleared = StakePosition {
            principal: 0,
            pending_reward: 0,
            last_settlement: now.max(position.last_settlement),
            ..position
        };
        ledger::store(&env, &staker, &cleared);
        ledger::decrease_total(&env, amount).ok_or(ContractError::InsufficientStake)?;
        config::extend_instance_ttl(&env);

        token::Client::new(&env, &config.staking_token).transfer(
            &env.current_contract_address(),
            &staker,
            &amount,
        );

        log!(&env, "emergency withdrawal forfeited {} reward", forfeited);
        events::publish_emergency_withdrawn(&env, staker, amount, forfeited);

        Ok(amount)
    }

    // ── Operator functions ──────────────────────────────────────────────────

    /// Move `amount` tokens from the operator into the reward pool.
    pub fn fund_reward_pool(
        env: Env,
        operator: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        let config = config::load(&env)?;
        access::require_operator(&env, &operator)?;

        let pool_balance = pool::credit(&env, amount)?;
        config::extend_instance_ttl(&env);

        token::Client::new(&env, &config.staking_token).transfer(
            &operator,
            &env.current_contract_address(),
            &amount,
        );

        events::publish_reward_pool_funded(&env, operator, amount, pool_balance);

        Ok(())
    }

    /// Overwrite the reward rate.
    ///
    /// The global index is first advanced at the old rate, so time that has
    /// already elapsed keeps its price for every account, settled or not.
    pub fn update_reward_rate(
        env: Env,
        caller: Address,
        new_rate: i128,
    ) -> Result<(), ContractError> {
        let config = config::load(&env)?;
        access::require_operator(&env, &caller)?;

        if new_rate < 0 {
            return Err(ContractError::InvalidAmount);
        }

        Self::sync_index(&env, config.reward_rate)?;
        let old_rate = config::set_reward_rate(&env, new_rate)?;

        events::publish_reward_rate_set(&env, caller, old_rate, new_rate);

        Ok(())
    }

    /// Overwrite the lockup period. Applies to every later `unstake`.
    pub fn update_lockup_period(
        env: Env,
        caller: Address,
        new_period: u64,
    ) -> Result<(), ContractError> {
        config::load(&env)?;
        access::require_operator(&env, &caller)?;

        let old_period = config::set_lockup_period(&env, new_period)?;

        events::publish_lockup_period_set(&env, caller, old_period, new_period);

        Ok(())
    }

    // ── Operator transfer (two-step) ───────────────────────────────────────

    /// Propose a new operator. The proposal completes when `new_operator`
    /// calls `accept_operator`.
    pub fn propose_operator(
        env: Env,
        current_operator: Address,
        new_operator: Address,
    ) -> Result<(), ContractError> {
        config::load(&env)?;
        access::propose(&env, &current_operator, &new_operator)?;

        events::publish_operator_transfer_proposed(&env, current_operator, new_operator);

        Ok(())
    }

    pub fn accept_operator(env: Env, new_operator: Address) -> Result<(), ContractError> {
        config::load(&env)?;
        let old_operator = access::accept(&env, &new_operator)?;

        events::publish_operator_transfer_accepted(&env, old_operator, new_operator);

        Ok(())
    }

    pub fn cancel_operator_transfer(
        env: Env,
        current_operator: Address,
    ) -> Result<(), ContractError> {
        config::load(&env)?;
        let cancelled = access::cancel(&env, &current_operator)?;

        events::publish_operator_transfer_cancelled(&env, current_operator, cancelled);

        Ok(())
    }

    // ── View functions ──────────────────────────────────────────────────────

    pub fn staked_amount(env: Env, staker: Address) -> i128 {
        ledger::load(&env, &staker).principal
    }

    /// Reward the staker could claim right now, computed without persisting.
    ///
    /// Saturates at `i128::MAX` when accrual overflows; a claim in that state
    /// fails with `ArithmeticOverflow` and only `emergency_withdraw` remains.
    pub fn available_reward(env: Env, staker: Address) -> i128 {
        let position = ledger::load(&env, &staker);
        let Ok(config) = config::load(&env) else {
            return position.pending_reward;
        };
        Self::current_index(&env, config.reward_rate)
            .and_then(|index| accrual::pending_at(&position, &index))
            .unwrap_or(i128::MAX)
    }

    /// Global reward index as of the current ledger time.
    pub fn reward_index(env: Env) -> Result<RewardIndex, ContractError> {
        let config = config::load(&env)?;
        Self::current_index(&env, config.reward_rate)
    }

    /// Return the stored position, as of its last settlement.
    pub fn get_position(env: Env, staker: Address) -> StakePosition {
        ledger::load(&env, &staker)
    }

    /// Earliest timestamp at which `staker` may `unstake`; 0 with nothing staked.
    pub fn unlock_time(env: Env, staker: Address) -> u64 {
        let position = ledger::load(&env, &staker);
        if position.principal == 0 {
            return 0;
        }
        position.unlock_time(Self::lockup_period(env))
    }

    pub fn get_total_staked(env: Env) -> i128 {
        ledger::total_staked(&env)
    }

    pub fn get_reward_pool_balance(env: Env) -> i128 {
        pool::balance(&env)
    }

    pub fn reward_rate(env: Env) -> i128 {
        config::load(&env).map(|c| c.reward_rate).unwrap_or(0)
    }

    pub fn lockup_period(env: Env) -> u64 {
        config::load(&env).map(|c| c.lockup_period).unwrap_or(0)
    }

    pub fn operator(env: Env) -> Result<Address, ContractError> {
        access::operator(&env)
    }

    pub fn pending_operator(env: Env) -> Option<Address> {
        access::pending_operator(&env)
    }

    pub fn staking_token(env: Env) -> Result<Address, ContractError> {
        config::load(&env).map(|c| c.staking_token)
    }

    pub fn is_initialized(env: Env) -> bool {
        config::is_initialized(&env)
    }

    /// Human-readable reason for an error code returned by this contract.
    pub fn error_message(env: Env, code: u32) -> String {
        let message = ContractError::from_code(code)
            .map(|e| e.message())
            .unwrap_or("Unknown error code");
        String::from_str(&env, message)
    }
}

// ── Internal helpers ─────────────────────────────────────────────────────────

impl StakingContract {
    /// Global index advanced to now at `reward_rate`, without persisting.
    fn current_index(env: &Env, reward_rate: i128) -> Result<RewardIndex, ContractError> {
        accrual::advance(
            &ledger::reward_index(env),
            env.ledger().timestamp(),
            reward_rate,
        )
    }

    /// Advance the global index to now at `reward_rate` and persist it.
    fn sync_index(env: &Env, reward_rate: i128) -> Result<RewardIndex, ContractError> {
        let index = Self::current_index(env, reward_rate)?;
        ledger::set_reward_index(env, &index);
        Ok(index)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────



#[cfg(test)]
mod test_events;
