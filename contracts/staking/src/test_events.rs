extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events as _, Ledger as _},
    token::StellarAssetClient,
    vec, Address, Env, IntoVal,
};

use crate::{
    accrual::SCALE,
    events::{
        EmergencyWithdrawnEvent, LockupPeriodSetEvent, RewardClaimedEvent, RewardPoolFundedEvent,
        RewardRateSetEvent, StakedEvent, UnstakedEvent,
    },
    StakingContract, StakingContractClient,
};

// ── Test helpers ─────────────────────────────────────────────────────────────

const TOKEN: i128 = 10_000_000;
const RATE: i128 = SCALE / 10_000;
const LOCKUP: u64 = 7 * 24 * 60 * 60;
const ONE_DAY: u64 = 24 * 60 * 60;
const START: u64 = 1_000;
const POOL: i128 = 10_000 * TOKEN;

/// Initialised contract with a funded pool and one staker holding 1_000 tokens.
fn setup() -> (Env, StakingContractClient<'static>, Address, Address, Address) {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(START);

    let operator = Address::generate(&env);
    let token = env.register_stellar_asset_contract_v2(operator.clone()).address();
    let sac = StellarAssetClient::new(&env, &token);

    let contract_id = env.register(StakingContract, ());
    let client = StakingContractClient::new(&env, &contract_id);
    client.initialize(&operator, &token, &RATE, &LOCKUP);

    sac.mint(&operator, &POOL);
    client.fund_reward_pool(&operator, &POOL);

    let staker = Address::generate(&env);
    sac.mint(&staker, &(1_000 * TOKEN));

    (env, client, operator, token, staker)
}

fn advance(env: &Env, seconds: u64) {
    let now = env.ledger().timestamp();
    env.ledger().set_timestamp(now + seconds);
}

// ── Staker events ────────────────────────────────────────────────────────────

#[test]
fn test_stake_emits_staked() {
    let (env, client, _operator, _token, staker) = setup();

    client.stake(&staker, &(100 * TOKEN));

    assert_eq!(
        env.events().all().filter_by_contract(&client.address),
        vec![
            &env,
            (
                client.address.clone(),
                (symbol_short!("STAKED"), staker.clone()).into_val(&env),
                StakedEvent {
                    staker: staker.clone(),
                    amount: 100 * TOKEN,
                    new_principal: 100 * TOKEN,
                    new_total_staked: 100 * TOKEN,
                    timestamp: START,
                }
                .into_val(&env),
            ),
        ]
    );
}

#[test]
fn test_unstake_emits_unstaked() {
    let (env, client, _operator, _token, staker) = setup();

    client.stake(&staker, &(100 * TOKEN));
    advance(&env, LOCKUP);
    client.unstake(&staker, &(40 * TOKEN));

    assert_eq!(
        env.events().all().filter_by_contract(&client.address),
        vec![
            &env,
            (
                client.address.clone(),
                (symbol_short!("UNSTAKED"), staker.clone()).into_val(&env),
                UnstakedEvent {
                    staker: staker.clone(),
                    amount: 40 * TOKEN,
                    remaining_principal: 60 * TOKEN,
                    new_total_staked: 60 * TOKEN,
                    timestamp: START + LOCKUP,
                }
                .into_val(&env),
            ),
        ]
    );
}

#[test]
fn test_claim_emits_claimed() {
    let (env, client, _operator, _token, staker) = setup();

    client.stake(&staker, &(100 * TOKEN));
    advance(&env, ONE_DAY);
    client.claim_reward(&staker);

    assert_eq!(
        env.events().all().filter_by_contract(&client.address),
        vec![
            &env,
            (
                client.address.clone(),
                (symbol_short!("CLAIMED"), staker.clone()).into_val(&env),
                RewardClaimedEvent {
                    staker: staker.clone(),
                    amount: 864 * TOKEN,
                    pool_balance: POOL - 864 * TOKEN,
                    timestamp: START + ONE_DAY,
                }
                .into_val(&env),
            ),
        ]
    );
}

#[test]
fn test_claim_with_nothing_pending_emits_nothing() {
    let (env, client, _operator, _token, staker) = setup();

    client.stake(&staker, &(100 * TOKEN));
    assert_eq!(client.claim_reward(&staker), 0);

    assert!(env
        .events()
        .all()
        .filter_by_contract(&client.address)
        .events()
        .is_empty());
}

#[test]
fn test_emergency_withdraw_reports_forfeited_reward() {
    let (env, client, _operator, _token, staker) = setup();

    client.stake(&staker, &(100 * TOKEN));
    advance(&env, ONE_DAY);
    client.emergency_withdraw(&staker);

    assert_eq!(
        env.events().all().filter_by_contract(&client.address),
        vec![
            &env,
            (
                client.address.clone(),
                (symbol_short!("EMRG_WD"), staker.clone()).into_val(&env),
                EmergencyWithdrawnEvent {
                    staker: staker.clone(),
                    amount: 100 * TOKEN,
                    forfeited_reward: 864 * TOKEN,
                    timestamp: START + ONE_DAY,
                }
                .into_val(&env),
            ),
        ]
    );
}

// ── Operator events ──────────────────────────────────────────────────────────

#[test]
fn test_fund_emits_funded() {
    let (env, client, operator, token, _staker) = setup();

    StellarAssetClient::new(&env, &token).mint(&operator, &(5_000 * TOKEN));
    client.fund_reward_pool(&operator, &(5_000 * TOKEN));

    assert_eq!(
        env.events().all().filter_by_contract(&client.address),
        vec![
            &env,
            (
                client.address.clone(),
                (symbol_short!("FUNDED"), operator.clone()).into_val(&env),
                RewardPoolFundedEvent {
                    operator: operator.clone(),
                    amount: 5_000 * TOKEN,
                    pool_balance: POOL + 5_000 * TOKEN,
                    timestamp: START,
                }
                .into_val(&env),
            ),
        ]
    );
}

#[test]
fn test_rate_update_emits_old_and_new_rate() {
    let (env, client, operator, _token, _staker) = setup();

    client.update_reward_rate(&operator, &(2 * RATE));

    assert_eq!(
        env.events().all().filter_by_contract(&client.address),
        vec![
            &env,
            (
                client.address.clone(),
                (symbol_short!("RATE_SET"), operator.clone()).into_val(&env),
                RewardRateSetEvent {
                    operator: operator.clone(),
                    old_rate: RATE,
                    new_rate: 2 * RATE,
                    timestamp: START,
                }
                .into_val(&env),
            ),
        ]
    );
}

#[test]
fn test_lockup_update_emits_old_and_new_period() {
    let (env, client, operator, _token, _staker) = setup();

    client.update_lockup_period(&operator, &(2 * LOCKUP));

    assert_eq!(
        env.events().all().filter_by_contract(&client.address),
        vec![
            &env,
            (
                client.address.clone(),
                (symbol_short!("LOCK_SET"), operator.clone()).into_val(&env),
                LockupPeriodSetEvent {
                    operator: operator.clone(),
                    old_period: LOCKUP,
                    new_period: 2 * LOCKUP,
                    timestamp: START,
                }
                .into_val(&env),
            ),
        ]
    );
}
