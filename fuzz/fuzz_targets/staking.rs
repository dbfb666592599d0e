#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::StellarAssetClient,
    Address, Env,
};
use staking_ledger::{StakingContract, StakingContractClient};

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Stake { amount: u64 },
    Unstake { amount: u64 },
    ClaimReward,
    EmergencyWithdraw,
    Advance { seconds: u32 },
    Fund { amount: u32 },
    SetRate { rate: u64 },
    SetLockup { period: u32 },
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();

    let operator = Address::generate(&env);
    let token = env
        .register_stellar_asset_contract_v2(operator.clone())
        .address();
    let sac = StellarAssetClient::new(&env, &token);

    let contract_id = env.register(StakingContract, ());
    let client = StakingContractClient::new(&env, &contract_id);
    client.initialize(&operator, &token, &100_000_000_000_000i128, &3_600u64);

    sac.mint(&operator, &i128::from(u64::MAX));

    let mut users = vec![];
    for _ in 0..4 {
        let user = Address::generate(&env);
        sac.mint(&user, &i128::from(u64::MAX));
        users.push(user);
    }

    // Errors are expected; traps from arithmetic are not. After every step
    // the per-account principals must add up to the running total.
    for (i, action) in actions.into_iter().enumerate() {
        let caller = &users[i % users.len()];
        match action {
            FuzzAction::Stake { amount } => {
                let _ = client.try_stake(caller, &i128::from(amount));
            }
            FuzzAction::Unstake { amount } => {
                let _ = client.try_unstake(caller, &i128::from(amount));
            }
            FuzzAction::ClaimReward => {
                let _ = client.try_claim_reward(caller);
            }
            FuzzAction::EmergencyWithdraw => {
                let _ = client.try_emergency_withdraw(caller);
            }
            FuzzAction::Advance { seconds } => {
                let now = env.ledger().timestamp();
                env.ledger().set_timestamp(now.saturating_add(u64::from(seconds)));
            }
            FuzzAction::Fund { amount } => {
                let _ = client.try_fund_reward_pool(&operator, &i128::from(amount));
            }
            FuzzAction::SetRate { rate } => {
                let _ = client.try_update_reward_rate(&operator, &i128::from(rate));
            }
            FuzzAction::SetLockup { period } => {
                let _ = client.try_update_lockup_period(&operator, &u64::from(period));
            }
        }

        let total: i128 = users.iter().map(|u| client.staked_amount(u)).sum();
        assert_eq!(total, client.get_total_staked());
        assert!(client.get_reward_pool_balance() >= 0);
    }
});
