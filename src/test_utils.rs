use crate::{
    domain::TokenMetadata,
    interface::{
        FungibleTokenClient, PoolInfoView, RemoteResult, StakingAccountView,
        StakingContractClient, TokenAmount, WalletSession,
    },
    near::YOCTO,
};
use near_sdk::{json_types::U64, AccountId};
use std::{
    cell::{Cell, RefCell},
    collections::{HashMap, VecDeque},
};
use tokio::sync::oneshot;

pub const ACCOUNT_ID: &str = "alfio.near";

pub fn vbic() -> TokenMetadata {
    TokenMetadata::new("VBIC", 24)
}

pub fn tokens(amount: u128) -> u128 {
    amount * YOCTO
}

pub fn staking_account(
    stake_balance: u128,
    unstake_balance: u128,
    reward: u128,
    can_withdraw: bool,
) -> StakingAccountView {
    StakingAccountView {
        stake_balance: stake_balance.into(),
        unstake_balance: unstake_balance.into(),
        reward: reward.into(),
        start_unstake_timestamp: 0.into(),
        can_withdraw,
    }
}

pub fn pool_info(total_stake_balance: u128, total_stakers: u64, is_paused: bool) -> PoolInfoView {
    PoolInfoView {
        total_stake_balance: total_stake_balance.into(),
        total_reward: 0.into(),
        total_stakers: U64(total_stakers),
        is_paused,
    }
}

pub struct MockWallet {
    signed_in: Cell<bool>,
    account_id: RefCell<AccountId>,
    login_result: RefCell<RemoteResult<()>>,
    login_calls: Cell<usize>,
}

impl MockWallet {
    pub fn signed_in(account_id: &str) -> Self {
        Self {
            signed_in: Cell::new(true),
            account_id: RefCell::new(account_id.to_string()),
            login_result: RefCell::new(Ok(())),
            login_calls: Cell::new(0),
        }
    }

    /// login signs in as [ACCOUNT_ID]
    pub fn signed_out() -> Self {
        let wallet = Self::signed_in(ACCOUNT_ID);
        wallet.signed_in.set(false);
        wallet
    }

    pub fn decline_login(&self, reason: &str) {
        *self.login_result.borrow_mut() = Err(reason.to_string());
    }

    pub fn sign_out(&self) {
        self.signed_in.set(false);
    }

    pub fn switch_account(&self, account_id: &str) {
        *self.account_id.borrow_mut() = account_id.to_string();
        self.signed_in.set(true);
    }

    pub fn login_calls(&self) -> usize {
        self.login_calls.get()
    }
}

impl WalletSession for MockWallet {
    fn is_signed_in(&self) -> bool {
        self.signed_in.get()
    }

    fn account_id(&self) -> Option<AccountId> {
        if self.signed_in.get() {
            Some(self.account_id.borrow().clone())
        } else {
            None
        }
    }

    async fn login(&self) -> RemoteResult<()> {
        self.login_calls.set(self.login_calls.get() + 1);
        let result = self.login_result.borrow().clone();
        if result.is_ok() {
            self.signed_in.set(true);
        }
        result
    }
}

/// Fungible token and staking contract mock.
///
/// Responses are captured when a call starts. Calls can be held back with [MockContract::gate]
/// to control the order in which concurrent calls complete.
pub struct MockContract {
    ft_balance: RefCell<RemoteResult<TokenAmount>>,
    account_info: RefCell<RemoteResult<StakingAccountView>>,
    pool_info: RefCell<RemoteResult<PoolInfoView>>,
    action_result: RefCell<RemoteResult<()>>,
    calls: RefCell<Vec<String>>,
    /// (method, amount) for stake and unstake calls
    amounts: RefCell<Vec<(&'static str, u128)>>,
    gates: RefCell<HashMap<&'static str, VecDeque<oneshot::Receiver<()>>>>,
}

impl Default for MockContract {
    fn default() -> Self {
        Self {
            ft_balance: RefCell::new(Ok(TokenAmount::default())),
            account_info: RefCell::new(Ok(StakingAccountView::default())),
            pool_info: RefCell::new(Ok(PoolInfoView::default())),
            action_result: RefCell::new(Ok(())),
            calls: RefCell::new(vec![]),
            amounts: RefCell::new(vec![]),
            gates: RefCell::new(HashMap::new()),
        }
    }
}

impl MockContract {
    pub fn set_ft_balance(&self, amount: u128) {
        *self.ft_balance.borrow_mut() = Ok(amount.into());
    }

    pub fn set_account_info(&self, account_info: StakingAccountView) {
        *self.account_info.borrow_mut() = Ok(account_info);
    }

    pub fn set_pool_info(&self, pool_info: PoolInfoView) {
        *self.pool_info.borrow_mut() = Ok(pool_info);
    }

    pub fn fail_ft_balance(&self, err: &str) {
        *self.ft_balance.borrow_mut() = Err(err.to_string());
    }

    pub fn fail_pool_info(&self, err: &str) {
        *self.pool_info.borrow_mut() = Err(err.to_string());
    }

    pub fn fail_actions(&self, err: &str) {
        *self.action_result.borrow_mut() = Err(err.to_string());
    }

    pub fn succeed_actions(&self) {
        *self.action_result.borrow_mut() = Ok(());
    }

    /// The next call to the method blocks until the returned sender fires or is dropped.
    pub fn gate(&self, method: &'static str) -> oneshot::Sender<()> {
        let (sender, receiver) = oneshot::channel();
        self.gates
            .borrow_mut()
            .entry(method)
            .or_default()
            .push_back(receiver);
        sender
    }

    pub fn call_count(&self, method: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| call.as_str() == method)
            .count()
    }

    pub fn submitted_amounts(&self, method: &str) -> Vec<u128> {
        self.amounts
            .borrow()
            .iter()
            .filter(|(name, _)| *name == method)
            .map(|(_, amount)| *amount)
            .collect()
    }

    fn record(&self, method: &'static str) {
        self.calls.borrow_mut().push(method.to_string());
    }

    async fn pass_gate(&self, method: &'static str) {
        let gate = self
            .gates
            .borrow_mut()
            .get_mut(method)
            .and_then(|gates| gates.pop_front());
        if let Some(gate) = gate {
            let _ = gate.await;
        }
    }

    async fn call_action(&self, method: &'static str) -> RemoteResult<()> {
        self.record(method);
        let result = self.action_result.borrow().clone();
        self.pass_gate(method).await;
        result
    }
}

impl FungibleTokenClient for MockContract {
    async fn ft_balance_of(&self, _account_id: &str) -> RemoteResult<TokenAmount> {
        self.record("ft_balance_of");
        let result = self.ft_balance.borrow().clone();
        self.pass_gate("ft_balance_of").await;
        result
    }
}

impl StakingContractClient for MockContract {
    async fn get_account_info(&self, _account_id: &str) -> RemoteResult<StakingAccountView> {
        self.record("get_account_info");
        let result = self.account_info.borrow().clone();
        self.pass_gate("get_account_info").await;
        result
    }

    async fn get_pool_info(&self) -> RemoteResult<PoolInfoView> {
        self.record("get_pool_info");
        let result = self.pool_info.borrow().clone();
        self.pass_gate("get_pool_info").await;
        result
    }

    async fn stake(&self, amount: TokenAmount) -> RemoteResult<()> {
        self.amounts.borrow_mut().push(("stake", amount.value()));
        self.call_action("stake").await
    }

    async fn unstake(&self, amount: TokenAmount) -> RemoteResult<()> {
        self.amounts.borrow_mut().push(("unstake", amount.value()));
        self.call_action("unstake").await
    }

    async fn harvest(&self) -> RemoteResult<()> {
        self.call_action("harvest").await
    }

    async fn withdraw(&self) -> RemoteResult<()> {
        self.call_action("withdraw").await
    }
}
