//! Orchestrates snapshot refreshes and the submission of user actions.
//!
//! The controller is driven from a single thread: every method takes `&self` and state is kept in
//! cells, which allows refreshes and actions of different kinds to be in flight concurrently.
//! Nothing is spawned - callers poll the returned futures.

mod actions;
mod sequenced;

pub use sequenced::RefreshTicket;

use crate::{
    config::Config,
    core::amount,
    domain::{
        AccountSnapshot, ActionKind, ActionState, Cooldown, PoolSnapshot, PoolStatus,
        TokenAmount, TokenMetadata, UnstakeStatus,
    },
    errors::{session::LOGIN_DID_NOT_SIGN_IN, StakingError},
    guard::{self, DenyReason, GuardDecision},
    interface::{
        FungibleTokenClient, RemoteResult, StakingContractClient, TokenMetadataProvider,
        WalletSession,
    },
};
use actions::ActionSlots;
use log::{debug, error, info, warn};
use near_sdk::AccountId;
use sequenced::SequencedCell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Published,
    /// a refresh that was started later has already been published - the result was discarded
    Stale,
}

/// Account and pool refreshes are independent - one may fail while the other is published.
#[derive(Debug, Clone, PartialEq)]
pub struct RefreshReport {
    pub account: Result<RefreshOutcome, StakingError>,
    pub pool: Result<RefreshOutcome, StakingError>,
}

impl RefreshReport {
    pub fn is_ok(&self) -> bool {
        self.account.is_ok() && self.pool.is_ok()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    /// the contract call succeeded and the snapshots were refreshed
    Completed(RefreshReport),
    /// the same action kind is already in flight - nothing was submitted
    AlreadySubmitting,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ActionRequest {
    Stake(Option<TokenAmount>),
    Unstake(Option<TokenAmount>),
    Claim,
    Withdraw,
}

impl ActionRequest {
    fn kind(&self) -> ActionKind {
        match self {
            ActionRequest::Stake(_) => ActionKind::Stake,
            ActionRequest::Unstake(_) => ActionKind::Unstake,
            ActionRequest::Claim => ActionKind::Claim,
            ActionRequest::Withdraw => ActionKind::Withdraw,
        }
    }
}

/// authorized request
#[derive(Debug, Clone, Copy, PartialEq)]
enum ContractCall {
    Stake(TokenAmount),
    Unstake(TokenAmount),
    Harvest,
    Withdraw,
}

pub struct LifecycleController<W, F, S> {
    config: Config,
    token: TokenMetadata,
    cooldown: Cooldown,

    wallet: W,
    fungible_token: F,
    staking: S,

    account: SequencedCell<AccountSnapshot>,
    pool: SequencedCell<PoolSnapshot>,
    actions: ActionSlots,
}

impl<W, F, S> LifecycleController<W, F, S>
where
    W: WalletSession,
    F: FungibleTokenClient,
    S: StakingContractClient,
{
    /// Snapshots start out empty - call [LifecycleController::refresh] to load them.
    ///
    /// ## Errors
    /// [StakingError::UnknownToken] if there is no metadata for the configured token symbol
    pub fn new<M: TokenMetadataProvider>(
        config: Config,
        wallet: W,
        fungible_token: F,
        staking: S,
        token_metadata: &M,
    ) -> Result<Self, StakingError> {
        let token = token_metadata
            .token_metadata(config.token_symbol())
            .ok_or_else(|| StakingError::UnknownToken(config.token_symbol().to_string()))?;
        Ok(Self {
            cooldown: config.cooldown(),
            config,
            token,
            wallet,
            fungible_token,
            staking,
            account: SequencedCell::new(),
            pool: SequencedCell::new(),
            actions: ActionSlots::new(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn token(&self) -> &TokenMetadata {
        &self.token
    }

    pub fn wallet(&self) -> &W {
        &self.wallet
    }

    pub fn account_snapshot(&self) -> AccountSnapshot {
        self.account.get()
    }

    pub fn pool_snapshot(&self) -> PoolSnapshot {
        self.pool.get()
    }

    pub fn pool_status(&self) -> PoolStatus {
        self.pool.get().status()
    }

    pub fn action_state(&self, kind: ActionKind) -> ActionState {
        self.actions.state(kind)
    }

    /// returns None if there are no unstaked funds
    pub fn unstake_status(&self) -> Option<UnstakeStatus> {
        self.account.get().unstake_status(&self.cooldown)
    }

    pub fn to_display_amount(&self, amount: TokenAmount) -> f64 {
        amount::to_display_amount(amount, self.token.decimals)
    }

    /// the whole wallet balance
    pub fn max_stake_amount(&self) -> f64 {
        self.to_display_amount(self.account.get().token_balance)
    }

    /// the whole staked balance
    pub fn max_unstake_amount(&self) -> f64 {
        self.to_display_amount(self.account.get().stake_balance)
    }

    ////////////////////////////
    //      GUARDS          ///
    // //////////////////////

    pub fn stake_decision(&self, amount: Option<f64>) -> GuardDecision {
        match self.to_base_units(amount) {
            Ok(amount) => self.decide(ActionRequest::Stake(amount)),
            Err(_) => GuardDecision::Denied(DenyReason::InvalidAmount),
        }
    }

    pub fn unstake_decision(&self, amount: Option<f64>) -> GuardDecision {
        match self.to_base_units(amount) {
            Ok(amount) => self.decide(ActionRequest::Unstake(amount)),
            Err(_) => GuardDecision::Denied(DenyReason::InvalidAmount),
        }
    }

    pub fn claim_decision(&self) -> GuardDecision {
        self.decide(ActionRequest::Claim)
    }

    pub fn withdraw_decision(&self) -> GuardDecision {
        self.decide(ActionRequest::Withdraw)
    }

    fn decide(&self, request: ActionRequest) -> GuardDecision {
        match self.authorize(request) {
            Ok(_) => GuardDecision::Allowed,
            Err(reason) => GuardDecision::Denied(reason),
        }
    }

    fn authorize(&self, request: ActionRequest) -> Result<ContractCall, DenyReason> {
        let account = self.account.get();
        match request {
            ActionRequest::Stake(amount) => {
                guard::can_stake(amount, account.token_balance)
                    .and(self.pool_gate())
                    .into_result()?;
                amount.map(ContractCall::Stake).ok_or(DenyReason::AmountNotSet)
            }
            ActionRequest::Unstake(amount) => {
                guard::can_unstake(amount, account.stake_balance)
                    .and(self.pool_gate())
                    .into_result()?;
                amount.map(ContractCall::Unstake).ok_or(DenyReason::AmountNotSet)
            }
            ActionRequest::Claim => {
                guard::can_claim(account.pending_reward, self.token.decimals).into_result()?;
                Ok(ContractCall::Harvest)
            }
            ActionRequest::Withdraw => {
                guard::can_withdraw(&account).into_result()?;
                Ok(ContractCall::Withdraw)
            }
        }
    }

    fn pool_gate(&self) -> GuardDecision {
        if self.config.pause_blocks_staking() {
            guard::pool_accepts_staking(&self.pool.get())
        } else {
            GuardDecision::Allowed
        }
    }

    fn to_base_units(&self, amount: Option<f64>) -> Result<Option<TokenAmount>, StakingError> {
        amount
            .map(|amount| amount::to_base_units(amount, self.token.decimals))
            .transpose()
    }

    ////////////////////////////
    //      REFRESH         ///
    // //////////////////////

    /// Refreshes the account and pool snapshots.
    ///
    /// Safe to call at any time, e.g., on a fixed cadence, while other refreshes are still pending.
    pub async fn refresh(&self) -> RefreshReport {
        let account = self.refresh_account().await;
        let pool = self.refresh_pool().await;
        RefreshReport { account, pool }
    }

    /// If no account is signed in, then the empty snapshot is published without querying.
    ///
    /// On failure the previous snapshot is retained.
    pub async fn refresh_account(&self) -> Result<RefreshOutcome, StakingError> {
        let ticket = self.account.begin();
        let snapshot = match self.signed_in_account_id() {
            None => AccountSnapshot::default(),
            Some(account_id) => self.fetch_account(account_id).await.map_err(|err| {
                warn!("account refresh #{} failed: {}", ticket.value(), err);
                err
            })?,
        };
        Ok(publish(&self.account, ticket, snapshot, "account"))
    }

    async fn fetch_account(&self, account_id: AccountId) -> Result<AccountSnapshot, StakingError> {
        let token_balance = self
            .fungible_token
            .ft_balance_of(&account_id)
            .await
            .map_err(StakingError::RemoteFailure)?;
        let info = self
            .staking
            .get_account_info(&account_id)
            .await
            .map_err(StakingError::RemoteFailure)?;
        Ok(info.into_snapshot(account_id, token_balance))
    }

    /// The pool is global - no signed in account is required.
    pub async fn refresh_pool(&self) -> Result<RefreshOutcome, StakingError> {
        let ticket = self.pool.begin();
        let pool_info = self.staking.get_pool_info().await.map_err(|err| {
            warn!("pool refresh #{} failed: {}", ticket.value(), err);
            StakingError::RemoteFailure(err)
        })?;
        Ok(publish(&self.pool, ticket, pool_info.into(), "pool"))
    }

    /// Should be called when the wallet account changes.
    ///
    /// The previous account snapshot is discarded before the new account is loaded. Refreshes for
    /// the previous account that are still in flight are discarded.
    pub async fn on_account_changed(&self) -> RefreshReport {
        match self.signed_in_account_id() {
            None => {
                if !self.account.get().is_empty() {
                    self.on_signed_out();
                }
            }
            Some(account_id) => {
                if self.account.get().account_id.as_ref() != Some(&account_id) {
                    info!("account changed: {}", account_id);
                    self.account.reset();
                }
            }
        }
        self.refresh().await
    }

    /// Clears both snapshots and resets all actions to [ActionState::Idle].
    ///
    /// Calls that are still in flight complete, but can no longer change any state.
    pub fn on_signed_out(&self) {
        info!("signed out - clearing snapshots");
        self.account.reset();
        self.pool.reset();
        self.actions.reset();
    }

    fn signed_in_account_id(&self) -> Option<AccountId> {
        if !self.wallet.is_signed_in() {
            return None;
        }
        self.wallet.account_id().filter(|account_id| !account_id.is_empty())
    }

    ////////////////////////////
    //      ACTIONS         ///
    // //////////////////////

    /// Stakes the specified amount of whole tokens.
    ///
    /// ## Errors
    /// - [StakingError::InvalidAmount] if the amount cannot be converted into base units
    /// - [StakingError::GuardDenied] if staking is not currently permitted
    /// - [StakingError::RemoteFailure] if login or the contract call failed
    pub async fn stake(&self, amount: Option<f64>) -> Result<ActionOutcome, StakingError> {
        let amount = self.to_base_units(amount)?;
        self.submit(ActionRequest::Stake(amount)).await
    }

    /// see [LifecycleController::stake]
    pub async fn unstake(&self, amount: Option<f64>) -> Result<ActionOutcome, StakingError> {
        let amount = self.to_base_units(amount)?;
        self.submit(ActionRequest::Unstake(amount)).await
    }

    pub async fn claim(&self) -> Result<ActionOutcome, StakingError> {
        self.submit(ActionRequest::Claim).await
    }

    pub async fn withdraw(&self) -> Result<ActionOutcome, StakingError> {
        self.submit(ActionRequest::Withdraw).await
    }

    /// logical workflow:
    /// 1. claim the action kind - a repeated submit while in flight is a no-op
    /// 2. login if the wallet is not signed in, then load the signed in account
    /// 3. check the guards against the current snapshots
    /// 4. call the contract
    /// 5. on success, refresh the snapshots
    async fn submit(&self, request: ActionRequest) -> Result<ActionOutcome, StakingError> {
        let kind = request.kind();
        let flight = match self.actions.try_acquire(kind) {
            Some(flight) => flight,
            None => {
                debug!("{} is already in flight", kind);
                return Ok(ActionOutcome::AlreadySubmitting);
            }
        };

        self.ensure_signed_in().await?;
        let call = self.authorize(request).map_err(|reason| {
            debug!("{} denied: {}", kind, reason);
            StakingError::from(reason)
        })?;

        flight.set_state(ActionState::Submitting);
        info!("submitting {}: {:?}", kind, call);
        match self.call_contract(call).await {
            Ok(()) => {
                info!("{} succeeded", kind);
                flight.set_state(ActionState::Succeeded);
                Ok(ActionOutcome::Completed(self.refresh().await))
            }
            Err(err) => {
                error!("{} failed: {}", kind, err);
                flight.set_state(ActionState::Failed(err.clone()));
                Err(StakingError::RemoteFailure(err))
            }
        }
    }

    async fn ensure_signed_in(&self) -> Result<(), StakingError> {
        if self.wallet.is_signed_in() {
            return Ok(());
        }

        info!("wallet is not signed in - login is required");
        if let Err(err) = self.wallet.login().await {
            warn!("login failed: {}", err);
            return Err(StakingError::RemoteFailure(err));
        }
        if !self.wallet.is_signed_in() {
            warn!("{}", LOGIN_DID_NOT_SIGN_IN);
            return Err(StakingError::RemoteFailure(LOGIN_DID_NOT_SIGN_IN.to_string()));
        }

        // the guards need the balances of the account that just signed in
        self.refresh_account().await.map(|_| ())
    }

    async fn call_contract(&self, call: ContractCall) -> RemoteResult<()> {
        match call {
            ContractCall::Stake(amount) => self.staking.stake(amount.into()).await,
            ContractCall::Unstake(amount) => self.staking.unstake(amount.into()).await,
            ContractCall::Harvest => self.staking.harvest().await,
            ContractCall::Withdraw => self.staking.withdraw().await,
        }
    }
}

fn publish<T: Clone + Default>(
    cell: &SequencedCell<T>,
    ticket: RefreshTicket,
    value: T,
    name: &str,
) -> RefreshOutcome {
    match cell.publish(ticket, value) {
        Ok(()) => RefreshOutcome::Published,
        Err(_) => {
            debug!("discarded stale {} refresh #{}", name, ticket.value());
            RefreshOutcome::Stale
        }
    }
}
