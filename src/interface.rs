//! External collaborators the staking client depends on.
//!
//! Implementations own the transport, i.e., wallet connection, contract RPC, timeouts. All calls are
//! expected to run on the same thread - futures are not required to be `Send`.
#![allow(async_fn_in_trait)]

pub mod model;

pub use model::{BlockTimestamp, PoolInfoView, StakingAccountView, TokenAmount};

use crate::domain::TokenMetadata;
use near_sdk::AccountId;

/// Remote failures are reported as the message produced by the transport
pub type RemoteResult<T> = Result<T, String>;

pub trait WalletSession {
    fn is_signed_in(&self) -> bool;

    /// returns None if not signed in
    fn account_id(&self) -> Option<AccountId>;

    /// Runs the external login flow.
    ///
    /// Returns an error if the user declined or the login failed.
    async fn login(&self) -> RemoteResult<()>;
}

/// NEP-141 fungible token contract
pub trait FungibleTokenClient {
    /// returns the account token balance in base units
    async fn ft_balance_of(&self, account_id: &str) -> RemoteResult<TokenAmount>;
}

pub trait StakingContractClient {
    ////////////////////////////
    //      VIEW METHODS    ///
    // //////////////////////

    async fn get_account_info(&self, account_id: &str) -> RemoteResult<StakingAccountView>;

    async fn get_pool_info(&self) -> RemoteResult<PoolInfoView>;

    //////////////////////////////
    //      CHANGE METHODS    ///
    // ////////////////////////

    /// transfers the specified amount from the wallet and stakes it
    async fn stake(&self, amount: TokenAmount) -> RemoteResult<()>;

    /// starts the release period for the specified staked amount
    async fn unstake(&self, amount: TokenAmount) -> RemoteResult<()>;

    /// claims the pending reward
    async fn harvest(&self) -> RemoteResult<()>;

    /// withdraws all released unstaked funds back to the wallet
    async fn withdraw(&self) -> RemoteResult<()>;
}

pub trait TokenMetadataProvider {
    fn token_metadata(&self, symbol: &str) -> Option<TokenMetadata>;
}

impl<T: WalletSession> WalletSession for &T {
    fn is_signed_in(&self) -> bool {
        (**self).is_signed_in()
    }

    fn account_id(&self) -> Option<AccountId> {
        (**self).account_id()
    }

    async fn login(&self) -> RemoteResult<()> {
        (**self).login().await
    }
}

impl<T: FungibleTokenClient> FungibleTokenClient for &T {
    async fn ft_balance_of(&self, account_id: &str) -> RemoteResult<TokenAmount> {
        (**self).ft_balance_of(account_id).await
    }
}

impl<T: StakingContractClient> StakingContractClient for &T {
    async fn get_account_info(&self, account_id: &str) -> RemoteResult<StakingAccountView> {
        (**self).get_account_info(account_id).await
    }

    async fn get_pool_info(&self) -> RemoteResult<PoolInfoView> {
        (**self).get_pool_info().await
    }

    async fn stake(&self, amount: TokenAmount) -> RemoteResult<()> {
        (**self).stake(amount).await
    }

    async fn unstake(&self, amount: TokenAmount) -> RemoteResult<()> {
        (**self).unstake(amount).await
    }

    async fn harvest(&self) -> RemoteResult<()> {
        (**self).harvest().await
    }

    async fn withdraw(&self) -> RemoteResult<()> {
        (**self).withdraw().await
    }
}

/// a single known token
impl TokenMetadataProvider for TokenMetadata {
    fn token_metadata(&self, symbol: &str) -> Option<TokenMetadata> {
        if self.symbol == symbol {
            Some(self.clone())
        } else {
            None
        }
    }
}
