/*
[INPUT]:  Account address plus signed transaction or signed message
[OUTPUT]: Market credit balance, deposit and withdraw acknowledgements
[POS]:    HTTP layer - credit endpoints (authorized by signatures in the body)
[UPDATE]: When adding new credit endpoints or changing request bodies
*/

use crate::http::{Result, TemClient};
use crate::types::{
    BalanceDepositRequest, BalanceQuery, BalanceResponse, BalanceWithdrawRequest, SignedMs,
};
use reqwest::Method;

impl TemClient {
    /// Query the market credit of an account, in SUN
    ///
    /// GET /credit?address={account}
    pub async fn get_balance(&self, account: &str) -> Result<u64> {
        let query = BalanceQuery {
            address: account.to_string(),
        };
        let builder = self.request(Method::GET, "/credit")?.query(&query);
        let response: BalanceResponse = self.send_json(builder).await?;
        Ok(response.value)
    }

    /// Deposit credit with a signed TRX transfer to the market address
    ///
    /// POST /credit/deposit
    pub async fn deposit_balance(&self, account: &str, signed_tx: &str) -> Result<()> {
        let req = BalanceDepositRequest {
            address: account.to_string(),
            signed_tx: signed_tx.to_string(),
        };
        let builder = self.request(Method::POST, "/credit/deposit")?.json(&req);
        self.send_empty(builder).await
    }

    /// Withdraw credit; `None` or zero withdraws the whole balance
    ///
    /// POST /credit/withdraw
    pub async fn withdraw_balance(
        &self,
        account: &str,
        signed_ms: SignedMs,
        amount: Option<u64>,
    ) -> Result<()> {
        let req = BalanceWithdrawRequest {
            address: account.to_string(),
            signed_ms,
            amount: amount.filter(|value| *value > 0),
        };
        let builder = self.request(Method::POST, "/credit/withdraw")?.json(&req);
        self.send_empty(builder).await
    }
}
