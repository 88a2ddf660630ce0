/*
[INPUT]:  Order drafts, order ids and signed authorizations
[OUTPUT]: Order pages, single orders and new order ids
[POS]:    HTTP layer - order endpoints (auth carried in the request body)
[UPDATE]: When adding new order endpoints or changing order flow
*/

use std::collections::HashSet;

use crate::http::{Result, TemClient};
use crate::types::{
    CancelOrderRequest, CreateOrderRequest, CreateOrderResponse, FillOrderRequest, NewOrder,
    Order, OrderQuery, OrderStatus, PaginatedOrders, QueryOrdersRequest, SignedMs,
};
use reqwest::Method;
use tracing::debug;

/// Page size used by [`TemClient::get_all_orders`]
pub const ORDER_PAGE_SIZE: u64 = 1000;

impl TemClient {
    /// Query one page of orders with optional filters
    ///
    /// GET /order/list?skip={skip}&limit={take}&status={status}&address={account}
    pub async fn get_orders(
        &self,
        skip: u64,
        take: u64,
        status: Option<OrderStatus>,
        account: Option<&str>,
    ) -> Result<PaginatedOrders> {
        let query = QueryOrdersRequest {
            skip,
            limit: take,
            status,
            address: account.map(str::to_string),
        };
        let builder = self.request(Method::GET, "/order/list")?.query(&query);
        self.send_json(builder).await
    }

    /// Fetch every order matching the filters, page by page
    ///
    /// Pages are requested one after another until a short page comes back.
    /// Orders are deduplicated by id; the result order is unspecified.
    pub async fn get_all_orders(
        &self,
        status: Option<OrderStatus>,
        account: Option<&str>,
    ) -> Result<Vec<Order>> {
        let mut orders = HashSet::new();
        let mut skip = 0;

        loop {
            let page = self
                .get_orders(skip, ORDER_PAGE_SIZE, status, account)
                .await?;
            let fetched = page.orders.len() as u64;
            orders.extend(page.orders);
            debug!(skip, fetched, collected = orders.len(), "order page fetched");

            if fetched < ORDER_PAGE_SIZE {
                break;
            }
            skip += ORDER_PAGE_SIZE;
        }

        Ok(orders.into_iter().collect())
    }

    /// Query a single order
    ///
    /// GET /order/info?id={id}
    pub async fn get_order(&self, id: u64) -> Result<Order> {
        let builder = self
            .request(Method::GET, "/order/info")?
            .query(&OrderQuery { id });
        self.send_json(builder).await
    }

    /// Place a new order and return its id
    ///
    /// POST /order/new
    ///
    /// The payment is derived from price, amount and duration. Target and
    /// authorization are validated before anything is sent.
    pub async fn create_order(&self, order: NewOrder) -> Result<u64> {
        let req = CreateOrderRequest::try_from(order)?;
        debug!(
            payment = req.payment(),
            bulk = req.bulk(),
            "creating order"
        );
        let builder = self.request(Method::POST, "/order/new")?.json(&req);
        let response: CreateOrderResponse = self.send_json(builder).await?;
        Ok(response.order_id)
    }

    /// Fill an order with a signed delegation transaction
    ///
    /// POST /order/fill
    pub async fn fill_order(
        &self,
        id: u64,
        account: &str,
        signed_tx: &str,
        target: Option<&str>,
    ) -> Result<()> {
        let req = FillOrderRequest {
            id,
            origin_address: target.map(str::to_string),
            address: account.to_string(),
            signed_tx: signed_tx.to_string(),
        };
        let builder = self.request(Method::POST, "/order/fill")?.json(&req);
        self.send_empty(builder).await
    }

    /// Cancel an order placed by `account`
    ///
    /// POST /order/cancel
    pub async fn cancel_order(&self, id: u64, account: &str, signed_ms: SignedMs) -> Result<()> {
        let req = CancelOrderRequest {
            order: id,
            address: account.to_string(),
            signed_ms,
        };
        let builder = self.request(Method::POST, "/order/cancel")?.json(&req);
        self.send_empty(builder).await
    }
}
