//! Exchange service core
//!
//! Coordinates the token registry, the ledger, and the per-token order
//! books behind the public operation surface. Every mutating operation
//! runs to completion on `&mut self`: it validates all preconditions
//! before its first state change, so a failure never leaves partial
//! state behind.

use rust_decimal::Decimal;
use std::collections::HashMap;
use types::errors::{ExchangeError, LedgerError};
use types::ids::{OrderId, Principal, TokenId};
use types::numeric::{Price, Quantity};
use types::order::{Order, Side};
use types::trade::Trade;

use crate::book::TokenBook;
use crate::events::{
    Deposited, ExchangeEvent, OrderPlaced, TokenCreated, TradeExecuted, Withdrawn,
};
use crate::ledger::Ledger;
use crate::matching::executor::TradeExecutor;
use crate::registry::TokenRegistry;

/// The exchange backend: ledger plus order book and matching engine
///
/// All orders are priced in a single quote currency fixed at
/// construction; a buy escrows quote value, a sell escrows the base
/// token. The outstanding order is itself the escrow record — funds
/// debited at placement are released only through settlement.
pub struct Exchange {
    registry: TokenRegistry,
    ledger: Ledger,
    executor: TradeExecutor,
    /// Outstanding order ids per token, in placement order
    books: HashMap<TokenId, TokenBook>,
    /// All outstanding orders by id
    orders: HashMap<OrderId, Order>,
    /// Next order id to assign; ids are never reused
    next_order_id: u64,
    /// The currency every order's price is denominated in
    quote_token: TokenId,
    /// Settled trades, in execution order
    trades: Vec<Trade>,
    /// Emitted events log (append-only)
    events: Vec<ExchangeEvent>,
}

impl Exchange {
    /// Create a new exchange with the given quote currency
    ///
    /// The quote token is registered at construction with zero supply;
    /// participants fund it through `deposit`.
    pub fn new(quote_token: TokenId) -> Self {
        let mut registry = TokenRegistry::new();
        registry
            .register(quote_token.clone())
            .unwrap_or_else(|_| unreachable!("fresh registry cannot hold the quote token"));

        Self {
            registry,
            ledger: Ledger::new(),
            executor: TradeExecutor::new(0),
            books: HashMap::new(),
            orders: HashMap::new(),
            next_order_id: 0,
            quote_token,
            trades: Vec::new(),
            events: Vec::new(),
        }
    }

    // ───────────────────────── Token lifecycle ─────────────────────────

    /// Register a token and mint its initial supply to the caller
    ///
    /// `initial_supply` must be non-negative; zero is a registration
    /// with no mint. Fails with `TokenAlreadyExists` before any mint.
    pub fn create_token(
        &mut self,
        caller: &Principal,
        token: TokenId,
        initial_supply: Decimal,
    ) -> Result<(), ExchangeError> {
        if initial_supply < Decimal::ZERO {
            return Err(ExchangeError::InvalidArgument(
                "initial supply must be non-negative".to_string(),
            ));
        }

        self.registry.register(token.clone())?;
        if initial_supply > Decimal::ZERO {
            // Cannot fail: an unregistered token has no prior balance to
            // overflow, and registration just succeeded.
            self.ledger.credit(caller, &token, initial_supply)?;
        }

        tracing::info!(%caller, %token, %initial_supply, "token created");
        self.events.push(ExchangeEvent::TokenCreated(TokenCreated {
            token,
            creator: caller.clone(),
            initial_supply,
        }));
        Ok(())
    }

    // ───────────────────────── Funding ─────────────────────────

    /// Credit the caller's balance for a registered token
    pub fn deposit(
        &mut self,
        caller: &Principal,
        token: &TokenId,
        amount: Decimal,
    ) -> Result<(), ExchangeError> {
        self.registry.ensure_registered(token)?;
        if amount <= Decimal::ZERO {
            return Err(ExchangeError::InvalidArgument(
                "deposit amount must be positive".to_string(),
            ));
        }

        self.ledger.credit(caller, token, amount)?;

        tracing::debug!(%caller, %token, %amount, "deposit");
        self.events.push(ExchangeEvent::Deposited(Deposited {
            owner: caller.clone(),
            token: token.clone(),
            amount,
        }));
        Ok(())
    }

    /// Debit the caller's balance for a registered token
    ///
    /// Fails with `InsufficientBalance` (leaving state unchanged) when
    /// the spendable balance is below `amount`.
    pub fn withdraw(
        &mut self,
        caller: &Principal,
        token: &TokenId,
        amount: Decimal,
    ) -> Result<(), ExchangeError> {
        self.registry.ensure_registered(token)?;
        if amount <= Decimal::ZERO {
            return Err(ExchangeError::InvalidArgument(
                "withdraw amount must be positive".to_string(),
            ));
        }

        self.ledger.debit(caller, token, amount)?;

        tracing::debug!(%caller, %token, %amount, "withdraw");
        self.events.push(ExchangeEvent::Withdrawn(Withdrawn {
            owner: caller.clone(),
            token: token.clone(),
            amount,
        }));
        Ok(())
    }

    // ───────────────────────── Orders ─────────────────────────

    /// Place an order, escrowing its reservation from the caller
    ///
    /// A buy reserves `price × amount` of the quote currency; a sell
    /// reserves `amount` of the base token. The reservation is an
    /// immediate debit — if it fails, no order is created and no id is
    /// consumed. On success the order joins the token's book and the
    /// fresh id is returned.
    pub fn place_order(
        &mut self,
        caller: &Principal,
        token: &TokenId,
        side: Side,
        price: Price,
        amount: Quantity,
    ) -> Result<OrderId, ExchangeError> {
        self.registry.ensure_registered(token)?;
        if amount.is_zero() {
            return Err(ExchangeError::InvalidArgument(
                "order amount must be positive".to_string(),
            ));
        }

        // Escrow: the debit is the last fallible step before the order
        // exists, keeping placement all-or-nothing. A buy reservation
        // that does not fit in a Decimal is an overflow error, not a
        // panic.
        let (reserve_token, reserved) = match side {
            Side::Buy => (
                self.quote_token.clone(),
                price.checked_value(amount).ok_or(LedgerError::Overflow)?,
            ),
            Side::Sell => (token.clone(), amount.as_decimal()),
        };
        self.ledger.debit(caller, &reserve_token, reserved)?;

        let id = OrderId::new(self.next_order_id);
        self.next_order_id += 1;

        let order = Order::new(id, token.clone(), caller.clone(), side, price, amount);
        self.books.entry(token.clone()).or_default().insert(id);
        self.orders.insert(id, order);

        tracing::info!(%caller, %token, ?side, %price, %amount, order_id = %id, "order placed");
        self.events.push(ExchangeEvent::OrderPlaced(OrderPlaced {
            order_id: id,
            token: token.clone(),
            owner: caller.clone(),
            side,
            price,
            amount,
            reserved,
        }));
        Ok(id)
    }

    /// Settle a trade between an outstanding buy and sell order
    ///
    /// Validates both ids, the pair's sides, token, and price
    /// compatibility, then moves the escrowed funds atomically: the
    /// traded base amount to the buyer, the quote value to the seller,
    /// and any escrow surplus back to the buyer. Both orders shrink by
    /// the traded quantity; a fully-filled order leaves its book.
    pub fn execute_trade(
        &mut self,
        buy_order_id: OrderId,
        sell_order_id: OrderId,
    ) -> Result<Trade, ExchangeError> {
        let buy = self
            .orders
            .get(&buy_order_id)
            .ok_or(ExchangeError::UnknownOrder {
                order_id: buy_order_id,
            })?;
        let sell = self
            .orders
            .get(&sell_order_id)
            .ok_or(ExchangeError::UnknownOrder {
                order_id: sell_order_id,
            })?;

        let (settlement, trade) = self.executor.execute(buy, sell)?;
        let buyer = buy.owner.clone();
        let seller = sell.owner.clone();
        let token = buy.token.clone();

        // Settle all legs atomically. Reservations guarantee the escrowed
        // funds exist, so this can only fail on decimal overflow — and
        // then with no state change.
        self.ledger.credit_many(&[
            (buyer.clone(), token.clone(), settlement.base_amount),
            (seller, self.quote_token.clone(), settlement.quote_amount),
            (buyer, self.quote_token.clone(), settlement.buyer_refund),
        ])?;

        self.consume_order(buy_order_id, settlement.quantity);
        self.consume_order(sell_order_id, settlement.quantity);

        tracing::info!(
            %buy_order_id,
            %sell_order_id,
            %token,
            price = %settlement.price,
            quantity = %settlement.quantity,
            sequence = trade.sequence,
            "trade executed"
        );
        self.events.push(ExchangeEvent::TradeExecuted(TradeExecuted {
            trade_id: trade.trade_id,
            sequence: trade.sequence,
            token,
            buy_order_id,
            sell_order_id,
            price: settlement.price,
            quantity: settlement.quantity,
        }));
        self.trades.push(trade.clone());
        Ok(trade)
    }

    /// Reduce an order by a fill, dropping it from its book at zero
    fn consume_order(&mut self, order_id: OrderId, quantity: Quantity) {
        let Some(order) = self.orders.get_mut(&order_id) else {
            return;
        };
        order.fill(quantity);
        if order.is_filled() {
            let token = order.token.clone();
            self.orders.remove(&order_id);
            if let Some(book) = self.books.get_mut(&token) {
                book.remove(&order_id);
            }
        }
    }

    // ───────────────────────── Queries ─────────────────────────

    /// The outstanding order with this id, if any
    pub fn get_order(&self, order_id: OrderId) -> Option<Order> {
        self.orders.get(&order_id).cloned()
    }

    /// All outstanding orders for a token, in placement order
    ///
    /// Empty for an unregistered or quiet token; never contains an
    /// order with zero remaining amount.
    pub fn get_order_book(&self, token: &TokenId) -> Vec<Order> {
        let Some(book) = self.books.get(token) else {
            return Vec::new();
        };
        book.iter()
            .filter_map(|id| self.orders.get(id))
            .cloned()
            .collect()
    }

    /// The caller's balance for a token, if the pair was ever touched
    pub fn get_token_balance(&self, caller: &Principal, token: &TokenId) -> Option<Decimal> {
        self.ledger.recorded_balance(caller, token)
    }

    /// Any owner's balance for a token, if the pair was ever touched
    pub fn get_user_balance(&self, owner: &Principal, token: &TokenId) -> Option<Decimal> {
        self.ledger.recorded_balance(owner, token)
    }

    /// Settled trades in execution order
    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    /// The quote currency all orders are priced in
    pub fn quote_token(&self) -> &TokenId {
        &self.quote_token
    }

    /// Direct read access to the ledger
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Get all emitted events
    pub fn events(&self) -> &[ExchangeEvent] {
        &self.events
    }

    /// Drain all events (consume and clear)
    pub fn drain_events(&mut self) -> Vec<ExchangeEvent> {
        std::mem::take(&mut self.events)
    }
}
