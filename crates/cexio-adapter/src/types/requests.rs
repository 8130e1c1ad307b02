/*
[INPUT]:  Order side, amount and optional limit price
[OUTPUT]: Order request consumed by the private form builder
[POS]:    Data layer - request parameter types
[UPDATE]: When order placement parameters change
*/

use rust_decimal::Decimal;

use super::{OrderType, Side};

/// Parameters of a `place_order` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderRequest {
    Market { side: Side, amount: Decimal },
    Limit { side: Side, amount: Decimal, price: Decimal },
}

impl OrderRequest {
    pub fn market(side: Side, amount: Decimal) -> Self {
        OrderRequest::Market { side, amount }
    }

    pub fn limit(side: Side, amount: Decimal, price: Decimal) -> Self {
        OrderRequest::Limit {
            side,
            amount,
            price,
        }
    }

    pub fn order_type(&self) -> OrderType {
        match self {
            OrderRequest::Market { .. } => OrderType::Market,
            OrderRequest::Limit { .. } => OrderType::Limit,
        }
    }

    pub fn side(&self) -> Side {
        match self {
            OrderRequest::Market { side, .. } | OrderRequest::Limit { side, .. } => *side,
        }
    }

    pub fn amount(&self) -> Decimal {
        match self {
            OrderRequest::Market { amount, .. } | OrderRequest::Limit { amount, .. } => *amount,
        }
    }

    /// Limit price; market orders carry none
    pub fn price(&self) -> Option<Decimal> {
        match self {
            OrderRequest::Market { .. } => None,
            OrderRequest::Limit { price, .. } => Some(*price),
        }
    }
}
