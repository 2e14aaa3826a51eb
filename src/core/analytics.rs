use crate::core::pricing::subtotal;
use crate::domain::model::Ledger;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopItem {
    pub name: String,
    pub quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalesSummary {
    pub top_item: Option<TopItem>,
    pub total_units: i64,
    pub total_revenue: Decimal,
}

/// 銷售統計：最暢銷品項、總售出數量、總銷售額
///
/// Ties on quantity go to the item that was recorded first.
pub fn summarize(ledger: &Ledger) -> SalesSummary {
    let mut top: Option<(&str, i64)> = None;
    let mut total_units: i64 = 0;

    for (name, record) in ledger.iter() {
        total_units = total_units.saturating_add(record.quantity);
        if top.map_or(true, |(_, best)| record.quantity > best) {
            top = Some((name, record.quantity));
        }
    }

    SalesSummary {
        top_item: top.map(|(name, quantity)| TopItem {
            name: name.to_string(),
            quantity,
        }),
        total_units,
        total_revenue: subtotal(ledger),
    }
}
