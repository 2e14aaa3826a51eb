use crate::domain::model::Ledger;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// 促銷折扣規則
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountPolicy {
    #[default]
    None,
    /// Buy one get one: every second unit of each item is free.
    Bogo,
}

impl DiscountPolicy {
    /// Case-insensitive; anything unrecognised is treated as `None`.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("bogo") {
            DiscountPolicy::Bogo
        } else {
            DiscountPolicy::None
        }
    }
}

impl FromStr for DiscountPolicy {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for DiscountPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscountPolicy::None => f.write_str("none"),
            DiscountPolicy::Bogo => f.write_str("bogo"),
        }
    }
}

/// 計價設定：稅率與預設折扣，每次計價明確傳入
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingConfig {
    pub tax_rate: Decimal,
    pub discount: DiscountPolicy,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tax_rate: Decimal::new(7, 2),
            discount: DiscountPolicy::None,
        }
    }
}

impl PricingConfig {
    pub fn with_discount(self, discount: DiscountPolicy) -> Self {
        Self { discount, ..self }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceBreakdown {
    pub subtotal: Decimal,
    pub discount: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl PriceBreakdown {
    pub fn zero() -> Self {
        Self {
            subtotal: Decimal::ZERO,
            discount: Decimal::ZERO,
            tax: Decimal::ZERO,
            total: Decimal::ZERO,
        }
    }
}

/// Half away from zero to 2 decimal places; shared by tax and every displayed amount.
pub(crate) fn cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

// 金額運算一律飽和在 Decimal::MAX / Decimal::MIN，與數量的飽和策略一致

pub fn subtotal(ledger: &Ledger) -> Decimal {
    ledger
        .records()
        .fold(Decimal::ZERO, |acc, record| {
            acc.saturating_add(record.line_total())
        })
}

pub fn discount(ledger: &Ledger, policy: DiscountPolicy) -> Decimal {
    match policy {
        DiscountPolicy::None => Decimal::ZERO,
        DiscountPolicy::Bogo => ledger.records().fold(Decimal::ZERO, |acc, record| {
            let free_units = Decimal::from(record.quantity.div_euclid(2));
            acc.saturating_add(free_units.saturating_mul(record.unit_price))
        }),
    }
}

/// `amount × rate`, rounded half away from zero to 2 decimal places.
/// Negative amounts are not clamped.
pub fn tax(amount: Decimal, rate: Decimal) -> Decimal {
    cents(amount.saturating_mul(rate))
}

pub fn total(subtotal: Decimal, discount: Decimal, tax: Decimal) -> Decimal {
    subtotal.saturating_sub(discount).saturating_add(tax)
}

/// 依序計算 subtotal → discount → tax → total，全部基於同一份帳本快照
pub fn price(ledger: &Ledger, config: &PricingConfig) -> PriceBreakdown {
    let subtotal = subtotal(ledger);
    let discount = discount(ledger, config.discount);
    let tax = tax(subtotal.saturating_sub(discount), config.tax_rate);
    let total = total(subtotal, discount, tax);

    tracing::debug!(
        %subtotal,
        %discount,
        %tax,
        %total,
        policy = %config.discount,
        "Priced ledger"
    );

    PriceBreakdown {
        subtotal,
        discount,
        tax,
        total,
    }
}
