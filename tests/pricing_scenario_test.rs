use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sales_ledger::{
    discount, price, render_receipt, subtotal, summarize, tax, total, DiscountPolicy, Ledger,
    PricingConfig,
};

/// 完整流程：新增兩筆銷售 → 小計 → BOGO 折扣 → 稅 → 總計
#[test]
fn test_end_to_end_bogo_scenario() {
    let mut ledger = Ledger::new();
    ledger.upsert("Widget", 3, dec!(10.0));
    ledger.upsert("Gadget", 2, dec!(15.0));

    let sub = subtotal(&ledger);
    let off = discount(&ledger, DiscountPolicy::parse("bogo"));
    let t = tax(sub - off, dec!(0.07));

    assert_eq!(sub, dec!(60.0));
    assert_eq!(off, dec!(25.0));
    assert_eq!(t, dec!(2.45));
    assert_eq!(total(sub, off, t), dec!(37.45));

    let config = PricingConfig::default().with_discount(DiscountPolicy::Bogo);
    let breakdown = price(&ledger, &config);
    assert_eq!(breakdown.total, dec!(37.45));

    let receipt = render_receipt(&ledger, &breakdown);
    assert!(receipt.contains("Total: $37.45"));
}

#[test]
fn test_unknown_policy_means_no_discount() {
    let mut ledger = Ledger::new();
    ledger.upsert("Widget", 4, dec!(2.5));

    let breakdown = price(
        &ledger,
        &PricingConfig {
            tax_rate: dec!(0.1),
            discount: DiscountPolicy::parse("half-price"),
        },
    );

    assert_eq!(breakdown.discount, Decimal::ZERO);
    assert_eq!(breakdown.tax, dec!(1.00));
    assert_eq!(breakdown.total, dec!(11.00));
}

#[test]
fn test_independent_pricing_configs_coexist() {
    let mut ledger = Ledger::new();
    ledger.upsert("Widget", 2, dec!(50));

    let plain = price(&ledger, &PricingConfig::default());
    let promo = price(
        &ledger,
        &PricingConfig {
            tax_rate: dec!(0.2),
            discount: DiscountPolicy::Bogo,
        },
    );

    assert_eq!(plain.total, dec!(107.00));
    assert_eq!(promo.total, dec!(60.00));
}

#[test]
fn test_summary_matches_subtotal() {
    let mut ledger = Ledger::new();
    ledger.upsert("A", 3, dec!(10));
    ledger.upsert("B", 2, dec!(15));
    ledger.upsert("C", 5, dec!(5));

    let summary = summarize(&ledger);

    assert_eq!(summary.total_revenue, subtotal(&ledger));
    assert_eq!(summary.total_units, 10);
    assert_eq!(summary.top_item.unwrap().name, "C");
    assert_eq!(discount(&ledger, DiscountPolicy::Bogo), dec!(35));
}
