use crate::core::analytics::SalesSummary;
use crate::core::pricing::{cents, PriceBreakdown};
use crate::domain::model::Ledger;
use std::fmt::Write;

const RECEIPT_HEADER: &str = "--- RECEIPT ---";
const RECEIPT_FOOTER: &str = "---------------";

/// 產生收據文字
pub fn render_receipt(ledger: &Ledger, amounts: &PriceBreakdown) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{}", RECEIPT_HEADER);
    let _ = writeln!(
        out,
        "{:<15} {:>8} {:>10} {:>10}",
        "Item", "Qty", "Price", "Total"
    );
    for (name, record) in ledger.iter() {
        let _ = writeln!(
            out,
            "{:<15} {:>8} {:>10.2} {:>10.2}",
            name,
            record.quantity,
            cents(record.unit_price),
            cents(record.line_total())
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Subtotal: ${:.2}", cents(amounts.subtotal));
    let _ = writeln!(out, "Discount: -${:.2}", cents(amounts.discount));
    let _ = writeln!(out, "Tax: +${:.2}", cents(amounts.tax));
    let _ = writeln!(out, "Total: ${:.2}", cents(amounts.total));
    let _ = writeln!(out, "{}", RECEIPT_FOOTER);

    out
}

pub fn render_summary(summary: &SalesSummary) -> String {
    let mut out = String::new();

    match &summary.top_item {
        Some(top) => {
            let _ = writeln!(
                out,
                "Top-selling item: {} (Qty: {})",
                top.name, top.quantity
            );
        }
        None => {
            let _ = writeln!(out, "Top-selling item: none");
        }
    }
    let _ = writeln!(out, "Total items sold: {}", summary.total_units);
    let _ = writeln!(
        out,
        "Total sales amount: ${:.2}",
        cents(summary.total_revenue)
    );

    out
}
