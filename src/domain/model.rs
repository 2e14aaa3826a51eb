use rust_decimal::Decimal;
use std::collections::HashMap;

/// 單一品項的累計銷售數量與目前單價
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalesRecord {
    pub quantity: i64,
    pub unit_price: Decimal,
}

impl SalesRecord {
    pub fn new(quantity: i64, unit_price: Decimal) -> Self {
        Self {
            quantity,
            unit_price,
        }
    }

    /// quantity × unit_price, saturating at `Decimal::MAX` / `Decimal::MIN`
    pub fn line_total(&self) -> Decimal {
        Decimal::from(self.quantity).saturating_mul(self.unit_price)
    }
}

/// Item name → record, iterated in first-insertion order.
///
/// Entries are never removed. The only mutation is [`Ledger::upsert`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    entries: Vec<(String, SalesRecord)>,
    index: HashMap<String, usize>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, item: &str) -> Option<&SalesRecord> {
        self.index.get(item).map(|&i| &self.entries[i].1)
    }

    pub fn contains(&self, item: &str) -> bool {
        self.index.contains_key(item)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SalesRecord)> {
        self.entries
            .iter()
            .map(|(name, record)| (name.as_str(), record))
    }

    pub fn records(&self) -> impl Iterator<Item = &SalesRecord> {
        self.entries.iter().map(|(_, record)| record)
    }

    /// 新增或合併一筆銷售
    ///
    /// - 已存在：數量累加後下限為 0，單價直接覆蓋
    /// - 不存在：以 `max(0, quantity)` 建立新紀錄，附加在最後
    pub fn upsert(&mut self, item: &str, quantity: i64, unit_price: Decimal) -> &SalesRecord {
        let slot = match self.index.get(item) {
            Some(&i) => {
                let record = &mut self.entries[i].1;
                record.quantity = record.quantity.saturating_add(quantity).max(0);
                record.unit_price = unit_price;
                tracing::debug!(
                    item,
                    quantity = record.quantity,
                    unit_price = %record.unit_price,
                    "Merged sale into existing record"
                );
                i
            }
            None => {
                let record = SalesRecord::new(quantity.max(0), unit_price);
                tracing::debug!(
                    item,
                    quantity = record.quantity,
                    unit_price = %record.unit_price,
                    "Created new sales record"
                );
                self.push(item.to_string(), record)
            }
        };
        &self.entries[slot].1
    }

    /// Replaces an existing record in place or appends a new one.
    fn put(&mut self, item: String, record: SalesRecord) {
        match self.index.get(&item) {
            Some(&i) => self.entries[i].1 = record,
            None => {
                self.push(item, record);
            }
        }
    }

    fn push(&mut self, item: String, record: SalesRecord) -> usize {
        let slot = self.entries.len();
        self.index.insert(item.clone(), slot);
        self.entries.push((item, record));
        slot
    }
}

/// Later pairs for an already-seen item replace its record but keep its original position.
impl FromIterator<(String, SalesRecord)> for Ledger {
    fn from_iter<I: IntoIterator<Item = (String, SalesRecord)>>(iter: I) -> Self {
        let mut ledger = Ledger::new();
        for (item, record) in iter {
            ledger.put(item, record);
        }
        ledger
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.upsert("Widget", 3, dec!(10.0));
        ledger.upsert("Gadget", 2, dec!(15.0));
        ledger.upsert("Thingamajig", 5, dec!(5.0));
        ledger
    }

    #[test]
    fn test_upsert_new_item() {
        let mut ledger = sample_ledger();
        let record = *ledger.upsert("Doohickey", 4, dec!(8.0));

        assert_eq!(record, SalesRecord::new(4, dec!(8.0)));
        assert_eq!(ledger.len(), 4);
        assert_eq!(ledger.iter().last().map(|(name, _)| name), Some("Doohickey"));
    }

    #[test]
    fn test_upsert_existing_item_accumulates() {
        let mut ledger = sample_ledger();
        ledger.upsert("Widget", 2, dec!(10.0));

        assert_eq!(ledger.get("Widget").unwrap().quantity, 5);
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn test_upsert_negative_adjustment() {
        let mut ledger = sample_ledger();
        ledger.upsert("Widget", -1, dec!(10.0));

        assert_eq!(ledger.get("Widget").unwrap().quantity, 2);
    }

    #[test]
    fn test_upsert_clamps_underflow_to_zero() {
        let mut ledger = sample_ledger();
        let record = ledger.upsert("Widget", -5, dec!(10.0));

        assert_eq!(record.quantity, 0);
    }

    #[test]
    fn test_upsert_new_item_with_negative_quantity_floors_at_zero() {
        let mut ledger = Ledger::new();
        let record = ledger.upsert("Returned", -3, dec!(4.5));

        assert_eq!(record.quantity, 0);
        assert_eq!(record.unit_price, dec!(4.5));
    }

    #[test]
    fn test_upsert_last_price_wins() {
        let mut ledger = Ledger::new();
        ledger.upsert("Widget", 5, dec!(10.0));
        ledger.upsert("Widget", -2, dec!(12.5));

        assert_eq!(ledger.get("Widget").unwrap().unit_price, dec!(12.5));

        let mut reversed = Ledger::new();
        reversed.upsert("Widget", -2, dec!(10.0));
        reversed.upsert("Widget", 5, dec!(12.5));

        assert_eq!(reversed.get("Widget").unwrap().unit_price, dec!(12.5));
    }

    #[test]
    fn test_upsert_saturates_instead_of_overflowing() {
        let mut ledger = Ledger::new();
        ledger.upsert("Bulk", i64::MAX, dec!(1));
        ledger.upsert("Bulk", 10, dec!(1));

        assert_eq!(ledger.get("Bulk").unwrap().quantity, i64::MAX);
    }

    #[test]
    fn test_line_total_saturates() {
        let record = SalesRecord::new(i64::MAX, Decimal::MAX);
        assert_eq!(record.line_total(), Decimal::MAX);

        let refund = SalesRecord::new(i64::MAX, Decimal::MIN);
        assert_eq!(refund.line_total(), Decimal::MIN);
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let mut ledger = Ledger::new();
        ledger.upsert("widget", 1, dec!(1));
        ledger.upsert("Widget", 1, dec!(1));

        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_from_iter_keeps_first_position_for_duplicates() {
        let ledger: Ledger = vec![
            ("A".to_string(), SalesRecord::new(1, dec!(1))),
            ("B".to_string(), SalesRecord::new(2, dec!(2))),
            ("A".to_string(), SalesRecord::new(9, dec!(3))),
        ]
        .into_iter()
        .collect();

        let names: Vec<&str> = ledger.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(ledger.get("A"), Some(&SalesRecord::new(9, dec!(3))));
    }
}
