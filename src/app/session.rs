use crate::core::analytics::summarize;
use crate::core::pricing::{cents, price, DiscountPolicy, PricingConfig};
use crate::core::receipt::{render_receipt, render_summary};
use crate::domain::model::Ledger;
use crate::domain::ports::LedgerStorage;
use crate::utils::error::Result;
use rust_decimal::Decimal;
use std::io::{BufRead, Write};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    AddSale,
    Receipt,
    Analytics,
    SaveAndExit,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::AddSale),
            "2" => Some(MenuChoice::Receipt),
            "3" => Some(MenuChoice::Analytics),
            "4" => Some(MenuChoice::SaveAndExit),
            _ => None,
        }
    }
}

const MENU: &str = "\nSales Management System\n\
                    1. Add Sale\n\
                    2. View Receipt\n\
                    3. View Sales Analytics\n\
                    4. Save & Exit";

/// 互動式選單：載入 → 多次新增銷售 / 查看收據 / 查看統計 → 儲存並離開
pub struct Session<R, W, S> {
    input: R,
    output: W,
    storage: S,
    pricing: PricingConfig,
    ledger: Ledger,
}

impl<R: BufRead, W: Write, S: LedgerStorage> Session<R, W, S> {
    pub fn start(input: R, output: W, storage: S, pricing: PricingConfig) -> Result<Self> {
        let ledger = storage.load()?;
        tracing::info!("Session started with {} items", ledger.len());
        Ok(Self {
            input,
            output,
            storage,
            pricing,
            ledger,
        })
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Runs until "Save & Exit" or end of input; both save before returning.
    pub fn run(mut self) -> Result<Ledger> {
        loop {
            writeln!(self.output, "{}", MENU)?;
            let Some(choice) = self.prompt("Enter your choice: ")? else {
                tracing::debug!("Input closed, saving before exit");
                break;
            };

            match MenuChoice::parse(&choice) {
                Some(MenuChoice::AddSale) => self.add_sale()?,
                Some(MenuChoice::Receipt) => self.show_receipt()?,
                Some(MenuChoice::Analytics) => self.show_analytics()?,
                Some(MenuChoice::SaveAndExit) => break,
                None => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }

        self.storage.save(&self.ledger)?;
        writeln!(self.output, "Sales data saved. Exiting program.")?;
        tracing::info!("Session saved {} items", self.ledger.len());
        Ok(self.ledger)
    }

    /// 讀取一行輸入；EOF 時回傳 None
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn add_sale(&mut self) -> Result<()> {
        let Some(item) = self.prompt("Enter item name: ")? else {
            return Ok(());
        };
        let item = item.trim().to_string();
        if item.is_empty() {
            writeln!(self.output, "Item name cannot be empty.")?;
            return Ok(());
        }

        let Some(quantity) = self.prompt("Enter quantity: ")? else {
            return Ok(());
        };
        let Ok(quantity) = quantity.trim().parse::<i64>() else {
            writeln!(self.output, "Invalid quantity '{}'.", quantity.trim())?;
            return Ok(());
        };

        let Some(raw_price) = self.prompt("Enter unit price: ")? else {
            return Ok(());
        };
        let unit_price = match Decimal::from_str(raw_price.trim()) {
            Ok(p) if p.is_sign_negative() && !p.is_zero() => {
                writeln!(self.output, "Unit price cannot be negative.")?;
                return Ok(());
            }
            Ok(p) => p,
            Err(_) => {
                writeln!(self.output, "Invalid unit price '{}'.", raw_price.trim())?;
                return Ok(());
            }
        };

        self.ledger.upsert(&item, quantity, unit_price);
        writeln!(
            self.output,
            "Added/Updated sale: {} x{} @ ${:.2}",
            item,
            quantity,
            cents(unit_price)
        )?;
        Ok(())
    }

    fn show_receipt(&mut self) -> Result<()> {
        let Some(answer) = self.prompt("Enter discount type (none/bogo): ")? else {
            return Ok(());
        };
        let discount = if answer.trim().is_empty() {
            self.pricing.discount
        } else {
            DiscountPolicy::parse(&answer)
        };

        let config = self.pricing.with_discount(discount);
        let breakdown = price(&self.ledger, &config);
        write!(self.output, "\n{}", render_receipt(&self.ledger, &breakdown))?;
        Ok(())
    }

    fn show_analytics(&mut self) -> Result<()> {
        let summary = summarize(&self.ledger);
        write!(self.output, "{}", render_summary(&summary))?;
        Ok(())
    }
}
