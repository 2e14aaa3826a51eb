use crate::app::session::Session;
use crate::config::cli::Command;
use crate::config::AppConfig;
use crate::core::analytics::summarize;
use crate::core::pricing::{cents, price};
use crate::core::receipt::{render_receipt, render_summary};
use crate::domain::ports::LedgerStorage;
use crate::utils::error::{LedgerError, Result};
use crate::utils::validation::validate_non_empty_string;
use std::io::{BufRead, Write};

/// 執行單次子命令；沒有子命令時進入互動式選單
pub fn run<R: BufRead, W: Write, S: LedgerStorage>(
    command: Option<Command>,
    config: &AppConfig,
    storage: S,
    input: R,
    mut output: W,
) -> Result<()> {
    match command {
        None => {
            let session = Session::start(input, &mut output, storage, config.pricing)?;
            session.run()?;
        }
        Some(Command::Add {
            item,
            quantity,
            price: unit_price,
        }) => {
            validate_non_empty_string("item", &item)?;
            if unit_price.is_sign_negative() && !unit_price.is_zero() {
                return Err(LedgerError::ValidationError {
                    message: format!("unit price {} cannot be negative", unit_price),
                });
            }

            let item = item.trim();
            let mut ledger = storage.load()?;
            let record = *ledger.upsert(item, quantity, unit_price);
            storage.save(&ledger)?;
            writeln!(
                output,
                "Added/Updated sale: {} x{} @ ${:.2} (now {} units)",
                item,
                quantity,
                cents(unit_price),
                record.quantity
            )?;
            tracing::info!("✅ Saved {} items", ledger.len());
        }
        Some(Command::Receipt) => {
            let ledger = storage.load()?;
            let breakdown = price(&ledger, &config.pricing);
            write!(output, "{}", render_receipt(&ledger, &breakdown))?;
        }
        Some(Command::Analytics { json }) => {
            let ledger = storage.load()?;
            let summary = summarize(&ledger);
            if json {
                writeln!(output, "{}", serde_json::to_string_pretty(&summary)?)?;
            } else {
                write!(output, "{}", render_summary(&summary))?;
            }
        }
    }

    Ok(())
}
