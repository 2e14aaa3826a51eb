use crate::domain::model::{Ledger, SalesRecord};
use crate::domain::ports::LedgerStorage;
use crate::utils::error::{LedgerError, Result};
use rust_decimal::Decimal;
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// 從 CSV 讀取帳本（無標題列，每列 item,quantity,unit_price）
///
/// Any malformed row fails the whole read; no partial ledger is returned.
pub fn read_ledger<R: Read>(reader: R) -> Result<Ledger> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (idx, result) in csv_reader.records().enumerate() {
        let record = result?;
        let row = record
            .position()
            .map_or(idx as u64 + 1, |position| position.line());

        if record.len() != 3 {
            return Err(LedgerError::parse(
                row,
                format!("expected 3 fields, found {}", record.len()),
            ));
        }

        let item = &record[0];
        let quantity: i64 = record[1].trim().parse().map_err(|_| {
            LedgerError::parse(row, format!("quantity '{}' is not an integer", &record[1]))
        })?;
        if quantity < 0 {
            return Err(LedgerError::parse(
                row,
                format!("quantity {} is negative", quantity),
            ));
        }
        let unit_price = Decimal::from_str(record[2].trim()).map_err(|_| {
            LedgerError::parse(row, format!("unit price '{}' is not a decimal", &record[2]))
        })?;

        rows.push((item.to_string(), SalesRecord::new(quantity, unit_price)));
    }

    Ok(rows.into_iter().collect())
}

pub fn write_ledger<W: Write>(writer: W, ledger: &Ledger) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    for (item, record) in ledger.iter() {
        csv_writer.write_record([
            item,
            record.quantity.to_string().as_str(),
            record.unit_price.to_string().as_str(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// 載入帳本；檔案不存在時回傳空帳本
pub fn load<P: AsRef<Path>>(path: P) -> Result<Ledger> {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::warn!(
                "{} not found. Starting with empty sales data.",
                path.display()
            );
            return Ok(Ledger::new());
        }
        Err(e) => return Err(e.into()),
    };

    let ledger = read_ledger(file)?;
    tracing::debug!("Loaded {} items from {}", ledger.len(), path.display());
    Ok(ledger)
}

/// 儲存帳本，覆寫既有內容
pub fn save<P: AsRef<Path>>(path: P, ledger: &Ledger) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(path)?;
    write_ledger(file, ledger)?;
    tracing::debug!("Saved {} items to {}", ledger.len(), path.display());
    Ok(())
}

#[derive(Debug, Clone)]
pub struct CsvFileStorage {
    path: PathBuf,
}

impl CsvFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LedgerStorage for CsvFileStorage {
    fn load(&self) -> Result<Ledger> {
        load(&self.path)
    }

    fn save(&self, ledger: &Ledger) -> Result<()> {
        save(&self.path, ledger)
    }
}
