use crate::domain::model::Ledger;
use crate::utils::error::Result;

/// 帳本的持久化介面；每次呼叫各自開啟、關閉底層資源
pub trait LedgerStorage {
    fn load(&self) -> Result<Ledger>;
    fn save(&self, ledger: &Ledger) -> Result<()>;
}
