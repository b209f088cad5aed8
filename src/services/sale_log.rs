use crate::models::SaleRecord;
use crate::services::json_file::{read_json, write_json, StoreError};
use chrono::Local;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// Formato ISO-8601 local, sem fuso, com microssegundos.
const RECEIVED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Sale log: one JSON array, rewritten on every received sale.
///
/// Every append reads and rewrites the whole file, so cost grows with the
/// history. Stored entries are kept as raw JSON values and written back
/// untouched; only the new record goes through [`SaleRecord`]. Appends hold
/// `write_lock` across the read-modify-write, so two deliveries handled by
/// this process can no longer drop each other's record. Another process
/// writing the same file still can.
pub struct SaleLog {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl SaleLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Carimba `recebido_em`, anexa e regrava o arquivo. Retorna o registro
    /// como foi gravado.
    pub async fn append(&self, mut record: SaleRecord) -> Result<SaleRecord, StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut vendas = self.list().await?;
        record.recebido_em = Some(Local::now().format(RECEIVED_AT_FORMAT).to_string());
        let entry = serde_json::to_value(&record).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;
        vendas.push(entry);
        write_json(&self.path, &vendas).await?;

        Ok(record)
    }

    /// Histórico completo, na ordem de chegada, exatamente como está no arquivo.
    pub async fn list(&self) -> Result<Vec<Value>, StoreError> {
        Ok(read_json(&self.path).await?.unwrap_or_default())
    }
}
