use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use chrono::Utc;
use log::*;
use tokio::sync::Mutex;

use crate::{
    db_types::Order,
    store::{json::LedgerError, traits::OrderLedger},
};

/// An append-only order ledger stored as a pretty-printed JSON array.
///
/// Every append is a full read-modify-write of the file. Appends are serialised through a lock that is shared by all
/// clones of the ledger, so a single `JsonFileLedger` (and its clones) may be used from any number of concurrent
/// requests without losing orders. Two *independently constructed* ledgers pointing at the same file do not share the
/// lock, so construct one per file and clone it.
///
/// New contents are written to `<ledger>.tmp` and renamed into place, so readers never observe a half-written file.
#[derive(Debug, Clone)]
pub struct JsonFileLedger {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl JsonFileLedger {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into(), write_lock: Arc::new(Mutex::new(())) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn sibling(&self, suffix: &str) -> PathBuf {
        PathBuf::from(format!("{}.{suffix}", self.path.display()))
    }

    fn io_error(&self, source: std::io::Error) -> LedgerError {
        LedgerError::Io { path: self.path.clone(), source }
    }

    /// Reads the ledger file. A missing or blank file is an empty ledger.
    async fn read_orders(&self) -> Result<Vec<Order>, LedgerError> {
        let data = match tokio::fs::read(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                trace!("📒️ No ledger at {} yet", self.path.display());
                return Ok(Vec::new());
            },
            Err(e) => return Err(self.io_error(e)),
        };
        if data.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        serde_json::from_slice(&data).map_err(|source| LedgerError::Malformed { path: self.path.clone(), source })
    }

    /// Loads the current ledger in preparation for an append.
    ///
    /// A corrupt ledger must not block new orders. The unreadable file is moved aside to
    /// `<ledger>.corrupt-<timestamp>` and the ledger restarts empty.
    async fn read_orders_for_append(&self) -> Result<Vec<Order>, LedgerError> {
        match self.read_orders().await {
            Err(LedgerError::Malformed { source, .. }) => {
                let backup = self.sibling(&format!("corrupt-{}", Utc::now().timestamp_millis()));
                tokio::fs::rename(&self.path, &backup).await.map_err(|e| self.io_error(e))?;
                warn!(
                    "📒️ The ledger at {} could not be parsed ({source}). It has been moved to {} and a new ledger \
                     has been started.",
                    self.path.display(),
                    backup.display()
                );
                Ok(Vec::new())
            },
            other => other,
        }
    }

    async fn write_orders(&self, orders: &[Order]) -> Result<(), LedgerError> {
        let data = serde_json::to_vec_pretty(orders)?;
        let tmp = self.sibling("tmp");
        tokio::fs::write(&tmp, &data).await.map_err(|e| self.io_error(e))?;
        if let Err(e) = tokio::fs::rename(&tmp, &self.path).await {
            if let Err(cleanup) = tokio::fs::remove_file(&tmp).await {
                warn!("📒️ Could not remove {}. {cleanup}", tmp.display());
            }
            return Err(self.io_error(e));
        }
        Ok(())
    }
}

impl OrderLedger for JsonFileLedger {
    type Error = LedgerError;

    async fn append(&self, order: Order) -> Result<(), Self::Error> {
        let _guard = self.write_lock.lock().await;
        let mut orders = self.read_orders_for_append().await?;
        orders.push(order);
        self.write_orders(&orders).await?;
        debug!("📒️ Order appended. {} orders on record in {}", orders.len(), self.path.display());
        Ok(())
    }

    async fn load(&self) -> Result<Vec<Order>, Self::Error> {
        self.read_orders().await
    }
}
