//! Record sinks.
//!
//! A sink receives every enabled, fully enriched record exactly once. The
//! logger ignores its result beyond reporting it on the crate's own
//! diagnostics.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use opentelemetry::Context;

use crate::error::LogError;
use crate::record::Record;

/// Underlying record handler wrapped by the logger.
pub trait Sink: Send + Sync {
    fn handle(&self, ctx: Option<&Context>, record: Record) -> Result<(), LogError>;
}

/// Writes one JSON object per line.
pub struct JsonSink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Consume the sink and return the writer.
    pub fn into_inner(self) -> Result<W, LogError> {
        self.writer
            .into_inner()
            .map_err(|_| LogError::Sink("writer lock poisoned".to_string()))
    }
}

impl JsonSink<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write + Send> Sink for JsonSink<W> {
    fn handle(&self, _ctx: Option<&Context>, record: Record) -> Result<(), LogError> {
        // Encode outside the lock so only the write itself is serialized.
        let mut line = serde_json::to_vec(&record)?;
        line.push(b'\n');

        let mut writer = self
            .writer
            .lock()
            .map_err(|_| LogError::Sink("writer lock poisoned".to_string()))?;
        writer.write_all(&line)?;
        writer.flush()?;
        Ok(())
    }
}

/// Keeps every record in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<Record>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    // A panic elsewhere never loses records already captured.
    fn buffer(&self) -> MutexGuard<'_, Vec<Record>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the records handled so far.
    pub fn records(&self) -> Vec<Record> {
        self.buffer().clone()
    }

    pub fn len(&self) -> usize {
        self.buffer().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.buffer().clear();
    }
}

impl Sink for MemorySink {
    fn handle(&self, _ctx: Option<&Context>, record: Record) -> Result<(), LogError> {
        self.buffer().push(record);
        Ok(())
    }
}
