//! In-memory resource collections: one generic store per record type.

use crate::error::StoreError;
use crate::model::{IdStrategy, Record};
use crate::seed::Faker;
use serde_json::{Map, Value};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

struct Inner<R> {
    records: Vec<R>,
    next_seq: u64,
    faker: Faker,
}

impl<R: Record> Inner<R> {
    fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    /// Fresh id that no current record uses. Sequential ids are never handed out twice.
    fn next_id(&mut self) -> String {
        loop {
            let candidate = match R::ID_STRATEGY {
                IdStrategy::Sequential => {
                    let n = self.next_seq;
                    self.next_seq += 1;
                    n.to_string()
                }
                IdStrategy::Uuid => self.faker.uuid(),
            };
            if self.position(&candidate).is_none() {
                return candidate;
            }
        }
    }
}

/// Ordered, process-local collection of `R` records keyed by id.
///
/// Every operation takes the lock once, so mutations never interleave.
/// Listing copies the records before its artificial delay, so callers see the
/// collection as it was when they asked.
pub struct ResourceStore<R> {
    inner: RwLock<Inner<R>>,
    list_latency: Duration,
}

impl<R: Record> ResourceStore<R> {
    /// New collection holding `count` generated records.
    pub fn seeded(count: usize, faker: Faker, list_latency: Duration) -> Self {
        let mut inner = Inner {
            records: Vec::with_capacity(count),
            next_seq: 1,
            faker,
        };
        for _ in 0..count {
            let mut record = R::generate(&mut inner.faker);
            record.set_id(inner.next_id());
            inner.records.push(record);
        }
        tracing::debug!(kind = R::KIND, count, "collection seeded");
        Self {
            inner: RwLock::new(inner),
            list_latency,
        }
    }

    /// New collection from fixed records that already carry ids.
    /// The sequential counter resumes after the highest numeric id.
    pub fn with_records(records: Vec<R>, faker: Faker, list_latency: Duration) -> Self {
        let next_seq = records
            .iter()
            .filter_map(|r| r.id().parse::<u64>().ok())
            .max()
            .map_or(1, |n| n + 1);
        tracing::debug!(kind = R::KIND, count = records.len(), "collection loaded");
        Self {
            inner: RwLock::new(Inner {
                records,
                next_seq,
                faker,
            }),
            list_latency,
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Inner<R>>, StoreError> {
        self.inner.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Inner<R>>, StoreError> {
        self.inner.write().map_err(|_| StoreError::LockPoisoned)
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.read()?.records.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }

    /// All records in insertion order, after the configured listing delay.
    pub async fn list_all(&self) -> Result<Vec<R>, StoreError> {
        let snapshot = self.read()?.records.clone();
        if !self.list_latency.is_zero() {
            tokio::time::sleep(self.list_latency).await;
        }
        Ok(snapshot)
    }

    pub fn find_by_id(&self, id: &str) -> Result<Option<R>, StoreError> {
        let inner = self.read()?;
        Ok(inner.position(id).map(|i| inner.records[i].clone()))
    }

    /// Records whose foreign-key field `field` equals `value`, in insertion order.
    pub fn find_by_foreign_key(&self, field: &str, value: &str) -> Result<Vec<R>, StoreError> {
        let inner = self.read()?;
        Ok(inner
            .records
            .iter()
            .filter(|r| r.foreign_key(field) == Some(value))
            .cloned()
            .collect())
    }

    /// Append a new record. Any id on `record` is replaced with a fresh one.
    pub fn create(&self, mut record: R) -> Result<R, StoreError> {
        let mut guard = self.write()?;
        let inner = &mut *guard;
        record.fill_defaults(&mut inner.faker);
        record.set_id(inner.next_id());
        inner.records.push(record.clone());
        tracing::debug!(kind = R::KIND, id = record.id(), "record created");
        Ok(record)
    }

    /// Shallow-merge `changes` over the stored record. An `id` key in `changes` is ignored.
    pub fn update(&self, id: &str, changes: Map<String, Value>) -> Result<R, StoreError> {
        let mut inner = self.write()?;
        let index = inner
            .position(id)
            .ok_or(StoreError::NotFound { kind: R::KIND })?;
        let merged = merge(&inner.records[index], changes)?;
        inner.records[index] = merged.clone();
        tracing::debug!(kind = R::KIND, id, "record updated");
        Ok(merged)
    }

    /// Remove and return the record. Remaining records keep their order.
    pub fn delete(&self, id: &str) -> Result<R, StoreError> {
        let mut inner = self.write()?;
        let index = inner
            .position(id)
            .ok_or(StoreError::NotFound { kind: R::KIND })?;
        let removed = inner.records.remove(index);
        tracing::debug!(kind = R::KIND, id, "record deleted");
        Ok(removed)
    }
}

fn merge<R: Record>(record: &R, changes: Map<String, Value>) -> Result<R, StoreError> {
    let mut value = serde_json::to_value(record)?;
    if let Value::Object(fields) = &mut value {
        for (key, v) in changes {
            if key != "id" {
                fields.insert(key, v);
            }
        }
    }
    let mut merged: R = serde_json::from_value(value)?;
    merged.set_id(record.id().to_string());
    Ok(merged)
}
