use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::{SystemTime, UNIX_EPOCH},
};

/// Generates `<prefix>_<millis>_<seq>` identifiers.
///
/// The original scheme was the bare millisecond timestamp, which collides
/// when two creations land in the same clock tick. The process-wide
/// sequence suffix makes ids distinct even then; the timestamp prefix is
/// kept so ids still sort roughly by creation time.
#[derive(Debug, Default)]
pub struct IdGenerator {
    seq: AtomicU64,
}

impl IdGenerator {
    pub fn next(&self, prefix: &str) -> String {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let seq = self.seq.fetch_add(1, Ordering::Relaxed);
        format!("{prefix}_{millis}_{seq}")
    }
}
