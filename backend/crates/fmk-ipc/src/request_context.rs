use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use uuid::Uuid;

static REQUEST_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Request context for correlation and timing
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Unique correlation ID for this request
    pub correlation_id: String,
    /// Sequence number within this process
    pub request_seq: u64,
    /// Operation name from the request
    pub operation: &'static str,
    /// Start time for latency tracking
    pub started_at: Instant,
}

impl RequestContext {
    pub fn new(operation: &'static str) -> Self {
        let request_seq = REQUEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let correlation_id = format!("req-{}-{}", request_seq, Uuid::new_v4().as_simple());

        Self {
            correlation_id,
            request_seq,
            operation,
            started_at: Instant::now(),
        }
    }

    /// Get elapsed time since request started
    pub fn elapsed_ms(&self) -> u64 {
        self.started_at.elapsed().as_millis() as u64
    }

    /// Create a log prefix for structured logging
    pub fn log_prefix(&self) -> String {
        format!("[req={} op={}]", self.request_seq, self.operation)
    }
}
