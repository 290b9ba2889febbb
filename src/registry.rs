use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

/// Serial issued by the works registry, unique within the process.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SerialNumber(u64);

impl SerialNumber {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MW-{:06}", self.0)
    }
}

/// The works registry: one instance per process, opened lazily on first
/// access and alive until process exit.
///
/// The only way in is [`WorksRegistry::instance`]. The constructor is
/// private and the backing storage lives inside the accessor, so no caller
/// can create a competing instance. Initialization happens exactly once
/// even when first access races across threads; every later call is a
/// single atomic load returning the same reference, with no locking.
pub struct WorksRegistry {
    opened_at: DateTime<Utc>,
    next_serial: AtomicU64,
}

impl WorksRegistry {
    fn open() -> Self {
        info!("works registry opened");
        Self {
            opened_at: Utc::now(),
            next_serial: AtomicU64::new(0),
        }
    }

    /// Returns the process-wide registry, opening it on first call.
    pub fn instance() -> &'static WorksRegistry {
        static REGISTRY: OnceLock<WorksRegistry> = OnceLock::new();
        REGISTRY.get_or_init(WorksRegistry::open)
    }

    /// Returns when this process opened the registry.
    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Issues the next serial, starting from `MW-000001`.
    ///
    /// Serials only have to be unique and increasing; no other memory is
    /// ordered by them, so a relaxed counter is sufficient.
    pub fn issue_serial(&self) -> SerialNumber {
        SerialNumber(self.next_serial.fetch_add(1, Ordering::Relaxed) + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::thread;

    #[test]
    fn test_instance_is_referentially_stable() {
        let first = WorksRegistry::instance();
        let second = WorksRegistry::instance();

        assert!(std::ptr::eq(first, second));
        assert_eq!(first.opened_at(), second.opened_at());
    }

    #[test]
    fn test_concurrent_access_yields_one_instance() {
        let first = WorksRegistry::instance();

        let handles: Vec<_> = (0..8)
            .map(|_| thread::spawn(move || std::ptr::eq(WorksRegistry::instance(), first)))
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }

    #[test]
    fn test_concurrent_serials_are_unique() {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                thread::spawn(|| {
                    let registry = WorksRegistry::instance();
                    (0..100).map(|_| registry.issue_serial()).collect::<Vec<_>>()
                })
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for serial in handle.join().unwrap() {
                assert!(seen.insert(serial), "serial {} issued twice", serial);
            }
        }
        assert_eq!(seen.len(), 800);
    }

    #[test]
    fn test_serials_increase() {
        let registry = WorksRegistry::instance();
        let first = registry.issue_serial();
        let second = registry.issue_serial();

        // Other tests issue serials in parallel, so only relative order on
        // this thread is guaranteed.
        assert!(second > first);
        assert!(first.value() >= 1);
    }

    #[test]
    fn test_serial_display_is_zero_padded() {
        assert_eq!(SerialNumber(42).to_string(), "MW-000042");
        assert_eq!(SerialNumber(1_000_000).to_string(), "MW-1000000");
    }
}
