use crate::Vehicle;
use crate::registry::SerialNumber;

/// Outcome of one commissioning run: the finished vehicle together with the
/// build line it produced and the serial stamped on it.
#[derive(Debug, Clone)]
pub struct Commissioned<V: Vehicle> {
    pub vehicle: V,
    pub build_line: String,
    pub serial: SerialNumber,
}
