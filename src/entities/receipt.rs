use chrono::{DateTime, Utc};
use crate::registry::SerialNumber;
use crate::{OwnerProfile, VehicleFamily};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReceiptId(Uuid);

impl ReceiptId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ReceiptId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Record of one assembly run: which family was toured, the serial issued
/// by the works registry, the announcement lines produced, and the owner
/// the vehicles were registered to, if any.
#[derive(Serialize, Debug, Clone)]
pub struct AssemblyReceipt {
    id: ReceiptId,
    family: VehicleFamily,
    serial: SerialNumber,
    lines: Vec<String>,
    owner: Option<OwnerProfile>,
    assembled_at: DateTime<Utc>,
}

impl AssemblyReceipt {
    pub fn new(
        family: VehicleFamily,
        serial: SerialNumber,
        lines: Vec<String>,
        owner: Option<OwnerProfile>,
    ) -> Self {
        Self {
            id: ReceiptId::new(),
            family,
            serial,
            lines,
            owner,
            assembled_at: Utc::now(),
        }
    }

    /// Returns the receipt ID.
    pub fn id(&self) -> &ReceiptId {
        &self.id
    }

    /// Returns the family that was assembled.
    pub fn family(&self) -> VehicleFamily {
        self.family
    }

    /// Returns the serial issued for this run.
    pub fn serial(&self) -> SerialNumber {
        self.serial
    }

    /// Returns the announcement lines in production order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns the registered owner, if one was attached.
    pub fn owner(&self) -> Option<&OwnerProfile> {
        self.owner.as_ref()
    }

    /// Returns the assembly timestamp.
    pub fn assembled_at(&self) -> DateTime<Utc> {
        self.assembled_at
    }
}

impl PartialEq for AssemblyReceipt {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for AssemblyReceipt {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::WorksRegistry;

    #[test]
    fn test_new_receipt_is_stamped() {
        let serial = WorksRegistry::instance().issue_serial();

        let receipt = AssemblyReceipt::new(VehicleFamily::Modern, serial, Vec::new(), None);

        assert_eq!(receipt.family(), VehicleFamily::Modern);
        assert_eq!(receipt.serial(), serial);
        assert!(receipt.assembled_at() <= Utc::now());
        assert_eq!(receipt.id().to_string(), receipt.id().as_uuid().to_string());
    }

    #[test]
    fn test_receipts_with_equal_fields_are_still_distinct() {
        let serial = WorksRegistry::instance().issue_serial();
        let lines = vec!["Assembled a car called onissan".to_string()];

        let a = AssemblyReceipt::new(VehicleFamily::Offroad, serial, lines.clone(), None);
        let b = AssemblyReceipt::new(VehicleFamily::Offroad, serial, lines, None);

        assert_ne!(a, b);
        assert_ne!(a.id().as_uuid(), b.id().as_uuid());
    }
}
