use crate::Vehicle;

pub trait AssemblyStation: Send + Sync {
    type Vehicle: Vehicle;

    /// Hook supplying the raw, unfinished vehicle. The fixed commissioning
    /// step order lives in [`crate::factories::commission`] and is not
    /// overridable from here.
    fn fabricate(&self) -> Self::Vehicle;
}
