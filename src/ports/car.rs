pub trait Car: Send + Sync {
    /// Assembles the car and returns the announcement line for the showroom.
    fn assemble(&self) -> String;
}
