pub trait Bike: Send + Sync {
    /// Assembles the bike and returns the announcement line for the showroom.
    fn assemble(&self) -> String;
}
