pub trait Vehicle: Send + Sync {
    /// Model designation stamped on the frame. A blank designation fails
    /// commissioning inspection.
    fn model(&self) -> &str;

    /// Runs the finishing work and returns the build announcement line.
    fn build(&self) -> String;
}
