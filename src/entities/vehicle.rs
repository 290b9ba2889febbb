use crate::Vehicle;

/// Workhorse car commissioned through the assembly line.
#[derive(Debug, Clone)]
pub struct Sedan;

impl Vehicle for Sedan {
    fn model(&self) -> &str {
        "sedan"
    }

    fn build(&self) -> String {
        "Building sedan".to_string()
    }
}

/// Two-wheeler commissioned through the assembly line.
#[derive(Debug, Clone)]
pub struct Motorcycle;

impl Vehicle for Motorcycle {
    fn model(&self) -> &str {
        "motorcycle"
    }

    fn build(&self) -> String {
        "Building motorcycle".to_string()
    }
}
