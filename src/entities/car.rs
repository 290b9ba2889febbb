use crate::Car;

/// Showroom car of the modern family.
#[derive(Debug, Clone)]
pub struct Missubibi;

impl Car for Missubibi {
    fn assemble(&self) -> String {
        "Assembled a car called missubibi".to_string()
    }
}

/// Showroom car of the offroad family.
#[derive(Debug, Clone)]
pub struct Onissan;

impl Car for Onissan {
    fn assemble(&self) -> String {
        "Assembled a car called onissan".to_string()
    }
}
