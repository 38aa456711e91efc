//! Restaurant details.

use serde::{Deserialize, Serialize};

/// The restaurant whose details page hosts the reviews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
    /// Cuisine label, e.g. "Indien".
    pub cuisine: String,
    /// Opening hours as displayed.
    pub hours: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub phone_number: String,
    pub website: String,
    #[serde(default)]
    pub dine_in: bool,
    #[serde(default)]
    pub take_away: bool,
}

impl Restaurant {
    /// Service options offered, in display order.
    pub fn services(&self) -> Vec<&'static str> {
        let mut services = Vec::new();
        if self.dine_in {
            services.push("Dine in");
        }
        if self.take_away {
            services.push("Take away");
        }
        services
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restaurant(dine_in: bool, take_away: bool) -> Restaurant {
        Restaurant {
            name: "Test".into(),
            cuisine: "Indien".into(),
            hours: "11h30 - 14h30".into(),
            address: "1 rue de Test".into(),
            latitude: 0.0,
            longitude: 0.0,
            phone_number: "+33 1 00 00 00 00".into(),
            website: "http://example.com".into(),
            dine_in,
            take_away,
        }
    }

    #[test]
    fn test_services() {
        assert_eq!(restaurant(true, true).services(), vec!["Dine in", "Take away"]);
        assert_eq!(restaurant(false, true).services(), vec!["Take away"]);
        assert!(restaurant(false, false).services().is_empty());
    }
}
