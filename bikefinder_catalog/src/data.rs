//! The built-in bike inventory.

use crate::item::Bike;

/// The static catalog. A real shop would load this from a database or
/// feed; ranking only ever needs an in-memory sequence, so the
/// inventory lives here as data. Declaration order doubles as the
/// tie-break order during ranking.
#[must_use]
pub fn catalog() -> Vec<Bike> {
    vec![
        Bike {
            id: "r1".to_string(),
            name: "Alpine Road 105".to_string(),
            brand: "Alpine".to_string(),
            category: "road".to_string(),
            frame: "carbon".to_string(),
            groupset: "Shimano 105".to_string(),
            wheel_size: "700c".to_string(),
            motor: None,
            battery_wh: None,
            weight_kg: 8.4,
            price_usd: 2499,
            suspension: "rigid".to_string(),
            brakes: "disc".to_string(),
            terrain: vec!["paved".to_string(), "urban".to_string()],
        },
        Bike {
            id: "m1".to_string(),
            name: "Peak Trail GX".to_string(),
            brand: "Peak".to_string(),
            category: "mountain".to_string(),
            frame: "aluminum".to_string(),
            groupset: "SRAM GX".to_string(),
            wheel_size: "29".to_string(),
            motor: None,
            battery_wh: None,
            weight_kg: 13.2,
            price_usd: 1999,
            suspension: "full".to_string(),
            brakes: "disc".to_string(),
            terrain: vec!["trail".to_string(), "gravel".to_string()],
        },
        Bike {
            id: "h1".to_string(),
            name: "Metro Hybrid 2".to_string(),
            brand: "Metro".to_string(),
            category: "hybrid".to_string(),
            frame: "aluminum".to_string(),
            groupset: "Shimano Altus".to_string(),
            wheel_size: "700c".to_string(),
            motor: None,
            battery_wh: None,
            weight_kg: 12.1,
            price_usd: 799,
            suspension: "front".to_string(),
            brakes: "disc".to_string(),
            terrain: vec![
                "urban".to_string(),
                "paved".to_string(),
                "gravel".to_string(),
            ],
        },
        Bike {
            id: "e1".to_string(),
            name: "Volt City E-Step".to_string(),
            brand: "Volt".to_string(),
            category: "e-bike".to_string(),
            frame: "aluminum".to_string(),
            groupset: "Shimano Deore".to_string(),
            wheel_size: "700c".to_string(),
            motor: Some("Bosch".to_string()),
            battery_wh: Some(500),
            weight_kg: 21.0,
            price_usd: 2899,
            suspension: "front".to_string(),
            brakes: "disc".to_string(),
            terrain: vec!["urban".to_string(), "paved".to_string()],
        },
        Bike {
            id: "g1".to_string(),
            name: "Terra Gravel Rival".to_string(),
            brand: "Terra".to_string(),
            category: "gravel".to_string(),
            frame: "carbon".to_string(),
            groupset: "SRAM Rival".to_string(),
            wheel_size: "700c".to_string(),
            motor: None,
            battery_wh: None,
            weight_kg: 9.2,
            price_usd: 2899,
            suspension: "rigid".to_string(),
            brakes: "disc".to_string(),
            terrain: vec!["gravel".to_string(), "paved".to_string()],
        },
        Bike {
            id: "c1".to_string(),
            name: "City Commuter 8".to_string(),
            brand: "Metro".to_string(),
            category: "city".to_string(),
            frame: "steel".to_string(),
            groupset: "MicroSHIFT Advent".to_string(),
            wheel_size: "700c".to_string(),
            motor: None,
            battery_wh: None,
            weight_kg: 13.8,
            price_usd: 599,
            suspension: "rigid".to_string(),
            brakes: "rim".to_string(),
            terrain: vec!["urban".to_string(), "paved".to_string()],
        },
        Bike {
            id: "m2".to_string(),
            name: "Peak Trail Deore".to_string(),
            brand: "Peak".to_string(),
            category: "mountain".to_string(),
            frame: "aluminum".to_string(),
            groupset: "Shimano Deore".to_string(),
            wheel_size: "27.5".to_string(),
            motor: None,
            battery_wh: None,
            weight_kg: 13.9,
            price_usd: 1299,
            suspension: "front".to_string(),
            brakes: "disc".to_string(),
            terrain: vec!["trail".to_string(), "gravel".to_string()],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_declaration_order() {
        let ids: Vec<String> = catalog().into_iter().map(|b| b.id).collect();
        assert_eq!(ids, ["r1", "m1", "h1", "e1", "g1", "c1", "m2"]);
    }

    #[test]
    fn test_exactly_one_motorized_entry() {
        let motorized: Vec<Bike> = catalog().into_iter().filter(|b| b.motor.is_some()).collect();
        assert_eq!(motorized.len(), 1);
        assert_eq!(motorized[0].id, "e1");
    }
}
