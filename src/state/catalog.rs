/// The juice menu shown on the menu page

use super::data::{MenuSection, Product};

/// Default menu, grouped by section
pub fn default_menu() -> Vec<MenuSection> {
    vec![
        MenuSection {
            title: "Fresh Juices".to_string(),
            products: vec![
                Product::new("Mango", 50.0, "assets/images/mango.jpg"),
                Product::new("Orange", 40.0, "assets/images/orange.jpg"),
                Product::new("Watermelon", 45.0, "assets/images/watermelon.jpg"),
                Product::new("Pineapple", 55.0, "assets/images/pineapple.jpg"),
            ],
        },
        MenuSection {
            title: "Shakes & Smoothies".to_string(),
            products: vec![
                Product::new("Banana Shake", 60.0, "assets/images/banana-shake.jpg"),
                Product::new("Strawberry Smoothie", 80.0, "assets/images/strawberry-smoothie.jpg"),
                Product::new("Chikoo Shake", 65.0, "assets/images/chikoo-shake.jpg"),
            ],
        },
        MenuSection {
            title: "Coolers".to_string(),
            products: vec![
                Product::new("Mint Mojito", 70.0, "assets/images/mint-mojito.jpg"),
                Product::new("Lemon Soda", 35.0, "assets/images/lemon-soda.jpg"),
                Product::new("Blue Lagoon", 75.0, "assets/images/blue-lagoon.jpg"),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_product_names_are_unique() {
        let menu = default_menu();
        let names: Vec<&str> = menu
            .iter()
            .flat_map(|s| s.products.iter().map(|p| p.name.as_str()))
            .collect();
        let unique: HashSet<&str> = names.iter().copied().collect();
        assert_eq!(names.len(), unique.len());
    }

    #[test]
    fn test_prices_are_non_negative() {
        assert!(default_menu()
            .iter()
            .flat_map(|s| &s.products)
            .all(|p| p.price >= 0.0));
    }
}
