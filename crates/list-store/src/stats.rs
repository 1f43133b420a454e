//! Aggregate statistics over the list.

use crate::item::Item;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ListStats {
    pub total_items: usize,
    pub completed_items: usize,
    /// Sum of `price * quantity` over every item, completed or not
    pub total_price: f64,
}

impl ListStats {
    pub fn from_items(items: &[Item]) -> Self {
        Self {
            total_items: items.len(),
            completed_items: items.iter().filter(|item| item.completed()).count(),
            total_price: items.iter().map(Item::subtotal).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stats() {
        assert_eq!(ListStats::from_items(&[]), ListStats::default());
    }

    #[test]
    fn test_mixed_completion() {
        let mut rice = Item::new("Rice", 10.0, 1).unwrap();
        rice.toggle();
        let beans = Item::new("Beans", 5.0, 2).unwrap();

        let stats = ListStats::from_items(&[rice, beans]);
        assert_eq!(
            stats,
            ListStats {
                total_items: 2,
                completed_items: 1,
                total_price: 20.0,
            }
        );
    }
}
