//! View Renderer
//!
//! Pure projection of the list into display rows and stat lines. Holds
//! nothing but formatting options; user text leaves here already escaped.

use crate::config::DisplayConfig;
use crate::item::Item;
use crate::stats::ListStats;

/// What the list container shows
#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    Empty(EmptyPlaceholder),
    Rows(Vec<ItemRow>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyPlaceholder {
    pub title: &'static str,
    pub hint: &'static str,
}

const EMPTY: EmptyPlaceholder = EmptyPlaceholder {
    title: "No items yet",
    hint: "Add your first item!",
};

/// Affordances offered on every row, routed back to the store by item id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    Delete,
    Toggle,
}

/// One display row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRow {
    pub id: String,
    /// Item name, HTML-escaped
    pub name_html: String,
    pub price: String,
    pub quantity: String,
    pub subtotal: String,
    pub completed: bool,
    pub actions: [RowAction; 3],
}

impl ItemRow {
    pub fn css_class(&self) -> &'static str {
        if self.completed {
            "grocery-item completed"
        } else {
            "grocery-item"
        }
    }
}

/// Formatted stat lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsView {
    pub item_count: String,
    pub total_price: String,
}

#[derive(Debug, Clone, Default)]
pub struct ViewRenderer {
    config: DisplayConfig,
}

impl ViewRenderer {
    pub fn new(config: DisplayConfig) -> Self {
        Self { config }
    }

    pub fn render(&self, items: &[Item]) -> ListView {
        if items.is_empty() {
            return ListView::Empty(EMPTY);
        }
        ListView::Rows(items.iter().map(|item| self.row(item)).collect())
    }

    pub fn render_stats(&self, stats: &ListStats) -> StatsView {
        StatsView {
            item_count: format!("{} items ({} done)", stats.total_items, stats.completed_items),
            total_price: format!("Total: {}", self.money(stats.total_price)),
        }
    }

    fn row(&self, item: &Item) -> ItemRow {
        ItemRow {
            id: item.id().to_string(),
            name_html: escape_html(item.name()),
            price: self.money(item.price()),
            quantity: item.quantity().to_string(),
            subtotal: self.money(item.subtotal()),
            completed: item.completed(),
            actions: [RowAction::Edit, RowAction::Delete, RowAction::Toggle],
        }
    }

    fn money(&self, amount: f64) -> String {
        format!("{}{:.2}", self.config.currency_symbol, amount)
    }
}

/// Escape text for insertion into HTML, both as content and inside quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_placeholder() {
        let view = ViewRenderer::default().render(&[]);
        assert_eq!(view, ListView::Empty(EMPTY));
    }

    #[test]
    fn test_rows_follow_list_order() {
        let mut rice = Item::new("Rice", 10.0, 1).unwrap();
        rice.toggle();
        let milk = Item::new("Milk", 2.5, 3).unwrap();

        let ListView::Rows(rows) = ViewRenderer::default().render(&[rice.clone(), milk]) else {
            panic!("expected rows");
        };
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, rice.id());
        assert!(rows[0].completed);
        assert_eq!(rows[0].css_class(), "grocery-item completed");
        assert_eq!(rows[1].name_html, "Milk");
        assert_eq!(rows[1].price, "฿2.50");
        assert_eq!(rows[1].quantity, "3");
        assert_eq!(rows[1].subtotal, "฿7.50");
        assert_eq!(rows[1].css_class(), "grocery-item");
    }

    #[test]
    fn test_names_are_escaped() {
        let item = Item::new("<img src=x onerror=\"alert('x')\"> & co", 1.0, 1).unwrap();
        let ListView::Rows(rows) = ViewRenderer::default().render(&[item]) else {
            panic!("expected rows");
        };
        assert_eq!(
            rows[0].name_html,
            "&lt;img src=x onerror=&quot;alert(&#39;x&#39;)&quot;&gt; &amp; co"
        );
    }

    #[test]
    fn test_render_stats() {
        let renderer = ViewRenderer::new(DisplayConfig {
            currency_symbol: "$".to_string(),
        });
        let stats = ListStats {
            total_items: 2,
            completed_items: 1,
            total_price: 20.0,
        };
        assert_eq!(
            renderer.render_stats(&stats),
            StatsView {
                item_count: "2 items (1 done)".to_string(),
                total_price: "Total: $20.00".to_string(),
            }
        );
    }
}
