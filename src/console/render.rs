//! Text rendering for the console: the product table and the staged form.

use crate::model::{DraftField, Product};
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{CellAlignment, ContentArrangement, Table};

use super::session::{Mode, Session};

pub const EMPTY_TABLE: &str = "No products found.";

/// Formats a price the way the table shows it: dollar sign, two decimals.
pub fn price(value: f64) -> String {
    format!("${value:.2}")
}

/// The product table in registry order, or [`EMPTY_TABLE`] when nothing matches.
/// Either way the count follows.
pub fn product_table(products: &[Product]) -> String {
    if products.is_empty() {
        return format!("{EMPTY_TABLE}\nTotal: 0");
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["ID", "Name", "Description", "Price", "Quantity"]);

    for product in products {
        table.add_row(vec![
            product.id.to_string(),
            product.name.clone(),
            product.description.clone(),
            price(product.price),
            product.quantity.to_string(),
        ]);
    }

    for index in [0, 3, 4] {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    format!("{table}\nTotal: {}", products.len())
}

/// The staged inputs with their mode heading.
pub fn form(session: &Session) -> String {
    let heading = match session.mode() {
        Mode::Adding => "Add Product".to_string(),
        Mode::Editing(id) => format!("Edit Product {id}"),
    };

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED).set_header(vec!["Field", "Value"]);
    for field in DraftField::ALL {
        let mut label = field.label().to_string();
        if DraftField::REQUIRED.contains(&field) {
            label.push('*');
        }
        let mut value = session.draft().field(field).to_string();
        if field == DraftField::Id && matches!(session.mode(), Mode::Editing(_)) {
            value.push_str(" (locked)");
        }
        table.add_row(vec![label, value]);
    }

    let query = match session.query() {
        "" => String::new(),
        q => format!("\nSearch: {q:?}"),
    };
    format!("{heading}\n{table}{query}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_has_two_decimals() {
        assert_eq!(price(10.0), "$10.00");
        assert_eq!(price(699.99), "$699.99");
        assert_eq!(price(0.0), "$0.00");
    }

    #[test]
    fn empty_table_has_a_message() {
        assert_eq!(product_table(&[]), "No products found.\nTotal: 0");
    }

    #[test]
    fn table_lists_products_with_total() {
        let products = vec![
            Product::new(1, "Phone", "A smartphone", 699.99, 50),
            Product::new(4, "Pen", "Ballpoint", 10.0, 200),
        ];
        let rendered = product_table(&products);

        assert!(rendered.contains("Description"));
        assert!(rendered.contains("$699.99"));
        assert!(rendered.contains("$10.00"));
        assert!(rendered.find("Phone") < rendered.find("Pen"));
        assert!(rendered.ends_with("Total: 2"));
    }

    #[test]
    fn form_marks_required_fields_and_locked_id() {
        let session = Session::new();
        let rendered = form(&session);
        assert!(rendered.starts_with("Add Product"));
        assert!(rendered.contains("Name*"));
        assert!(!rendered.contains("(locked)"));
    }
}
