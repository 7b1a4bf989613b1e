//! The example catalog every fresh registry starts from.

use crate::model::ProductDraft;

/// The five seeded records, in display order.
pub fn catalog() -> Vec<ProductDraft> {
    vec![
        ProductDraft::new("1", "Phone", "699.99")
            .with_description("A smartphone")
            .with_quantity("50"),
        ProductDraft::new("2", "Laptop", "999.99")
            .with_description("A powerful laptop")
            .with_quantity("30"),
        ProductDraft::new("3", "Table", "199.99")
            .with_description("A wooden table")
            .with_quantity("20"),
        ProductDraft::new("4", "Pen", "10.00")
            .with_description("A ballpoint pen")
            .with_quantity("20"),
        ProductDraft::new("5", "Asus Laptop", "999.00")
            .with_description("Budget Laptop")
            .with_quantity("12"),
    ]
}
