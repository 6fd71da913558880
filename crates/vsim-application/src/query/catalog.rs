//! Item catalog statements

use super::{ITEM_SELECT_LIST, numeric_param, vector_param};
use vsim_domain::constants::{EMBEDDING_DIMENSIONS, ITEMS_TABLE};
use vsim_domain::entities::Item;
use vsim_domain::ports::Statement;
use vsim_domain::value_objects::Price;

/// Statements creating the pgvector extension and the items table
pub fn create_schema() -> [Statement; 2] {
    [
        Statement::new("CREATE EXTENSION IF NOT EXISTS vector"),
        Statement::new(format!(
            "CREATE TABLE IF NOT EXISTS {ITEMS_TABLE} (
    id BIGINT GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY,
    name TEXT NOT NULL,
    category TEXT,
    price NUMERIC(10, 2),
    embedding vector({EMBEDDING_DIMENSIONS}),
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
)"
        )),
    ]
}

/// One item by id
pub fn find_by_id(id: i64) -> Statement {
    Statement::new(format!(
        "SELECT {ITEM_SELECT_LIST}\nFROM {ITEMS_TABLE}\nWHERE id = $1"
    ))
    .bind(id)
}

/// Every item, by name
pub fn find_all() -> Statement {
    Statement::new(format!(
        "SELECT {ITEM_SELECT_LIST}\nFROM {ITEMS_TABLE}\nORDER BY name"
    ))
}

/// Items of one category, by name
pub fn find_by_category(category: &str) -> Statement {
    Statement::new(format!(
        "SELECT {ITEM_SELECT_LIST}\nFROM {ITEMS_TABLE}\nWHERE category = $1::text\nORDER BY name"
    ))
    .bind(category)
}

/// Items priced strictly below `max_price`, by name
pub fn find_under_price(max_price: Price) -> Statement {
    Statement::new(format!(
        "SELECT {ITEM_SELECT_LIST}\nFROM {ITEMS_TABLE}\nWHERE price < {}\nORDER BY name",
        numeric_param(1)
    ))
    .bind(max_price.to_string())
}

/// Item count per category
pub fn count_by_category() -> Statement {
    Statement::new(format!(
        "SELECT category, COUNT(*) AS item_count\nFROM {ITEMS_TABLE}\nGROUP BY category\nORDER BY category"
    ))
}

/// Insert `item`, returning the stored row
pub fn insert(item: &Item) -> Statement {
    let stmt = Statement::new(format!(
        "INSERT INTO {ITEMS_TABLE} (name, category, price, embedding)\nVALUES ($1::text, $2::text, {}, {})\nRETURNING {ITEM_SELECT_LIST}",
        numeric_param(3),
        vector_param(4)
    ));
    bind_columns(stmt, item)
}

/// Update `item` by `id`, returning the stored row; `created_at` is untouched
pub fn update(id: i64, item: &Item) -> Statement {
    let stmt = Statement::new(format!(
        "UPDATE {ITEMS_TABLE}\nSET name = $1::text,\n    category = $2::text,\n    price = {},\n    embedding = {}\nWHERE id = $5\nRETURNING {ITEM_SELECT_LIST}",
        numeric_param(3),
        vector_param(4)
    ));
    bind_columns(stmt, item).bind(id)
}

/// Delete one item by id
pub fn delete(id: i64) -> Statement {
    Statement::new(format!("DELETE FROM {ITEMS_TABLE} WHERE id = $1")).bind(id)
}

fn bind_columns(stmt: Statement, item: &Item) -> Statement {
    stmt.bind(item.name.as_str())
        .bind(item.category.clone())
        .bind(item.price.map(|p| p.to_string()))
        .bind(item.embedding.clone())
}
