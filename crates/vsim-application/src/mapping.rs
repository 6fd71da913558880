//! Row Mapper
//!
//! Converts rows returned by the executor into domain values. Rows are read
//! by column name; a missing column, a value of the wrong type, or a value
//! that cannot be decoded is an [`Error::Mapping`], i.e. a defect in the
//! statement or the schema rather than in the caller's input.

use vsim_domain::constants::{
    COL_CATEGORY, COL_CREATED_AT, COL_DISTANCE, COL_EMBEDDING, COL_ID, COL_ITEM_COUNT, COL_NAME,
    COL_PRICE,
};
use vsim_domain::entities::Item;
use vsim_domain::error::{Error, Result};
use vsim_domain::ports::ResultRow;
use vsim_domain::value_objects::{
    CategoryCount, DistanceMetric, ItemWithAllDistances, ItemWithDistance, Price,
};

/// Map the item columns of a row
pub fn map_item(row: &ResultRow) -> Result<Item> {
    let id = row.get_i64(COL_ID)?;

    let price = row
        .get_opt_str(COL_PRICE)?
        .map(str::parse::<Price>)
        .transpose()
        .map_err(|e| Error::mapping(format!("item {id}: column '{COL_PRICE}': {e}")))?;

    let embedding = row
        .get_opt_vector(COL_EMBEDDING)
        .map_err(|e| Error::mapping(format!("item {id}: {e}")))?;

    Ok(Item {
        id: Some(id),
        name: row.get_str(COL_NAME)?.to_string(),
        category: row.get_opt_str(COL_CATEGORY)?.map(str::to_string),
        price,
        embedding,
        created_at: row.get_opt_timestamp(COL_CREATED_AT)?,
    })
}

/// Map the item columns plus the computed `distance` column
pub fn map_item_with_distance(row: &ResultRow) -> Result<ItemWithDistance> {
    Ok(ItemWithDistance {
        item: map_item(row)?,
        distance: row.get_f64(COL_DISTANCE)?,
    })
}

/// Map the item columns plus the four per-metric distance columns
pub fn map_item_with_all_distances(row: &ResultRow) -> Result<ItemWithAllDistances> {
    Ok(ItemWithAllDistances {
        item: map_item(row)?,
        l2: row.get_f64(DistanceMetric::L2.column_alias())?,
        cosine: row.get_f64(DistanceMetric::Cosine.column_alias())?,
        neg_inner_product: row.get_f64(DistanceMetric::InnerProduct.column_alias())?,
        l1: row.get_f64(DistanceMetric::L1.column_alias())?,
    })
}

/// Map a category statistics row
pub fn map_category_count(row: &ResultRow) -> Result<CategoryCount> {
    Ok(CategoryCount {
        category: row.get_opt_str(COL_CATEGORY)?.map(str::to_string),
        count: row.get_i64(COL_ITEM_COUNT)?,
    })
}

/// Map every row with `mapper`, stopping at the first failure
pub fn map_rows<T>(rows: &[ResultRow], mapper: fn(&ResultRow) -> Result<T>) -> Result<Vec<T>> {
    rows.iter().map(mapper).collect()
}
