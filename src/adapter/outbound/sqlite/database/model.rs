//! Database model types for Diesel ORM.

use diesel::prelude::*;
use diesel::sql_types::{Nullable, Text};

use super::schema::{product, product_store, store};

/// Database row for a store.
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = store)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_default_value = false)]
pub struct StoreRow {
    pub sid: String,
    pub location: String,
    pub mgrid: Option<String>,
}

/// Full replacement of a store's mutable columns.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = store)]
#[diesel(treat_none_as_null = true)]
pub struct StoreChangeset<'a> {
    pub location: &'a str,
    pub mgrid: Option<&'a str>,
}

/// Database row for a product.
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = product)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProductRow {
    pub pid: String,
    pub productdesc: String,
}

/// Database row for a pricing association. Price is stored as decimal text.
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = product_store)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PricingRecord {
    pub pid: String,
    pub sid: String,
    pub price: String,
}

/// One row of the product/pricing/store left join.
#[derive(QueryableByName, Debug, Clone)]
pub struct ListingRow {
    #[diesel(sql_type = Text)]
    pub pid: String,
    #[diesel(sql_type = Text)]
    pub productdesc: String,
    #[diesel(sql_type = Nullable<Text>)]
    pub sid: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    pub location: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    pub price: Option<String>,
}
