//! Postgres shortfall source

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::{ShortfallQuery, ShortfallRecord, ShortfallSource};
use crate::config::TablesConfig;
use crate::error::AppResult;

/// Reads shortfalls from the stock tables of a Postgres database
#[derive(Clone)]
pub struct PgShortfallSource {
    db: PgPool,
    tables: TablesConfig,
}

impl PgShortfallSource {
    pub fn new(db: PgPool, tables: TablesConfig) -> Self {
        Self { db, tables }
    }
}

#[async_trait]
impl ShortfallSource for PgShortfallSource {
    async fn fetch_shortfalls(&self, query: &ShortfallQuery) -> AppResult<Vec<ShortfallRecord>> {
        let mut builder = build_shortfall_query(&self.tables, query);
        tracing::debug!(sql = builder.sql(), "Fetching shortfalls");

        let records = builder
            .build_query_as::<ShortfallRecord>()
            .fetch_all(&self.db)
            .await?;

        Ok(records)
    }
}

/// Compile a read plan into a parameterised SELECT
pub fn build_shortfall_query(
    tables: &TablesConfig,
    query: &ShortfallQuery,
) -> QueryBuilder<'static, Postgres> {
    let image = if query.include_image {
        "item.image"
    } else {
        "NULL::text"
    };
    let supplier = if query.supplier_join {
        "item_supplier.supplier"
    } else {
        "NULL::text"
    };

    let mut builder = QueryBuilder::new(format!(
        "SELECT {image} AS image, bin.item_code, bin.warehouse, {supplier} AS supplier, \
         bin.actual_qty, bin.indented_qty, bin.reserved_qty, bin.ordered_qty, bin.projected_qty \
         FROM {bin} AS bin \
         INNER JOIN {item} AS item ON bin.item_code = item.name",
        bin = quote_ident(&tables.bin),
        item = quote_ident(&tables.item),
    ));

    if query.supplier_join {
        builder.push(format!(
            " LEFT JOIN {} AS item_supplier ON item.name = item_supplier.parent",
            quote_ident(&tables.item_supplier)
        ));
    }

    builder.push(" WHERE bin.projected_qty < 0");

    if let Some(item_code) = &query.item_code {
        builder.push(" AND bin.item_code = ").push_bind(item_code.clone());
    }
    if let Some(warehouse) = &query.warehouse {
        builder.push(" AND bin.warehouse = ").push_bind(warehouse.clone());
    }
    if let (true, Some(supplier)) = (query.supplier_join, &query.supplier) {
        builder
            .push(" AND item_supplier.supplier = ")
            .push_bind(supplier.clone());
    }

    // byte-order collation keeps fan-out rows in the same order as the
    // in-memory source
    builder.push(
        " ORDER BY bin.projected_qty ASC, bin.item_code COLLATE \"C\" ASC, \
         bin.warehouse COLLATE \"C\" ASC NULLS FIRST",
    );
    if query.supplier_join {
        builder.push(", item_supplier.supplier COLLATE \"C\" ASC NULLS FIRST");
    }

    builder
}

/// Quote a table name for interpolation into SQL
pub(crate) fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
