//! Shortfall reporting service
//! Builds replenishment reports from bins with a negative projected quantity

use std::sync::Arc;

use shared::{
    find_duplicates, IdentityTranslator, ItemImage, Notice, ReportDescriptor, ReportFilter,
    ReportKind, ReportOptions, ReportOutput, ReportRow, Translator,
};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::store::{ShortfallQuery, ShortfallRecord, ShortfallSource};

/// Reporting service
#[derive(Clone)]
pub struct ReportService {
    source: Arc<dyn ShortfallSource>,
    translator: Arc<dyn Translator>,
}

impl ReportService {
    pub fn new(source: Arc<dyn ShortfallSource>) -> Self {
        Self {
            source,
            translator: Arc::new(IdentityTranslator),
        }
    }

    pub fn with_translator(mut self, translator: Arc<dyn Translator>) -> Self {
        self.translator = translator;
        self
    }

    /// Catalogue of the built-in reports
    pub fn describe_reports(&self) -> Vec<ReportDescriptor> {
        ReportKind::ALL
            .into_iter()
            .map(|kind| ReportDescriptor::new(kind, self.translator.as_ref()))
            .collect()
    }

    /// Run one of the built-in reports
    pub async fn run_kind(&self, kind: ReportKind, filter: &ReportFilter) -> AppResult<ReportOutput> {
        self.run(&kind.options(), filter).await
    }

    /// Run a shortfall report.
    ///
    /// Rows come back sorted by projected quantity, most negative first. When
    /// the options ask for it, items sourced from several suppliers are
    /// listed in `duplicates` and summarised in `notice`; neither changes the
    /// rows.
    pub async fn run(&self, options: &ReportOptions, filter: &ReportFilter) -> AppResult<ReportOutput> {
        filter.validate()?;

        let query = ShortfallQuery::new(options, filter);
        tracing::debug!(?options, ?query, "Running shortfall report");

        let records = self.source.fetch_shortfalls(&query).await?;
        let rows: Vec<ReportRow> = records
            .into_iter()
            .map(|record| to_row(record, options.include_image))
            .collect();

        let duplicates = match options.duplicate_scope {
            Some(scope) => find_duplicates(&rows, scope),
            None => Vec::new(),
        };
        let notice = options.duplicate_scope.and_then(|scope| {
            Notice::duplicate_suppliers(&duplicates, scope, self.translator.as_ref())
        });

        if !duplicates.is_empty() {
            tracing::warn!(groups = duplicates.len(), "Items with multiple suppliers found");
        }
        tracing::info!(rows = rows.len(), "Shortfall report completed");

        Ok(ReportOutput {
            columns: options.columns(self.translator.as_ref()),
            rows,
            duplicates,
            notice,
        })
    }

    /// Export report rows as CSV, one column per report column
    pub fn export_to_csv(output: &ReportOutput) -> AppResult<String> {
        let mut wtr = csv::Writer::from_writer(vec![]);

        wtr.write_record(output.columns.iter().map(|c| c.label.as_str()))
            .map_err(|e| AppError::Internal(format!("CSV serialization error: {}", e)))?;

        for row in &output.rows {
            let cells = output
                .columns
                .iter()
                .map(|c| row.cell(&c.fieldname).unwrap_or_default());
            wtr.write_record(cells)
                .map_err(|e| AppError::Internal(format!("CSV serialization error: {}", e)))?;
        }

        let csv_data = String::from_utf8(
            wtr.into_inner()
                .map_err(|e| AppError::Internal(format!("CSV writer error: {}", e)))?,
        )
        .map_err(|e| AppError::Internal(format!("UTF-8 conversion error: {}", e)))?;
        Ok(csv_data)
    }
}

fn to_row(record: ShortfallRecord, include_image: bool) -> ReportRow {
    ReportRow {
        image: include_image.then(|| ItemImage::from_url(record.image.as_deref())),
        item_code: record.item_code,
        warehouse: record.warehouse,
        supplier: record.supplier,
        actual_qty: record.actual_qty,
        projected_qty: record.projected_qty,
        reserved_qty: record.reserved_qty,
        indented_qty: record.indented_qty,
        ordered_qty: record.ordered_qty,
    }
}
