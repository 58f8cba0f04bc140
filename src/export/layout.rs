//! Workbook-independent layout of the report sheet
//!
//! Every cell value and style is decided here, so the layout can be checked
//! without opening a spreadsheet. Columns A-C hold costs, E-G revenues, with
//! D as a gutter.

use crate::display::format::format_date;
use crate::models::{CostRecord, LedgerRecord, RevenueRecord};
use crate::reports::monthly::format_rate;
use crate::services::Totals;

use super::ExportOptions;

pub const SHEET_NAME: &str = "Báo cáo";
pub const TITLE: &str = "Báo cáo doanh thu & chi phí";
pub const PERIOD_LABEL: &str = "Kỳ báo cáo";
pub const COSTS_SECTION: &str = "Chi phí";
pub const REVENUES_SECTION: &str = "Doanh thu";
pub const DATE_HEADER: &str = "Ngày";
pub const COST_NAME_HEADER: &str = "Tên nguyên liệu";
pub const REVENUE_NAME_HEADER: &str = "Tên món bán";
pub const AMOUNT_HEADER: &str = "Thành tiền";
pub const TOTAL_COST_LABEL: &str = "Tổng chi phí";
pub const TOTAL_REVENUE_LABEL: &str = "Tổng doanh thu";
pub const VAT_LABEL: &str = "Thuế VAT";
pub const PROFIT_LABEL: &str = "Lợi nhuận";

pub const COST_COL: u16 = 0;
pub const REVENUE_COL: u16 = 4;
pub const LAST_COL: u16 = 6;

pub const TITLE_ROW: u32 = 0;
pub const PERIOD_ROW: u32 = 1;
pub const SUMMARY_ROW: u32 = 3;
pub const SECTION_ROW: u32 = 8;
pub const HEADER_ROW: u32 = 9;
pub const FIRST_DATA_ROW: u32 = 10;

pub const COLUMN_WIDTHS: [f64; 7] = [15.0, 30.0, 15.0, 4.0, 15.0, 30.0, 15.0];

/// Visual role of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellStyle {
    Title,
    Period,
    SummaryLabel,
    SummaryValue,
    /// Profit line of the summary block
    SummaryTotal,
    Section,
    Header,
    Text { banded: bool },
    Amount { banded: bool },
    TotalLabel,
    TotalAmount,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub row: u32,
    pub col: u16,
    pub value: String,
    pub style: CellStyle,
}

/// A merged range, written once with the value of its top-left cell
#[derive(Debug, Clone, PartialEq)]
pub struct Merge {
    pub first_row: u32,
    pub first_col: u16,
    pub last_row: u32,
    pub last_col: u16,
    pub value: String,
    pub style: CellStyle,
}

/// The complete report sheet
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSheet {
    pub name: String,
    pub column_widths: Vec<f64>,
    pub cells: Vec<Cell>,
    pub merges: Vec<Merge>,
    /// Row holding both tables' totals
    pub totals_row: u32,
}

impl ReportSheet {
    /// Lay out the report; records keep their input order
    pub fn build(
        costs: &[CostRecord],
        revenues: &[RevenueRecord],
        totals: &Totals,
        options: &ExportOptions,
    ) -> Self {
        let mut sheet = Self {
            name: SHEET_NAME.to_string(),
            column_widths: COLUMN_WIDTHS.to_vec(),
            cells: Vec::new(),
            merges: Vec::new(),
            totals_row: FIRST_DATA_ROW + costs.len().max(revenues.len()) as u32,
        };

        sheet.merge_row(TITLE_ROW, TITLE.to_string(), CellStyle::Title);
        sheet.merge_row(
            PERIOD_ROW,
            format!("{}: {}", PERIOD_LABEL, options.period_label),
            CellStyle::Period,
        );

        let vat_label = format!("{} {}%", VAT_LABEL, format_rate(totals.vat_rate));
        let summary = [
            (TOTAL_COST_LABEL, totals.total_cost, CellStyle::SummaryValue),
            (TOTAL_REVENUE_LABEL, totals.total_revenue, CellStyle::SummaryValue),
            (vat_label.as_str(), totals.vat_tax, CellStyle::SummaryValue),
            (PROFIT_LABEL, totals.profit, CellStyle::SummaryTotal),
        ];
        for (offset, (label, amount, style)) in summary.into_iter().enumerate() {
            let row = SUMMARY_ROW + offset as u32;
            let label_style = if style == CellStyle::SummaryTotal {
                CellStyle::SummaryTotal
            } else {
                CellStyle::SummaryLabel
            };
            sheet.merges.push(Merge {
                first_row: row,
                first_col: 0,
                last_row: row,
                last_col: 1,
                value: label.to_string(),
                style: label_style,
            });
            sheet.push(row, 2, options.currency.format(amount), style);
        }

        let cost_rows: Vec<[String; 3]> = costs
            .iter()
            .map(|c| row_values(c, options))
            .collect();
        let revenue_rows: Vec<[String; 3]> = revenues
            .iter()
            .map(|r| row_values(r, options))
            .collect();

        sheet.table(
            COST_COL,
            COSTS_SECTION,
            COST_NAME_HEADER,
            &cost_rows,
            TOTAL_COST_LABEL,
            options.currency.format(totals.total_cost),
        );
        sheet.table(
            REVENUE_COL,
            REVENUES_SECTION,
            REVENUE_NAME_HEADER,
            &revenue_rows,
            TOTAL_REVENUE_LABEL,
            options.currency.format(totals.total_revenue),
        );

        sheet
    }

    /// Cell written at `(row, col)`, if any
    pub fn cell(&self, row: u32, col: u16) -> Option<&Cell> {
        self.cells.iter().find(|c| c.row == row && c.col == col)
    }

    /// Number of data rows in the table starting at `first_col`
    pub fn data_rows(&self, first_col: u16) -> usize {
        self.cells
            .iter()
            .filter(|c| {
                c.col == first_col && matches!(c.style, CellStyle::Text { .. } | CellStyle::Amount { .. })
            })
            .count()
    }

    fn push(&mut self, row: u32, col: u16, value: String, style: CellStyle) {
        self.cells.push(Cell {
            row,
            col,
            value,
            style,
        });
    }

    fn merge_row(&mut self, row: u32, value: String, style: CellStyle) {
        self.merges.push(Merge {
            first_row: row,
            first_col: 0,
            last_row: row,
            last_col: LAST_COL,
            value,
            style,
        });
    }

    fn table(
        &mut self,
        col: u16,
        section: &str,
        name_header: &str,
        rows: &[[String; 3]],
        total_label: &str,
        total: String,
    ) {
        self.merges.push(Merge {
            first_row: SECTION_ROW,
            first_col: col,
            last_row: SECTION_ROW,
            last_col: col + 2,
            value: section.to_string(),
            style: CellStyle::Section,
        });

        for (offset, header) in [DATE_HEADER, name_header, AMOUNT_HEADER].iter().enumerate() {
            self.push(HEADER_ROW, col + offset as u16, header.to_string(), CellStyle::Header);
        }

        for (i, [date, name, amount]) in rows.iter().enumerate() {
            let row = FIRST_DATA_ROW + i as u32;
            let banded = i % 2 == 1;
            self.push(row, col, date.clone(), CellStyle::Text { banded });
            self.push(row, col + 1, name.clone(), CellStyle::Text { banded });
            self.push(row, col + 2, amount.clone(), CellStyle::Amount { banded });
        }

        let totals_row = self.totals_row;
        self.push(totals_row, col, total_label.to_string(), CellStyle::TotalLabel);
        self.push(totals_row, col + 1, String::new(), CellStyle::TotalLabel);
        self.push(totals_row, col + 2, total, CellStyle::TotalAmount);
    }
}

fn row_values<R: LedgerRecord>(record: &R, options: &ExportOptions) -> [String; 3] {
    [
        format_date(record.date(), &options.date_format),
        record.label().to_string(),
        options.currency.format(record.price_or_zero()),
    ]
}
