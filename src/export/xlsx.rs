//! Render a [`ReportSheet`] with `rust_xlsxwriter`

use std::collections::HashMap;

use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, Worksheet, XlsxColor};

use crate::error::ExportError;

use super::layout::{CellStyle, ReportSheet, TITLE_ROW};

const HEADER_FILL: u32 = 0xD9E1F2;
const TOTAL_FILL: u32 = 0xFFF2CC;
const BAND_FILL: u32 = 0xF2F2F2;

fn format_for(style: CellStyle) -> Format {
    let bordered = Format::new().set_border(FormatBorder::Thin);
    match style {
        CellStyle::Title => Format::new()
            .set_bold()
            .set_font_size(16.0)
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter),
        CellStyle::Period => Format::new().set_italic().set_align(FormatAlign::Center),
        CellStyle::SummaryLabel => Format::new().set_bold(),
        CellStyle::SummaryValue => Format::new().set_align(FormatAlign::Right),
        CellStyle::SummaryTotal => Format::new()
            .set_bold()
            .set_background_color(XlsxColor::RGB(TOTAL_FILL))
            .set_align(FormatAlign::Right),
        CellStyle::Section => Format::new().set_bold().set_font_size(12.0),
        CellStyle::Header => bordered
            .set_bold()
            .set_background_color(XlsxColor::RGB(HEADER_FILL))
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter),
        CellStyle::Text { banded } => banded_fill(bordered, banded),
        CellStyle::Amount { banded } => banded_fill(bordered.set_align(FormatAlign::Right), banded),
        CellStyle::TotalLabel => bordered
            .set_bold()
            .set_background_color(XlsxColor::RGB(TOTAL_FILL))
            .set_align(FormatAlign::Left),
        CellStyle::TotalAmount => bordered
            .set_bold()
            .set_background_color(XlsxColor::RGB(TOTAL_FILL))
            .set_align(FormatAlign::Right),
    }
}

fn banded_fill(format: Format, banded: bool) -> Format {
    if banded {
        format.set_background_color(XlsxColor::RGB(BAND_FILL))
    } else {
        format
    }
}

/// Serialize the sheet into `.xlsx` bytes
pub fn render(sheet: &ReportSheet) -> Result<Vec<u8>, ExportError> {
    let mut formats: HashMap<CellStyle, Format> = HashMap::new();
    let mut worksheet = Worksheet::new();
    worksheet.set_name(&sheet.name)?;

    for (col, width) in sheet.column_widths.iter().enumerate() {
        worksheet.set_column_width(col as u16, *width)?;
    }
    worksheet.set_row_height(TITLE_ROW, 24.0)?;

    for merge in &sheet.merges {
        let format = formats
            .entry(merge.style)
            .or_insert_with(|| format_for(merge.style));
        worksheet.merge_range(
            merge.first_row,
            merge.first_col,
            merge.last_row,
            merge.last_col,
            &merge.value,
            format,
        )?;
    }

    for cell in &sheet.cells {
        let format = formats
            .entry(cell.style)
            .or_insert_with(|| format_for(cell.style));
        worksheet.write_string_with_format(cell.row, cell.col, &cell.value, format)?;
    }

    let mut workbook = Workbook::new();
    workbook.push_worksheet(worksheet);
    let buffer = workbook.save_to_buffer()?;

    log::debug!(
        "rendered report sheet: {} cells, {} merges, {} bytes",
        sheet.cells.len(),
        sheet.merges.len(),
        buffer.len()
    );
    Ok(buffer)
}
