// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::{DATE_FORMAT, date_to_excel_serial};
use crate::export::{ReportSink, notify_export_success};
use crate::models::{DETAIL_HEADERS, DetailRow, PivotTable, ReportViews};
use crate::ui::messages::info;
use rust_xlsxwriter::{
    Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use unicode_width::UnicodeWidthStr;

const HOURS_FORMAT: &str = "0.00";

/// Writes the report as one workbook with the sheets Detail, Weekly, Monthly.
#[derive(Debug, Clone)]
pub struct XlsxSink {
    path: PathBuf,
}

impl XlsxSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReportSink for XlsxSink {
    fn write(&self, views: &ReportViews) -> AppResult<()> {
        info(format!("Writing report: {}", self.path.display()));

        // All sheets are built in memory; the target only appears once complete.
        let mut workbook = Workbook::new();
        workbook.push_worksheet(detail_sheet(&views.detail)?);
        workbook.push_worksheet(pivot_sheet(&views.weekly)?);
        workbook.push_worksheet(pivot_sheet(&views.monthly)?);

        let bytes = workbook.save_to_buffer()?;
        replace_file(&self.path, &bytes)?;

        debug!(
            detail = views.detail.len(),
            weekly_cols = views.weekly.columns().len(),
            monthly_cols = views.monthly.columns().len(),
            "workbook saved"
        );
        notify_export_success(&self.path);
        Ok(())
    }
}

/// Sibling of `path` that receives the bytes before the final rename.
fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.tmp"))
}

/// Write `bytes` next to `path`, then rename over it. On failure neither a
/// truncated target nor the temporary file is left behind.
fn replace_file(path: &Path, bytes: &[u8]) -> AppResult<()> {
    let tmp = temp_path(path);

    if let Err(e) = fs::write(&tmp, bytes) {
        fs::remove_file(&tmp).ok();
        return Err(AppError::Export(format!("cannot write {}: {e}", path.display())));
    }

    fs::rename(&tmp, path).map_err(|e| {
        fs::remove_file(&tmp).ok();
        AppError::Export(format!("cannot write {}: {e}", path.display()))
    })
}

// ---------------------------
// Sheets
// ---------------------------

fn detail_sheet(rows: &[DetailRow]) -> AppResult<Worksheet> {
    let mut ws = Worksheet::new();
    ws.set_name("Detail")?;

    let mut widths = ColumnWidths::new(DETAIL_HEADERS.iter().copied());
    write_headers(&mut ws, DETAIL_HEADERS.iter().copied())?;

    for (i, r) in rows.iter().enumerate() {
        let row = (i + 1) as u32;
        let style = CellStyle::band(i);
        let labels = r.labels_str();

        ws.write_with_format(row, 0, r.user.as_str(), &style.text())?;
        ws.write_with_format(row, 1, date_to_excel_serial(r.date), &style.date())?;
        ws.write_with_format(row, 2, r.hours, &style.number())?;
        ws.write_with_format(row, 3, labels.as_str(), &style.text())?;
        ws.write_with_format(row, 4, r.issue.as_str(), &style.text())?;

        widths.fit(0, &r.user);
        widths.fit(1, "yyyy-mm-dd");
        widths.fit(2, &format!("{:.2}", r.hours));
        widths.fit(3, &labels);
        widths.fit(4, &r.issue);
    }

    widths.apply(&mut ws)?;
    ws.set_freeze_panes(1, 0)?;
    Ok(ws)
}

fn pivot_sheet(table: &PivotTable) -> AppResult<Worksheet> {
    let mut ws = Worksheet::new();
    ws.set_name(table.granularity().sheet_name())?;

    let headers = table.headers();
    let mut widths = ColumnWidths::new(headers.iter().map(String::as_str));
    write_headers(&mut ws, headers.iter().map(String::as_str))?;

    for (i, pr) in table.rows().iter().enumerate() {
        let row = (i + 1) as u32;
        let style = CellStyle::band(i);

        ws.write_with_format(row, 0, pr.user.as_str(), &style.text())?;
        widths.fit(0, &pr.user);

        for (c, value) in pr.cells.iter().enumerate() {
            let col = (c + 1) as u16;
            let fmt = if c == 0 { style.total() } else { style.number() };
            ws.write_with_format(row, col, *value, &fmt)?;
            widths.fit(c + 1, &format!("{value:.2}"));
        }
    }

    widths.apply(&mut ws)?;
    ws.set_freeze_panes(1, 1)?;
    Ok(ws)
}

fn write_headers<'a>(
    ws: &mut Worksheet,
    headers: impl Iterator<Item = &'a str>,
) -> AppResult<()> {
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.enumerate() {
        ws.write_with_format(0, col as u16, header, &header_format)?;
    }
    Ok(())
}

// ---------------------------
// Styling helpers
// ---------------------------

/// Alternating row band styles.
struct CellStyle {
    bg: Color,
}

impl CellStyle {
    fn band(index: usize) -> Self {
        let bg = if index % 2 == 0 {
            Color::RGB(0xEAF3FB)
        } else {
            Color::RGB(0xFFFFFF)
        };
        Self { bg }
    }

    fn base(&self) -> Format {
        Format::new()
            .set_background_color(self.bg)
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin)
    }

    fn text(&self) -> Format {
        self.base()
    }

    fn date(&self) -> Format {
        self.base().set_num_format(DATE_FORMAT)
    }

    fn number(&self) -> Format {
        self.base()
            .set_num_format(HOURS_FORMAT)
            .set_align(FormatAlign::Right)
    }

    fn total(&self) -> Format {
        self.number().set_bold()
    }
}

/// Tracks the widest content per column (display width, not bytes).
struct ColumnWidths(Vec<usize>);

impl ColumnWidths {
    fn new<'a>(headers: impl Iterator<Item = &'a str>) -> Self {
        Self(headers.map(UnicodeWidthStr::width).collect())
    }

    fn fit(&mut self, col: usize, s: &str) {
        if let Some(w) = self.0.get_mut(col) {
            *w = (*w).max(UnicodeWidthStr::width(s));
        }
    }

    fn apply(&self, ws: &mut Worksheet) -> AppResult<()> {
        for (c, w) in self.0.iter().enumerate() {
            ws.set_column_width(c as u16, *w as f64 + 2.0)?;
        }
        Ok(())
    }
}
