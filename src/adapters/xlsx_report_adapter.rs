//! Excel report adapter implementing ReportPort.
//!
//! Produces a single-sheet workbook: a header row followed by one row per
//! position, every cell bordered in white text on a dark background.
//! The workbook is rendered in memory first so a failure never leaves a
//! partial file behind.

use std::fs;
use std::path::PathBuf;

use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook, XlsxError};

use crate::domain::error::EqWeightError;
use crate::domain::quote::Position;
use crate::ports::report_port::ReportPort;

pub const DEFAULT_SHEET_NAME: &str = "Recommended Trades";
pub const DEFAULT_COLUMN_WIDTH: f64 = 18.0;

pub const HEADERS: [&str; 4] = [
    "Ticker",
    "Stock Price",
    "Market Capitalisation",
    "Number of Shares to Buy",
];

const BACKGROUND: u32 = 0x0A0A23;
const FONT: u32 = 0xFFFFFF;

#[derive(Debug, Clone)]
pub struct XlsxReportAdapter {
    output_path: PathBuf,
    sheet_name: String,
    column_width: f64,
}

/// Cell styles, one per column kind.
struct Styles {
    text: Format,
    dollar: Format,
    integer: Format,
}

impl Styles {
    fn new() -> Self {
        let base = Format::new()
            .set_font_color(Color::RGB(FONT))
            .set_background_color(Color::RGB(BACKGROUND))
            .set_border(FormatBorder::Thin);
        Styles {
            text: base.clone(),
            dollar: base.clone().set_num_format("$0.00"),
            integer: base.set_num_format("0"),
        }
    }

    fn for_column(&self, col: u16) -> &Format {
        match col {
            0 => &self.text,
            1 | 2 => &self.dollar,
            _ => &self.integer,
        }
    }
}

impl XlsxReportAdapter {
    pub fn new(output_path: PathBuf) -> Self {
        Self {
            output_path,
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            column_width: DEFAULT_COLUMN_WIDTH,
        }
    }

    pub fn with_sheet_name(mut self, name: &str) -> Self {
        self.sheet_name = name.to_string();
        self
    }

    pub fn with_column_width(mut self, width: f64) -> Self {
        self.column_width = width;
        self
    }

    /// Renders the workbook to memory.
    pub fn render(&self, positions: &[Position]) -> Result<Vec<u8>, XlsxError> {
        let styles = Styles::new();
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name(&self.sheet_name)?;

        for (col, header) in (0u16..).zip(HEADERS) {
            sheet.set_column_width(col, self.column_width)?;
            sheet.set_column_format(col, styles.for_column(col))?;
            sheet.write_string_with_format(0, col, header, styles.for_column(col))?;
        }

        for (row, pos) in (1u32..).zip(positions) {
            sheet.write_string_with_format(row, 0, pos.ticker.as_str(), &styles.text)?;
            sheet.write_number_with_format(row, 1, pos.price, &styles.dollar)?;
            sheet.write_number_with_format(row, 2, pos.market_cap, &styles.dollar)?;
            sheet.write_number_with_format(row, 3, pos.shares as f64, &styles.integer)?;
        }

        workbook.save_to_buffer()
    }
}

impl ReportPort for XlsxReportAdapter {
    fn write(&self, positions: &[Position]) -> Result<(), EqWeightError> {
        let bytes = self.render(positions).map_err(|e| EqWeightError::Report {
            reason: e.to_string(),
        })?;
        fs::write(&self.output_path, bytes).map_err(|e| EqWeightError::Report {
            reason: format!("failed to write {}: {}", self.output_path.display(), e),
        })
    }

    fn destination(&self) -> String {
        self.output_path.display().to_string()
    }
}
