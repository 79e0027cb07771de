//!
//! XLSX worksheet for one benchmark suite.
//!

use std::collections::HashMap;

///
/// XLSX worksheet for one benchmark suite.
///
#[derive(Default)]
pub struct Worksheet {
    /// The inner worksheet.
    pub worksheet: rust_xlsxwriter::Worksheet,
    /// Header names and their column widths.
    pub headers: Vec<(&'static str, usize)>,
    /// Metric column indexes in the worksheet.
    pub metric_ids: HashMap<String, u16>,
    /// The number of entry rows written so far.
    pub row_count: u32,
}

impl Worksheet {
    /// Width of columns that contain values.
    const VALUE_COLUMN_WIDTH: usize = 14;

    ///
    /// Creates a new worksheet with the given name.
    ///
    pub fn new(name: &str, headers: Vec<(&'static str, usize)>) -> anyhow::Result<Self> {
        let mut worksheet = rust_xlsxwriter::Worksheet::new();
        worksheet.set_name(name)?;

        for (header_index, (header_name, column_width)) in headers.iter().enumerate() {
            worksheet.write_with_format(
                0,
                header_index as u16,
                header_name.to_owned(),
                &Self::column_header_format(),
            )?;
            worksheet.set_column_width(header_index as u16, *column_width as f64)?;
        }

        Ok(Self {
            worksheet,
            headers,
            metric_ids: HashMap::new(),
            row_count: 0,
        })
    }

    ///
    /// Allocates a new column for a metric or returns an existing one.
    ///
    pub fn add_metric_column(&mut self, metric_name: &str, unit: &str) -> anyhow::Result<u16> {
        if let Some(metric_id) = self.metric_ids.get(metric_name) {
            return Ok(*metric_id);
        }

        let metric_id = self.metric_ids.len() as u16;
        self.metric_ids.insert(metric_name.to_owned(), metric_id);

        let column_index = (self.headers.len() as u16) + metric_id;
        self.worksheet
            .set_column_width(column_index, Self::VALUE_COLUMN_WIDTH as f64)?;
        self.worksheet.write_with_format(
            0,
            column_index,
            format!("{metric_name}\n[{unit}]"),
            &Self::column_header_format(),
        )?;

        Ok(metric_id)
    }

    ///
    /// Adds a new row for an entry and writes its commit and date.
    ///
    pub fn append_entry_row(&mut self, commit: &str, date: &str) -> anyhow::Result<u32> {
        let row_index = self.row_count + 1;
        self.row_count += 1;

        self.worksheet.write_with_format(
            row_index,
            0,
            commit.to_owned(),
            &Self::row_header_format(),
        )?;
        self.worksheet.write_with_format(
            row_index,
            1,
            date.to_owned(),
            &Self::row_header_format(),
        )?;

        Ok(row_index)
    }

    ///
    /// Writes a metric value into an entry row.
    ///
    pub fn write_value(&mut self, row: u32, metric_id: u16, value: f64) -> anyhow::Result<()> {
        self.worksheet.write_with_format(
            row,
            (self.headers.len() as u16) + metric_id,
            value,
            &Self::value_format(),
        )?;
        Ok(())
    }

    ///
    /// Finalizes the worksheet and returns its inner object.
    ///
    pub fn into_inner(self) -> rust_xlsxwriter::Worksheet {
        self.worksheet
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn column_header_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_bold();
        let format = format.set_font_size(12);
        let format = format.set_font_color("#1E1E1E");
        let format = format.set_background_color("#EEF3FF");
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Center);
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Top);
        let format = format.set_border(rust_xlsxwriter::FormatBorder::None);
        format
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn row_header_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_font_size(12);
        let format = format.set_font_color("#1E1E1E");
        let format = format.set_background_color("#DDE6FF");
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Left);
        let format = format.set_border(rust_xlsxwriter::FormatBorder::None);
        format
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn value_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_font_size(12);
        let format = format.set_font_color("#000000");
        let format = format.set_background_color("#FFFFFF");
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Right);
        let format = format.set_border(rust_xlsxwriter::FormatBorder::None);
        format
    }
}
