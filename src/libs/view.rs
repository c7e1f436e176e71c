use super::summary::Summary;
use anyhow::Result;
use prettytable::{format, Cell, Row, Table};

pub struct View {}

impl View {
    /// Builds the two-row totals table: names on top, `H:M` totals below.
    pub fn totals_table(summary: &Summary) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        table.set_titles(Row::new(summary.names_row().iter().map(|name| Cell::new(name).style_spec("b")).collect()));
        table.add_row(Row::new(summary.totals_row().iter().map(|total| Cell::new(total)).collect()));

        table
    }

    pub fn totals(summary: &Summary) -> Result<()> {
        Self::totals_table(summary).printstd();

        Ok(())
    }
}
