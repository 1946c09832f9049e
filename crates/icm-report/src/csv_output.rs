//! Semicolon separated output, one record per validated line.

use std::io::Write;

use csv::{Writer, WriterBuilder};
use icm_validate::ChainResult;

use crate::error::Result;
use crate::output::Printer;

const DELIMITER: u8 = b';';

pub struct CsvPrinter<W: Write> {
    writer: Writer<W>,
    header: bool,
    header_written: bool,
}

impl<W: Write> CsvPrinter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: WriterBuilder::new()
                .delimiter(DELIMITER)
                .has_headers(false)
                .from_writer(writer),
            header: true,
            header_written: false,
        }
    }

    /// Omit the header row of datum names.
    pub fn without_header(mut self) -> Self {
        self.header = false;
        self
    }
}

impl<W: Write> Printer for CsvPrinter<W> {
    fn print(&mut self, result: &ChainResult) -> Result<()> {
        if self.header && !self.header_written {
            self.writer
                .write_record(result.data().map(|datum| datum.name))?;
            self.header_written = true;
        }
        self.writer.write_record(
            result
                .data()
                .map(|datum| datum.value.as_deref().unwrap_or_default()),
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
