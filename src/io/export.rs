use std::io::Write;

use anyhow::Result;

use crate::application::SplitService;

/// Exporter for dumping the expense log in portable formats.
pub struct Exporter<'a> {
    service: &'a SplitService,
}

impl<'a> Exporter<'a> {
    pub fn new(service: &'a SplitService) -> Self {
        Self { service }
    }

    /// Export expenses to CSV in recorded order. Returns the row count.
    pub fn export_expenses_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record([
            "id",
            "timestamp",
            "member",
            "category",
            "amount_cents",
            "description",
        ])?;

        let mut count = 0;
        for expense in self.service.expenses() {
            csv_writer.write_record([
                expense.id.to_string(),
                expense.timestamp.to_rfc3339(),
                expense.member.clone(),
                expense.category.clone(),
                expense.amount_cents.to_string(),
                expense.description.clone().unwrap_or_default(),
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }
}
