use crate::analyze::SummaryRow;
use crate::model::{Error, Result};
use crate::report::{PivotTable, SpilloverReport};
use markdown_builder::Markdown;
use markdown_table::{Heading, HeadingAlignment, MarkdownTable};
use std::fmt;

pub trait MarkdownReport {
    fn report_render(&self) -> Result<String>;
}

impl MarkdownReport for SpilloverReport {
    fn report_render(&self) -> Result<String> {
        let mut doc = Markdown::new();

        doc.header1("Sprint spillover");
        doc.paragraph(format!(
            "Closed sprints analysed: **{}**. Issues: **{}**, spilled: **{}**.",
            self.sprints,
            self.classified.len(),
            self.summary.iter().map(|row| row.issues).sum::<usize>(),
        ));

        if self.summary.is_empty() {
            doc.paragraph("No issue spilled over.".to_string());
            return Ok(doc.render());
        }
        doc.add_summary(&self.summary)?;
        doc.add_pivot(&self.pivot)?;
        Ok(doc.render())
    }
}

trait MarkdownExt {
    fn add_summary(&mut self, summary: &[SummaryRow]) -> Result<()>;
    fn add_pivot(&mut self, pivot: &PivotTable) -> Result<()>;
}

impl MarkdownExt for Markdown {
    fn add_summary(&mut self, summary: &[SummaryRow]) -> Result<()> {
        self.header2("Summary".to_string());

        let header = ["Assignee", "Spillover Reason", "Spilled Issues", "Story Points"]
            .iter()
            .map(|s| Heading::new(s.to_string(), None))
            .collect::<Vec<_>>();
        let table = summary
            .iter()
            .map(|row| {
                vec![
                    row.assignee.clone(),
                    row.reason.to_string(),
                    format!("{}", row.issues),
                    format!("{}", row.story_points),
                ]
            })
            .collect::<Vec<_>>();

        let mut md_table = MarkdownTable::new(table);
        md_table.with_headings(header);
        self.paragraph(md_table.as_markdown().map_err(table_error)?);
        Ok(())
    }

    fn add_pivot(&mut self, pivot: &PivotTable) -> Result<()> {
        self.header2("Spilled issues by assignee".to_string());

        let row = pivot
            .reasons
            .iter()
            .map(|reason| Heading::new(reason.to_string(), Some(HeadingAlignment::Center)))
            .collect::<Vec<_>>();
        let header = [vec![Heading::new("Assignee".to_string(), None)], row].concat();

        let table = pivot
            .rows
            .iter()
            .map(|(assignee, cells)| {
                let cells = cells.iter().map(|count| format!("{count}")).collect();
                [vec![format!("**{assignee}**")], cells].concat()
            })
            .collect::<Vec<_>>();

        let mut md_table = MarkdownTable::new(table);
        md_table.with_headings(header);
        self.paragraph(md_table.as_markdown().map_err(table_error)?);
        Ok(())
    }
}

fn table_error(err: impl fmt::Debug) -> Error {
    Error::Report(format!("markdown table: {err:?}"))
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
