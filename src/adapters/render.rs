use crate::domain::ports::TableReport;
use crate::utils::error::Result;
use std::path::Path;

/// Renders a report as a left-aligned plain-text table.
pub fn render_table(report: &dyn TableReport) -> String {
    let columns = report.columns();
    let rows = report.rows();

    let mut widths: Vec<usize> = columns.iter().map(|c| c.len()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            if cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    let mut out = String::new();
    out.push_str(report.title());
    out.push('\n');
    out.push_str(&render_row(
        &columns.iter().map(|c| c.to_string()).collect::<Vec<_>>(),
        &widths,
    ));
    out.push('\n');
    out.push_str(&render_row(
        &widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>(),
        &widths,
    ));
    out.push('\n');
    for row in &rows {
        out.push_str(&render_row(row, &widths));
        out.push('\n');
    }
    out
}

fn render_row(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// Writes a report as a TSV file, creating parent directories as needed.
pub fn write_tsv(report: &dyn TableReport, path: impl AsRef<Path>) -> Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_path(path.as_ref())?;
    writer.write_record(report.columns())?;
    for row in report.rows() {
        writer.write_record(&row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedReport;

    impl TableReport for FixedReport {
        fn title(&self) -> &str {
            "Major Summary"
        }

        fn columns(&self) -> &[&str] {
            &["Dept", "Required", "Electives"]
        }

        fn rows(&self) -> Vec<Vec<String>> {
            vec![
                vec!["CS".into(), "CS501, CS546".into(), "CS600".into()],
                vec!["EE".into(), "EE101".into(), "".into()],
            ]
        }
    }

    #[test]
    fn test_render_table_aligns_columns() {
        let rendered = render_table(&FixedReport);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Major Summary");
        assert_eq!(lines[1], "Dept  Required      Electives");
        assert_eq!(lines[2], "----  ------------  ---------");
        assert_eq!(lines[3], "CS    CS501, CS546  CS600");
        assert_eq!(lines[4], "EE    EE101");
    }

    #[test]
    fn test_write_tsv_round_trips_rows() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("reports/major_summary.tsv");

        write_tsv(&FixedReport, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "Dept\tRequired\tElectives");
        assert_eq!(lines[1], "CS\tCS501, CS546\tCS600");
        assert_eq!(lines[2], "EE\tEE101\t");
    }
}
