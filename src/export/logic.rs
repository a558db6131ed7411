// src/export/logic.rs

use crate::core::analytics::Kpis;
use crate::core::filter::{Selection, WeeklyFilter};
use crate::core::logic::PipelineReport;
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{DailyExport, TabularRecord, WeeklyExport};
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::export::ExportFormat;
use crate::ui::messages::warning;
use std::path::PathBuf;
use tracing::debug;

/// Which pipeline output to write.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportTarget {
    #[default]
    Weekly,
    Daily,
}

#[derive(Clone, Debug)]
pub struct ExportRequest {
    pub format: ExportFormat,
    pub path: PathBuf,
    pub target: ExportTarget,
    pub filter: WeeklyFilter,
    pub force: bool,
}

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the filtered selection; returns the number of records written.
    ///
    /// An empty selection writes no file and returns 0.
    pub fn export(report: &PipelineReport, req: &ExportRequest) -> AppResult<usize> {
        match req.target {
            ExportTarget::Weekly => {
                let selection = req.filter.apply(&report.weekly);
                let Selection::Matched(weeks) = &selection else {
                    warning("No matching records for the selected filters; nothing exported.");
                    return Ok(0);
                };

                let rows: Vec<WeeklyExport> = weeks.iter().map(|w| WeeklyExport::from(*w)).collect();
                let summary = kpi_lines(&Kpis::compute(weeks));
                Self::write(req, &rows, ("Weekly attendance summary", "Weekly summary"), &summary)?;
                Ok(rows.len())
            }
            ExportTarget::Daily => {
                let selection = req.filter.apply_daily(&report.sessions);
                let Selection::Matched(sessions) = &selection else {
                    warning("No matching records for the selected filters; nothing exported.");
                    return Ok(0);
                };

                let rows: Vec<DailyExport> = sessions.iter().map(|s| DailyExport::from(*s)).collect();
                Self::write(req, &rows, ("Daily attendance sessions", "Daily sessions"), &[])?;
                Ok(rows.len())
            }
        }
    }

    fn write<T: TabularRecord>(
        req: &ExportRequest,
        rows: &[T],
        (title, sheet): (&str, &str),
        summary: &[String],
    ) -> AppResult<()> {
        ensure_writable(&req.path, req.force)?;
        debug!(format = req.format.as_str(), records = rows.len(), "exporting");

        match req.format {
            ExportFormat::Csv => export_csv(rows, &req.path),
            ExportFormat::Json => export_json(rows, &req.path),
            ExportFormat::Xlsx => export_xlsx(rows, &req.path, sheet, summary),
            ExportFormat::Pdf => export_pdf(rows, &req.path, &build_pdf_title(title, &req.filter), summary),
        }
    }
}

/// Costruisce il titolo del PDF in base ai filtri selezionati.
fn build_pdf_title(base: &str, filter: &WeeklyFilter) -> String {
    match filter.weeks.as_slice() {
        [] => base.to_string(),
        [one] => format!("{base} for week {one}"),
        many => format!("{base} for {} weeks", many.len()),
    }
}

fn kpi_lines(k: &Kpis) -> Vec<String> {
    vec![
        format!(
            "Records: {}   Total hours: {:.1}h   Target: {:.1}h   Delta: {:+.1}h",
            k.records,
            k.total_hours,
            k.total_target_hours,
            k.hours_vs_target()
        ),
        format!(
            "Avg performance: {:.1}%   Avg gap: {:.1}%   Compliance: {}/{} ({:.0}%)",
            k.avg_performance, k.avg_gap_percent, k.compliant, k.records, k.compliance_rate
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::logic::{Core, PipelineSettings};
    use crate::models::raw_event::RawRow;
    use std::fs;

    fn report() -> PipelineReport {
        let rows = vec![
            RawRow::new("2024-01-01 09:00:00", "John Doe", "Office In", 2),
            RawRow::new("2024-01-01 18:00:00", "John Doe", "Office Out", 3),
            RawRow::new("2024-01-02 09:00:00", "Jane Roe", "Office In", 4),
            RawRow::new("2024-01-02 17:00:00", "Jane Roe", "Office Out", 5),
        ];
        Core::run_pipeline(&rows, &PipelineSettings::default()).unwrap()
    }

    fn request(name: &str, format: ExportFormat, target: ExportTarget) -> ExportRequest {
        let path = std::env::temp_dir().join(format!("rattendance_logic_{name}.{}", format.as_str()));
        fs::remove_file(&path).ok();
        ExportRequest {
            format,
            path,
            target,
            filter: WeeklyFilter::default(),
            force: true,
        }
    }

    #[test]
    fn weekly_csv() {
        let req = request("weekly_csv", ExportFormat::Csv, ExportTarget::Weekly);
        assert_eq!(ExportLogic::export(&report(), &req).unwrap(), 2);

        let content = fs::read_to_string(&req.path).unwrap();
        assert!(content.starts_with("user,iso_week_key,total_hours"));
        assert!(content.contains("John Doe,2024-W01,9.0,1,40.0,31.0,77.5,22.5,Below Target"));
        fs::remove_file(&req.path).ok();
    }

    #[test]
    fn filtered_json() {
        let mut req = request("filtered_json", ExportFormat::Json, ExportTarget::Weekly);
        req.filter.users = vec!["Jane Roe".into()];
        assert_eq!(ExportLogic::export(&report(), &req).unwrap(), 1);

        let content = fs::read_to_string(&req.path).unwrap();
        assert!(content.contains("\"user\": \"Jane Roe\""));
        assert!(!content.contains("John Doe"));
        fs::remove_file(&req.path).ok();
    }

    #[test]
    fn daily_xlsx_and_pdf() {
        for format in [ExportFormat::Xlsx, ExportFormat::Pdf] {
            let req = request("daily", format, ExportTarget::Daily);
            assert_eq!(ExportLogic::export(&report(), &req).unwrap(), 2);
            assert!(req.path.exists());
            fs::remove_file(&req.path).ok();
        }
    }

    #[test]
    fn no_matching_records_writes_nothing() {
        let mut req = request("nothing", ExportFormat::Csv, ExportTarget::Weekly);
        req.filter.min_score = Some(99.0);
        assert_eq!(ExportLogic::export(&report(), &req).unwrap(), 0);
        assert!(!req.path.exists());
    }

    #[test]
    fn pdf_titles() {
        let mut f = WeeklyFilter::default();
        assert_eq!(build_pdf_title("Weekly", &f), "Weekly");
        f.weeks = vec!["2024-W01".into()];
        assert_eq!(build_pdf_title("Weekly", &f), "Weekly for week 2024-W01");
        f.weeks.push("2024-W02".into());
        assert_eq!(build_pdf_title("Weekly", &f), "Weekly for 2 weeks");
    }
}
