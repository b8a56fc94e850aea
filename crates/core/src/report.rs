//! Attendance report: the six-line summary plus the full roster, rendered as
//! CSV or column-aligned text behind a single format seam.

use serde::Serialize;

use crate::error::CoreError;
use crate::model::{Member, RsvpResponse};
use crate::roster::{build_roster, RosterRow};
use crate::stats::{compute_stats, AttendanceStats};
use crate::text::format_date_short;
use crate::types::Timestamp;

/// Report heading shared by every format.
pub const REPORT_TITLE: &str = "Respuestas de Invitación a la Inauguración";

const SUMMARY_TITLE: &str = "Resumen de Asistencia";

const COLUMNS: [&str; 7] = [
    "Socio",
    "Cédula",
    "Fundador",
    "Respuesta",
    "Adicionales",
    "Total Personas",
    "Fecha Respuesta",
];

const NO_DATE: &str = "No registrada";

// ---------------------------------------------------------------------------
// Export formats
// ---------------------------------------------------------------------------

/// Output format for the report. New printable formats slot in here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Text,
}

impl ExportFormat {
    /// Parse a user-supplied format argument.
    pub fn from_arg(s: &str) -> Result<Self, CoreError> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "txt" | "texto" => Ok(Self::Text),
            other => Err(CoreError::Validation(format!(
                "Formato de exportación desconocido: {other}"
            ))),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Text => "txt",
        }
    }
}

// ---------------------------------------------------------------------------
// Report assembly
// ---------------------------------------------------------------------------

/// Snapshot of the campaign at one point in time, ready to render.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub generated_at: Timestamp,
    pub stats: AttendanceStats,
    pub rows: Vec<RosterRow>,
}

impl Report {
    /// Build the roster, sort it by founder label then name, and compute the
    /// summary statistics.
    pub fn build(members: &[Member], responses: &[RsvpResponse], generated_at: Timestamp) -> Self {
        let mut rows = build_roster(members, responses);
        rows.sort_by(|a, b| {
            a.founder_label()
                .cmp(b.founder_label())
                .then_with(|| a.name.cmp(&b.name))
        });
        Self {
            generated_at,
            stats: compute_stats(members, responses),
            rows,
        }
    }

    pub fn render(&self, format: ExportFormat) -> String {
        match format {
            ExportFormat::Csv => self.render_csv(),
            ExportFormat::Text => self.render_text(),
        }
    }

    /// File name the staff tools write the report under.
    pub fn suggested_filename(&self, format: ExportFormat) -> String {
        format!(
            "respuestas_inauguracion_{}.{}",
            self.generated_at.format("%Y-%m-%d"),
            format.extension()
        )
    }

    fn summary_lines(&self) -> [(&'static str, i64); 6] {
        [
            ("Asistirán", self.stats.confirmed),
            ("Enviarán Representante", self.stats.delegates),
            ("No Asistirán", self.stats.declined),
            ("Sin Respuesta", self.stats.no_response),
            ("Total de Personas que Asistirán", self.stats.total_people),
            ("Personas Adicionales", self.stats.total_extra),
        ]
    }

    fn date_cell(row: &RosterRow) -> String {
        row.responded_at
            .as_ref()
            .map(format_date_short)
            .unwrap_or_else(|| NO_DATE.to_string())
    }

    fn render_csv(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 10);

        // Header row
        lines.push(COLUMNS.join(","));

        // Data rows
        for row in &self.rows {
            let parts = [
                csv_escape(&row.name),
                csv_escape(&row.national_id),
                csv_escape(row.founder_label()),
                csv_escape(row.label()),
                row.companions.to_string(),
                row.total_people.to_string(),
                csv_escape(&Self::date_cell(row)),
            ];
            lines.push(parts.join(","));
        }

        // Summary block
        lines.push(String::new());
        lines.push(SUMMARY_TITLE.to_string());
        for (label, count) in self.summary_lines() {
            lines.push(format!("{},{count}", csv_escape(label)));
        }

        lines.join("\n")
    }

    fn render_text(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 14);

        lines.push(REPORT_TITLE.to_string());
        lines.push(format!(
            "Generado: {}",
            format_date_short(&self.generated_at)
        ));
        lines.push(String::new());

        lines.push(SUMMARY_TITLE.to_string());
        for (label, count) in self.summary_lines() {
            lines.push(format!("  {label}: {count}"));
        }
        lines.push(String::new());

        lines.push(format!(
            "{:<32} {:<12} {:<10} {:<22} {:>11} {:>14}  {:<18}",
            COLUMNS[0], COLUMNS[1], COLUMNS[2], COLUMNS[3], COLUMNS[4], COLUMNS[5], COLUMNS[6]
        ));
        lines.push("-".repeat(126));

        for row in &self.rows {
            lines.push(format!(
                "{:<32} {:<12} {:<10} {:<22} {:>11} {:>14}  {:<18}",
                row.name,
                row.national_id,
                row.founder_label(),
                row.label(),
                row.companions,
                row.total_people,
                Self::date_cell(row)
            ));
        }

        lines.join("\n")
    }
}

/// Escape a value for CSV: wrap in quotes if it contains comma, quote, or newline.
fn csv_escape(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Member;
    use assert_matches::assert_matches;
    use chrono::{TimeZone, Utc};

    fn member(id: i64, name: &str, founder: Option<&str>) -> Member {
        Member {
            id,
            name: name.to_string(),
            national_id: format!("17142554{id:02}"),
            founder: founder.map(str::to_string),
        }
    }

    fn response(id: i64, member_id: i64, kind_raw: &str, companions: Option<i64>) -> RsvpResponse {
        RsvpResponse {
            id,
            member_id,
            kind_raw: kind_raw.to_string(),
            companions,
            confirmed_at: Some(Utc.with_ymd_and_hms(2025, 8, 20, 14, 0, 0).unwrap()),
            created_at: None,
        }
    }

    fn sample_report() -> Report {
        let members = vec![
            member(1, "Rosa, la tesorera", Some("SI")),
            member(2, "Juan Pérez", Some("NO")),
            member(3, "María Quispe", Some("NO")),
        ];
        let responses = vec![
            response(1, 1, "ASISTIRÁ", Some(2)),
            response(2, 2, "ENVIARÁ UN REPRESENTANTE", None),
        ];
        let generated_at = Utc.with_ymd_and_hms(2025, 8, 21, 10, 0, 0).unwrap();
        Report::build(&members, &responses, generated_at)
    }

    // -- ExportFormat --

    #[test]
    fn format_parses_arguments() {
        assert_eq!(ExportFormat::from_arg("csv").unwrap(), ExportFormat::Csv);
        assert_eq!(ExportFormat::from_arg(" TXT ").unwrap(), ExportFormat::Text);
        assert_eq!(ExportFormat::from_arg("texto").unwrap(), ExportFormat::Text);
        assert_matches!(ExportFormat::from_arg("pdf"), Err(CoreError::Validation(_)));
    }

    // -- csv_escape --

    #[test]
    fn escape_quotes_fields_with_separators() {
        assert_eq!(csv_escape("sin cambios"), "sin cambios");
        assert_eq!(csv_escape("Rosa, la tesorera"), "\"Rosa, la tesorera\"");
        assert_eq!(csv_escape("dijo \"sí\""), "\"dijo \"\"sí\"\"\"");
        assert_eq!(csv_escape("dos\nlíneas"), "\"dos\nlíneas\"");
    }

    // -- Report --

    #[test]
    fn report_sorts_by_founder_then_name() {
        let report = sample_report();
        let names: Vec<&str> = report.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Juan Pérez", "María Quispe", "Rosa, la tesorera"]);
    }

    #[test]
    fn csv_has_header_rows_and_summary() {
        let report = sample_report();
        let csv = report.render(ExportFormat::Csv);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(
            lines[0],
            "Socio,Cédula,Fundador,Respuesta,Adicionales,Total Personas,Fecha Respuesta"
        );
        assert_eq!(
            lines[1],
            "Juan Pérez,1714255402,NO,Enviará Representante,0,1,\"20 ago 2025, 14:00\""
        );
        // The comma inside the quoted name must not split the field.
        assert!(lines[3].starts_with("\"Rosa, la tesorera\","));

        let summary_at = lines.iter().position(|l| *l == "Resumen de Asistencia");
        let summary_at = summary_at.expect("summary title present");
        assert_eq!(lines[summary_at - 1], "");
        assert_eq!(lines[summary_at + 1], "Asistirán,1");
        assert_eq!(lines[summary_at + 2], "Enviarán Representante,1");
        assert_eq!(lines[summary_at + 3], "No Asistirán,0");
        assert_eq!(lines[summary_at + 4], "Sin Respuesta,1");
        assert_eq!(lines[summary_at + 5], "Total de Personas que Asistirán,4");
        assert_eq!(lines[summary_at + 6], "Personas Adicionales,2");
    }

    #[test]
    fn csv_dates_use_short_format_with_fallback() {
        let report = sample_report();
        let csv = report.render(ExportFormat::Csv);
        // The date cell contains a comma, so it arrives quoted.
        assert!(csv.contains("\"20 ago 2025, 14:00\""));
        assert!(csv.contains("No registrada"));
    }

    #[test]
    fn text_report_carries_title_and_summary() {
        let report = sample_report();
        let text = report.render(ExportFormat::Text);
        assert!(text.starts_with(REPORT_TITLE));
        assert!(text.contains("Generado: 21 ago 2025, 10:00"));
        assert!(text.contains("  Total de Personas que Asistirán: 4"));
        assert!(text.contains("Socio"));
        assert!(text.contains("María Quispe"));
    }

    #[test]
    fn filenames_follow_the_date() {
        let report = sample_report();
        assert_eq!(
            report.suggested_filename(ExportFormat::Csv),
            "respuestas_inauguracion_2025-08-21.csv"
        );
        assert_eq!(
            report.suggested_filename(ExportFormat::Text),
            "respuestas_inauguracion_2025-08-21.txt"
        );
    }
}
