//! Terminal rendering for the staff dashboard: the stats board, the roster
//! table, and the command help. Pure text assembly, no I/O.

use confirma_core::roster::RosterRow;
use confirma_core::stats::AttendanceStats;
use confirma_core::text::format_date_short;

const NO_DATE: &str = "No registrada";

/// Command summary printed on login and on an unknown command.
pub fn usage() -> String {
    [
        "",
        "Comandos:",
        "  stats                 Resumen de asistencia",
        "  tabla                 Tabla de respuestas con los filtros activos",
        "  filtro <respuesta|->  ASISTIRÁ, NO ASISTIRÁ, ENVIARÁ UN REPRESENTANTE o SIN_RESPUESTA; - lo quita",
        "  buscar <texto|->      Busca por nombre o cédula; - lo quita",
        "  recargar              Vuelve a cargar socios y respuestas",
        "  exportar <csv|txt>    Escribe el reporte a un archivo",
        "  salir                 Cierra la sesión",
        "",
    ]
    .join("\n")
}

/// Banner line for a failed action.
pub fn banner(message: &str) -> String {
    format!("[!] {message}\n")
}

pub fn stats_board(stats: &AttendanceStats) -> String {
    [
        String::new(),
        "Resumen de Asistencia".to_string(),
        format!("  Asistirán: {}", stats.confirmed),
        format!("  Enviarán Representante: {}", stats.delegates),
        format!("  No Asistirán: {}", stats.declined),
        format!("  Sin Respuesta: {}", stats.no_response),
        format!("  Total de Personas que Asistirán: {}", stats.total_people),
        format!("  Personas Adicionales: {}", stats.total_extra),
        String::new(),
    ]
    .join("\n")
}

/// Column-aligned roster table; the no-data line replaces an empty table.
pub fn table(rows: &[RosterRow]) -> String {
    if rows.is_empty() {
        return "\nNo hay datos para mostrar\n".to_string();
    }

    let mut lines = vec![
        String::new(),
        format!(
            "{:<32} {:<12} {:<10} {:<22} {:>11} {:>14}  {:<18}",
            "Socio",
            "Cédula",
            "Fundador",
            "Respuesta",
            "Adicionales",
            "Total Personas",
            "Fecha Respuesta"
        ),
        "-".repeat(126),
    ];
    for row in rows {
        let date = row
            .responded_at
            .as_ref()
            .map(format_date_short)
            .unwrap_or_else(|| NO_DATE.to_string());
        lines.push(format!(
            "{:<32} {:<12} {:<10} {:<22} {:>11} {:>14}  {:<18}",
            row.name,
            row.national_id,
            row.founder_label(),
            row.label(),
            row.companions,
            row.total_people,
            date
        ));
    }
    lines.push(String::new());
    lines.join("\n")
}
