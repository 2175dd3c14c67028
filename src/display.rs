use crate::loaders::RowDiagnostic;
use crate::model::Student;
use std::io::{self, Write};

/// Column number of the identifier, as shown in diagnostics.
const ID_COLUMN: usize = 3;

pub fn display_headers(out: &mut impl Write, headers: &[String]) -> io::Result<()> {
    for h in headers {
        writeln!(out, "{}", h)?;
    }
    Ok(())
}

pub fn display_diagnostics(out: &mut impl Write, diagnostics: &[RowDiagnostic]) -> io::Result<()> {
    for d in diagnostics {
        writeln!(out, "#{}: {} (line {})", ID_COLUMN, d.error, d.line)?;
    }
    Ok(())
}

/// One `<name> >> <id>` line per student, in order.
pub fn display_students(out: &mut impl Write, students: &[Student]) -> io::Result<()> {
    for s in students {
        writeln!(out, "{}", s)?;
    }
    Ok(())
}
