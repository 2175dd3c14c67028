use crate::model::{FieldError, Student, StudentId, parse_id};
use csv::{ByteRecord, ReaderBuilder, Terminator, Trim};
use eyre::{Error, WrapErr};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

const FIRST_NAME_POS: usize = 0;
const LAST_NAME_POS: usize = 1;
const ID_POS: usize = 2;

/// An identifier that could not be parsed. The record was kept with id 0.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RowDiagnostic {
    /// 1-based line number in the input.
    pub line: u64,
    pub error: FieldError,
}

/// Everything read from one CSV source.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Loaded {
    pub headers: Vec<String>,
    pub students: Vec<Student>,
    pub diagnostics: Vec<RowDiagnostic>,
}

pub struct CsvStudentLoader {
    path: PathBuf,
}

impl CsvStudentLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the file, or return nothing at all if it cannot be opened.
    pub fn load(&self) -> Loaded {
        match File::open(&self.path) {
            Ok(file) => from_reader(BufReader::new(file)),
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "cannot open file, no students loaded");
                Loaded::default()
            }
        }
    }

    /// Load the file, failing if it cannot be opened.
    pub fn try_load(&self) -> Result<Loaded, Error> {
        let file = File::open(&self.path)
            .wrap_err_with(|| format!("cannot open {}", self.path.display()))?;
        Ok(from_reader(BufReader::new(file)))
    }
}

/// Read the students from `path`, in file order. A file that cannot be
/// opened yields no header and no student.
pub fn load(path: impl AsRef<Path>) -> Loaded {
    CsvStudentLoader::new(path.as_ref()).load()
}

/// Parse a header line followed by `first,last,id` rows.
///
/// The first line is always the header, even when empty. Only the first
/// three columns of a row are looked at; missing ones default to an empty
/// name part or id 0. Lines without any byte are skipped. Reading stops
/// at the first I/O error and keeps what was read so far.
pub fn from_reader<R: BufRead>(mut reader: R) -> Loaded {
    let mut loaded = Loaded::default();
    let mut line = Vec::new();
    match reader.read_until(b'\n', &mut line) {
        Ok(0) => return loaded,
        Ok(_) => {
            let header = strip_cr(line.strip_suffix(b"\n").unwrap_or(&line[..]));
            if !header.is_empty() {
                loaded.headers = header
                    .split(|&b| b == b',')
                    .map(|h| String::from_utf8_lossy(h).into_owned())
                    .collect();
            }
            debug!(headers = ?loaded.headers, "read header");
        }
        Err(e) => {
            warn!(error = %e, "cannot read header");
            return loaded;
        }
    }
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::None)
        .delimiter(b',')
        .terminator(Terminator::Any(b'\n'))
        .from_reader(reader);
    let mut record = ByteRecord::new();
    loop {
        match rdr.read_byte_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => {
                warn!(error = %e, "read error, keeping rows read so far");
                break;
            }
        }
        // A lone `\r` is what is left of an empty CRLF line.
        if record.len() == 1 && &record[0] == b"\r" {
            continue;
        }
        // The header line is not seen by the csv reader.
        let line = record.position().map_or(0, |p| p.line()) + 1;
        let student = build_student(&record, line, &mut loaded.diagnostics);
        trace!(line, student = %student, "read student");
        loaded.students.push(student);
    }
    debug!(
        students = loaded.students.len(),
        diagnostics = loaded.diagnostics.len(),
        "done reading"
    );
    loaded
}

fn build_student(
    record: &ByteRecord,
    line: u64,
    diagnostics: &mut Vec<RowDiagnostic>,
) -> Student {
    let last = record.len().saturating_sub(1);
    let field = |pos: usize| {
        record.get(pos).map(|raw| {
            // Only the last field of a CRLF line carries the `\r`.
            let raw = if pos == last { strip_cr(raw) } else { raw };
            String::from_utf8_lossy(raw)
        })
    };
    let id = match field(ID_POS) {
        None => StudentId::default(),
        Some(raw) => parse_id(&raw).unwrap_or_else(|error| {
            warn!(line, %error, "cannot parse student id, using 0");
            diagnostics.push(RowDiagnostic { line, error });
            StudentId::default()
        }),
    };
    Student::new(
        &field(FIRST_NAME_POS).unwrap_or_default(),
        &field(LAST_NAME_POS).unwrap_or_default(),
        id,
    )
}

fn strip_cr(bytes: &[u8]) -> &[u8] {
    bytes.strip_suffix(b"\r").unwrap_or(bytes)
}
