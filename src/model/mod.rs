pub use self::field::{FieldError, parse_id};
pub use self::student::{Student, StudentId};

mod field;
mod student;
