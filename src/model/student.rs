use std::fmt;

#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct StudentId(pub i32);

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A student read from one data row. Fields are private so that a record
/// cannot change once it has been built.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Student {
    name: String,
    id: StudentId,
}

impl Student {
    /// Build a student. The name is the first and last name glued together
    /// without any separator, as existing `grades.csv` consumers expect.
    pub fn new(first_name: &str, last_name: &str, id: StudentId) -> Self {
        let mut name = String::with_capacity(first_name.len() + last_name.len());
        name.push_str(first_name);
        name.push_str(last_name);
        Self { name, id }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> StudentId {
        self.id
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} >> {}", self.name, self.id)
    }
}
