use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Letter grades that count a course as completed.
pub const PASSING_GRADES: [&str; 6] = ["A", "A-", "B+", "B", "B-", "C"];

pub fn is_passing(grade: &str) -> bool {
    PASSING_GRADES.contains(&grade)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub cwid: String,
    pub name: String,
    /// Department key into the major mapping, not an owned Major.
    pub major: String,
    /// Course code -> letter grade, passing grades only.
    pub completed: BTreeMap<String, String>,
    pub remaining_required: Vec<String>,
    pub remaining_electives: ElectiveStatus,
}

impl Student {
    pub fn new(cwid: String, name: String, major: String) -> Self {
        Self {
            cwid,
            name,
            major,
            completed: BTreeMap::new(),
            remaining_required: Vec::new(),
            remaining_electives: ElectiveStatus::NoneRequired,
        }
    }

    /// Records an earned grade. Grades outside the passing set never enter
    /// the completed mapping.
    pub fn add_course(&mut self, course: String, grade: String) {
        if is_passing(&grade) {
            self.completed.insert(course, grade);
        }
    }
}

/// Outcome of elective resolution for one student.
///
/// A single elective completion satisfies the whole pool, so a partial list
/// is never produced. `NoneRequired` and `Satisfied` are distinct states even
/// though both render as an empty table cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElectiveStatus {
    /// The student's major defines no electives.
    NoneRequired,
    /// At least one elective from the major's pool is completed.
    Satisfied,
    /// Nothing from the pool completed yet; the full sorted elective list.
    Remaining(Vec<String>),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instructor {
    pub cwid: String,
    pub name: String,
    pub dept: String,
    /// Course code -> number of students taught.
    pub courses: BTreeMap<String, usize>,
}

impl Instructor {
    pub fn new(cwid: String, name: String, dept: String) -> Self {
        Self {
            cwid,
            name,
            dept,
            courses: BTreeMap::new(),
        }
    }

    pub fn add_course(&mut self, course: String) {
        *self.courses.entry(course).or_insert(0) += 1;
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Major {
    pub dept: String,
    pub required: BTreeSet<String>,
    pub electives: BTreeSet<String>,
}

impl Major {
    pub fn new(dept: String) -> Self {
        Self {
            dept,
            required: BTreeSet::new(),
            electives: BTreeSet::new(),
        }
    }
}

/// Transient join record from the grades stream. Applied to the student and
/// instructor it cites during load, never stored as an entity.
#[derive(Debug, Clone)]
pub struct Grade {
    pub student_cwid: String,
    pub course: String,
    pub grade: String,
    pub instructor_cwid: String,
}

/// What to do when a student's major is not on file at resolution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownMajorPolicy {
    /// Fail the whole run.
    Abort,
    /// Warn and leave the student's derived fields untouched.
    Skip,
}
