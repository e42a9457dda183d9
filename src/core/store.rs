use crate::domain::model::{Grade, Instructor, Major, Student};
use crate::domain::ports::RecordSource;
use crate::utils::error::{RegistrarError, Result};
use std::collections::BTreeMap;

/// In-memory model built by replaying the four record streams.
///
/// Keyed by CWID for students and instructors and by department for majors.
/// BTreeMap keeps report output deterministic.
#[derive(Debug, Default)]
pub struct EntityStore {
    pub students: BTreeMap<String, Student>,
    pub instructors: BTreeMap<String, Instructor>,
    pub majors: BTreeMap<String, Major>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads student records. Duplicate CWIDs are ignored silently, first
    /// write wins.
    pub fn add_students(&mut self, source: &mut dyn RecordSource) -> Result<usize> {
        let mut loaded = 0;
        while let Some(record) = source.next_record() {
            let [cwid, name, major] = take(record?)?;
            if !self.students.contains_key(&cwid) {
                self.students
                    .insert(cwid.clone(), Student::new(cwid, name, major));
                loaded += 1;
            }
        }
        Ok(loaded)
    }

    /// Loads instructor records, same first-write-wins policy as students.
    pub fn add_instructors(&mut self, source: &mut dyn RecordSource) -> Result<usize> {
        let mut loaded = 0;
        while let Some(record) = source.next_record() {
            let [cwid, name, dept] = take(record?)?;
            if !self.instructors.contains_key(&cwid) {
                self.instructors
                    .insert(cwid.clone(), Instructor::new(cwid, name, dept));
                loaded += 1;
            }
        }
        Ok(loaded)
    }

    /// Applies grade records to both sides of the join. A grade citing a
    /// CWID absent from the store signals inconsistent source data and
    /// fails the load before anything from that record is applied.
    pub fn add_grades(&mut self, source: &mut dyn RecordSource) -> Result<usize> {
        let mut applied = 0;
        while let Some(record) = source.next_record() {
            let [student_cwid, course, grade, instructor_cwid] = take(record?)?;
            let grade = Grade {
                student_cwid,
                course,
                grade,
                instructor_cwid,
            };

            let student = self.students.get_mut(&grade.student_cwid).ok_or_else(|| {
                RegistrarError::UnknownReference {
                    entity: "student",
                    cwid: grade.student_cwid.clone(),
                }
            })?;
            let instructor = self
                .instructors
                .get_mut(&grade.instructor_cwid)
                .ok_or_else(|| RegistrarError::UnknownReference {
                    entity: "instructor",
                    cwid: grade.instructor_cwid.clone(),
                })?;

            student.add_course(grade.course.clone(), grade.grade);
            instructor.add_course(grade.course);
            applied += 1;
        }
        Ok(applied)
    }

    /// Creates each major on first sight and files the course under its
    /// requirement flag: `R` required, `E` elective, anything else is left
    /// unclassified without error.
    pub fn add_majors(&mut self, source: &mut dyn RecordSource) -> Result<usize> {
        let mut loaded = 0;
        while let Some(record) = source.next_record() {
            let [dept, flag, course] = take(record?)?;
            let major = self
                .majors
                .entry(dept.clone())
                .or_insert_with(|| Major::new(dept));
            match flag.as_str() {
                "R" => {
                    major.required.insert(course);
                }
                "E" => {
                    major.electives.insert(course);
                }
                other => {
                    tracing::debug!("unclassified requirement flag {:?} for {}", other, course);
                }
            }
            loaded += 1;
        }
        Ok(loaded)
    }
}

// The tokenizer contract guarantees arity; this guards against a
// misbehaving RecordSource implementation.
fn take<const N: usize>(fields: Vec<String>) -> Result<[String; N]> {
    let found = fields.len();
    <[String; N]>::try_from(fields).map_err(|_| RegistrarError::ProcessingError {
        message: format!("record source yielded {found} fields where {N} were expected"),
    })
}
