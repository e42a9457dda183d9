use crate::core::store::EntityStore;
use crate::domain::model::ElectiveStatus;
use crate::domain::ports::TableReport;

const STUDENT_COLUMNS: &[&str] = &[
    "CWID",
    "Name",
    "Major",
    "Completed Courses",
    "Remaining Required",
    "Remaining Electives",
];

const INSTRUCTOR_COLUMNS: &[&str] = &["CWID", "Name", "Dept", "Course", "Students"];

const MAJOR_COLUMNS: &[&str] = &["Dept", "Required", "Electives"];

pub struct StudentSummary<'a> {
    store: &'a EntityStore,
}

impl<'a> StudentSummary<'a> {
    pub fn new(store: &'a EntityStore) -> Self {
        Self { store }
    }
}

impl TableReport for StudentSummary<'_> {
    fn title(&self) -> &str {
        "Student Summary"
    }

    fn columns(&self) -> &[&str] {
        STUDENT_COLUMNS
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.store
            .students
            .values()
            .map(|student| {
                let completed: Vec<String> = student.completed.keys().cloned().collect();
                // NoneRequired and Satisfied both render empty; the enum keeps
                // them distinct for API users.
                let electives = match &student.remaining_electives {
                    ElectiveStatus::NoneRequired | ElectiveStatus::Satisfied => String::new(),
                    ElectiveStatus::Remaining(pool) => pool.join(", "),
                };
                vec![
                    student.cwid.clone(),
                    student.name.clone(),
                    student.major.clone(),
                    completed.join(", "),
                    student.remaining_required.join(", "),
                    electives,
                ]
            })
            .collect()
    }
}

/// One row per course taught, not one per instructor.
pub struct InstructorSummary<'a> {
    store: &'a EntityStore,
}

impl<'a> InstructorSummary<'a> {
    pub fn new(store: &'a EntityStore) -> Self {
        Self { store }
    }
}

impl TableReport for InstructorSummary<'_> {
    fn title(&self) -> &str {
        "Instructor Summary"
    }

    fn columns(&self) -> &[&str] {
        INSTRUCTOR_COLUMNS
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.store
            .instructors
            .values()
            .flat_map(|instructor| {
                instructor.courses.iter().map(|(course, count)| {
                    vec![
                        instructor.cwid.clone(),
                        instructor.name.clone(),
                        instructor.dept.clone(),
                        course.clone(),
                        count.to_string(),
                    ]
                })
            })
            .collect()
    }
}

pub struct MajorSummary<'a> {
    store: &'a EntityStore,
}

impl<'a> MajorSummary<'a> {
    pub fn new(store: &'a EntityStore) -> Self {
        Self { store }
    }
}

impl TableReport for MajorSummary<'_> {
    fn title(&self) -> &str {
        "Major Summary"
    }

    fn columns(&self) -> &[&str] {
        MAJOR_COLUMNS
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.store
            .majors
            .values()
            .map(|major| {
                vec![
                    major.dept.clone(),
                    major
                        .required
                        .iter()
                        .cloned()
                        .collect::<Vec<_>>()
                        .join(", "),
                    major
                        .electives
                        .iter()
                        .cloned()
                        .collect::<Vec<_>>()
                        .join(", "),
                ]
            })
            .collect()
    }
}
