use crate::core::store::EntityStore;
use crate::domain::model::{ElectiveStatus, UnknownMajorPolicy};
use crate::utils::error::{RegistrarError, Result};

/// Computes the derived remaining-coursework fields for every student.
///
/// Must run exactly once, after all four loads complete: majors and grades
/// are not available incrementally. Reads majors and completed courses,
/// writes only `remaining_required` and `remaining_electives`.
pub fn resolve(store: &mut EntityStore, policy: UnknownMajorPolicy) -> Result<()> {
    let majors = &store.majors;
    for student in store.students.values_mut() {
        let major = match majors.get(&student.major) {
            Some(major) => major,
            None => match policy {
                UnknownMajorPolicy::Abort => {
                    return Err(RegistrarError::UnknownMajor {
                        cwid: student.cwid.clone(),
                        dept: student.major.clone(),
                    });
                }
                UnknownMajorPolicy::Skip => {
                    tracing::warn!(
                        "skipping student {}: major {} is not on file",
                        student.cwid,
                        student.major
                    );
                    continue;
                }
            },
        };

        // BTreeSet iteration keeps course codes sorted.
        student.remaining_required = major
            .required
            .iter()
            .filter(|course| !student.completed.contains_key(*course))
            .cloned()
            .collect();

        student.remaining_electives = if major.electives.is_empty() {
            ElectiveStatus::NoneRequired
        } else if major
            .electives
            .iter()
            .any(|course| student.completed.contains_key(course))
        {
            // one completed elective satisfies the whole pool
            ElectiveStatus::Satisfied
        } else {
            ElectiveStatus::Remaining(major.electives.iter().cloned().collect())
        };
    }
    Ok(())
}
