use crate::core::resolver;
use crate::core::store::EntityStore;
use crate::domain::ports::{ConfigProvider, SourceProvider};
use crate::utils::error::Result;

/// Drives one batch run: the four loads in fixed order, then resolution.
///
/// Grades reference students and instructors by CWID and resolution
/// references majors by department, so the order is not negotiable;
/// loading out of order surfaces as UnknownReference / UnknownMajor.
pub struct Engine<P: SourceProvider, C: ConfigProvider> {
    sources: P,
    config: C,
}

impl<P: SourceProvider, C: ConfigProvider> Engine<P, C> {
    pub fn new(sources: P, config: C) -> Self {
        Self { sources, config }
    }

    pub fn run(&self) -> Result<EntityStore> {
        let mut store = EntityStore::new();

        let mut source = self.sources.students()?;
        let count = store.add_students(&mut *source)?;
        tracing::info!("loaded {} students", count);

        let mut source = self.sources.instructors()?;
        let count = store.add_instructors(&mut *source)?;
        tracing::info!("loaded {} instructors", count);

        let mut source = self.sources.grades()?;
        let count = store.add_grades(&mut *source)?;
        tracing::info!("applied {} grade records", count);

        let mut source = self.sources.majors()?;
        let count = store.add_majors(&mut *source)?;
        tracing::info!("loaded {} major records", count);

        resolver::resolve(&mut store, self.config.unknown_major_policy())?;
        tracing::info!(
            "resolved remaining coursework for {} students",
            store.students.len()
        );

        Ok(store)
    }
}
