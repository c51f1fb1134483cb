use crate::core::engine::{VaccinationEngine, DEFAULT_DAILY_CAP};
use crate::core::person_queue::PersonQueue;
use crate::core::vial_stack::VialStack;
use crate::domain::model::{BatchOutcome, Person};
use crate::domain::ports::SessionConfig;
use crate::utils::error::Result;
use crate::utils::validation::checked_identifier;

pub const DEFAULT_VIAL_COUNT: usize = 3;
pub const DEFAULT_DOSES_PER_VIAL: u32 = 5;

/// Plain session defaults: three vials of five doses and a cap of fifteen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    pub daily_cap: usize,
    pub vial_count: usize,
    pub doses_per_vial: u32,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            daily_cap: DEFAULT_DAILY_CAP,
            vial_count: DEFAULT_VIAL_COUNT,
            doses_per_vial: DEFAULT_DOSES_PER_VIAL,
        }
    }
}

impl SessionConfig for SessionSettings {
    fn daily_cap(&self) -> usize {
        self.daily_cap
    }

    fn vial_count(&self) -> usize {
        self.vial_count
    }

    fn doses_per_vial(&self) -> u32 {
        self.doses_per_vial
    }
}

/// Everything one vaccination day owns: the line, the vials and the running total.
#[derive(Debug, Clone)]
pub struct SessionState {
    queue: PersonQueue,
    stack: VialStack,
    vaccinated_count: usize,
    daily_cap: usize,
}

impl SessionState {
    pub fn from_config<C: SessionConfig>(config: &C) -> Result<Self> {
        let stack = VialStack::with_vials(config.vial_count(), config.doses_per_vial())?;
        tracing::info!(
            "Session opened with {} vials of {} doses, daily cap {}",
            config.vial_count(),
            config.doses_per_vial(),
            config.daily_cap()
        );

        Ok(Self {
            queue: PersonQueue::new(),
            stack,
            vaccinated_count: 0,
            daily_cap: config.daily_cap(),
        })
    }

    /// Rejects identifiers that are not exactly 11 digits; duplicates are allowed.
    pub fn add_person(&mut self, identifier: &str, name: &str, age: u32) -> Result<()> {
        let id = match checked_identifier(identifier) {
            Ok(id) => id,
            Err(e) => {
                tracing::warn!("Rejected person '{}': {}", name, e);
                return Err(e);
            }
        };
        self.queue.enqueue(id, name, age);
        tracing::info!("Added {} to the queue ({} waiting)", name, self.queue.len());
        Ok(())
    }

    pub fn remove_person(&mut self) -> Option<Person> {
        let removed = self.queue.dequeue();
        match &removed {
            Some(person) => tracing::info!("Removed {} from the queue", person.name),
            None => tracing::debug!("Remove requested on an empty queue"),
        }
        removed
    }

    pub fn list_people(&self) -> Vec<&Person> {
        self.queue.snapshot().collect()
    }

    pub fn vaccinate_batch(&mut self, daily_cap: usize) -> BatchOutcome {
        VaccinationEngine::new(daily_cap).run_batch(
            &mut self.queue,
            &mut self.stack,
            &mut self.vaccinated_count,
        )
    }

    /// Runs a batch against the cap the session was opened with.
    pub fn vaccinate(&mut self) -> BatchOutcome {
        self.vaccinate_batch(self.daily_cap)
    }

    pub fn report_total(&self) -> usize {
        self.vaccinated_count
    }

    pub fn add_vial(&mut self, doses: u32) -> Result<()> {
        self.stack.push(doses)
    }

    pub fn daily_cap(&self) -> usize {
        self.daily_cap
    }

    pub fn remaining_doses(&self) -> u64 {
        self.stack.total_doses()
    }

    pub fn vial_count(&self) -> usize {
        self.stack.len()
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }
}
