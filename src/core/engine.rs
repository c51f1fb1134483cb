use crate::core::person_queue::PersonQueue;
use crate::core::vial_stack::VialStack;
use crate::domain::model::{BatchOutcome, TerminationReason};

pub const DEFAULT_DAILY_CAP: usize = 15;

/// Pairs the head of the queue with the vial on top of the stack until the
/// doses, the people or the daily cap run out.
#[derive(Debug, Clone, Copy)]
pub struct VaccinationEngine {
    daily_cap: usize,
}

impl VaccinationEngine {
    pub fn new(daily_cap: usize) -> Self {
        Self { daily_cap }
    }

    /// Runs one batch, bumping `vaccinated_count` once per dose given.
    ///
    /// The stop reason is checked cap first, then stack, then queue. When the
    /// last dose and the cap coincide the batch reports `CapReached`, and a
    /// call made with the cap already met vaccinates nobody and still reports
    /// `CapReached`.
    pub fn run_batch(
        &self,
        queue: &mut PersonQueue,
        stack: &mut VialStack,
        vaccinated_count: &mut usize,
    ) -> BatchOutcome {
        tracing::info!(
            "Starting vaccination batch: {} waiting, {} vials ({} doses), {}/{} vaccinated",
            queue.len(),
            stack.len(),
            stack.total_doses(),
            vaccinated_count,
            self.daily_cap
        );

        let mut vaccinated = Vec::new();

        while *vaccinated_count < self.daily_cap {
            // a vial drained through peek_mut outside the engine has no dose to give
            while stack.peek().is_some_and(|v| v.is_empty()) {
                stack.pop();
                tracing::debug!("Discarded an already empty vial ({} vials left)", stack.len());
            }

            let Some(vial) = stack.peek_mut() else { break };
            let Some(person) = queue.dequeue() else { break };

            vial.doses -= 1;
            let remaining = vial.doses;

            tracing::debug!("Vaccinated {} ({} doses left in vial)", person, remaining);
            vaccinated.push(person);

            if remaining == 0 {
                stack.pop();
                tracing::debug!("Vial emptied and discarded ({} vials left)", stack.len());
            }

            *vaccinated_count += 1;
        }

        let reason = if *vaccinated_count >= self.daily_cap {
            TerminationReason::CapReached
        } else if stack.is_empty() {
            TerminationReason::StackEmpty
        } else {
            TerminationReason::QueueEmpty
        };

        tracing::info!(
            "Batch finished: {} vaccinated, reason {}, total {}",
            vaccinated.len(),
            reason,
            vaccinated_count
        );
        if reason == TerminationReason::CapReached {
            tracing::warn!("Daily cap of {} vaccinations reached", self.daily_cap);
        }

        BatchOutcome { vaccinated, reason }
    }
}

impl Default for VaccinationEngine {
    fn default() -> Self {
        Self::new(DEFAULT_DAILY_CAP)
    }
}
