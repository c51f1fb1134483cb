use crate::domain::model::Vial;
use crate::utils::error::Result;
use crate::utils::validation::validate_positive_number;

/// LIFO pile of vials. The last vial pushed is the one in use.
#[derive(Debug, Default, Clone)]
pub struct VialStack {
    vials: Vec<Vial>,
}

impl VialStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes `count` vials holding `doses` each.
    pub fn with_vials(count: usize, doses: u32) -> Result<Self> {
        let mut stack = Self::new();
        for _ in 0..count {
            stack.push(doses)?;
        }
        Ok(stack)
    }

    /// A vial with no doses could never be consumed, so it is rejected.
    pub fn push(&mut self, doses: u32) -> Result<()> {
        validate_positive_number("doses", doses as usize, 1)?;
        self.vials.push(Vial::new(doses));
        tracing::debug!("Pushed vial with {} doses (stack height {})", doses, self.vials.len());
        Ok(())
    }

    pub fn pop(&mut self) -> Option<Vial> {
        self.vials.pop()
    }

    pub fn peek(&self) -> Option<&Vial> {
        self.vials.last()
    }

    pub fn peek_mut(&mut self) -> Option<&mut Vial> {
        self.vials.last_mut()
    }

    pub fn total_doses(&self) -> u64 {
        self.vials.iter().map(|v| u64::from(v.doses)).sum()
    }

    pub fn len(&self) -> usize {
        self.vials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vials.is_empty()
    }
}
