use serde::{Deserialize, Serialize};
use std::fmt;
use tabled::Tabled;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Tabled)]
pub struct Person {
    #[tabled(rename = "CPF", display_with = "display_cpf")]
    pub id: u64,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Age")]
    pub age: u32,
}

impl Person {
    pub fn new(id: u64, name: impl Into<String>, age: u32) -> Self {
        Self {
            id,
            name: name.into(),
            age,
        }
    }
}

// Leading zeros are lost in the numeric form; restore them for display.
fn display_cpf(id: &u64) -> String {
    format!("{:011}", id)
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CPF: {:011}, Name: {}, Age: {}", self.id, self.name, self.age)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vial {
    pub doses: u32,
}

impl Vial {
    pub fn new(doses: u32) -> Self {
        Self { doses }
    }

    pub fn is_empty(&self) -> bool {
        self.doses == 0
    }
}

/// Why a vaccination batch stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationReason {
    /// The daily cap was reached. Takes precedence when several conditions hold at once.
    CapReached,
    StackEmpty,
    QueueEmpty,
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapReached => write!(f, "cap_reached"),
            Self::StackEmpty => write!(f, "stack_empty"),
            Self::QueueEmpty => write!(f, "queue_empty"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchOutcome {
    /// People vaccinated in this batch, in queue order.
    pub vaccinated: Vec<Person>,
    pub reason: TerminationReason,
}

impl BatchOutcome {
    pub fn vaccinated_names(&self) -> Vec<&str> {
        self.vaccinated.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn cap_reached(&self) -> bool {
        self.reason == TerminationReason::CapReached
    }
}
