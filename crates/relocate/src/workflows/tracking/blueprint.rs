use std::collections::BTreeSet;

use super::domain::{NewProgressItem, Priority, ProgressStatus, StepId, Subtask};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlueprintError {
    #[error("timeline step id {0} appears more than once")]
    DuplicateStep(StepId),
}

#[derive(Debug, Clone)]
pub struct StepTemplate {
    pub id: StepId,
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    /// Suggested week relative to the start of planning.
    pub week: u32,
}

/// Canonical relocation milestones. Ids and order are fixed here and cannot be
/// changed through the API.
#[derive(Debug)]
pub struct TimelineBlueprint {
    steps: Vec<StepTemplate>,
}

impl TimelineBlueprint {
    pub fn standard() -> Self {
        Self {
            steps: standard_steps(),
        }
    }

    /// Build a custom timeline. Step ids must be unique.
    pub fn from_steps(steps: Vec<StepTemplate>) -> Result<Self, BlueprintError> {
        let mut seen = BTreeSet::new();
        if let Some(step) = steps.iter().find(|step| !seen.insert(step.id)) {
            return Err(BlueprintError::DuplicateStep(step.id));
        }
        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[StepTemplate] {
        &self.steps
    }

    pub fn step(&self, id: StepId) -> Option<&StepTemplate> {
        self.steps.iter().find(|step| step.id == id)
    }

    pub fn steps_for_category(&self, category: &str) -> Vec<&StepTemplate> {
        self.steps
            .iter()
            .filter(|step| step.category == category)
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct ItemTemplate {
    pub category: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub priority: &'static str,
    pub subtasks: Vec<&'static str>,
}

impl ItemTemplate {
    pub fn instantiate(&self, user_id: &str) -> NewProgressItem {
        NewProgressItem {
            user_id: user_id.to_string(),
            category: self.category.to_string(),
            title: self.title.to_string(),
            description: Some(self.description.to_string()),
            status: ProgressStatus::NotStarted,
            priority: Some(Priority::Label(self.priority.to_string())),
            subtasks: self.subtasks.iter().map(|label| Subtask::open(*label)).collect(),
        }
    }
}

/// Default checklist handed to a user on first use.
#[derive(Debug)]
pub struct ChecklistBlueprint {
    items: Vec<ItemTemplate>,
}

impl ChecklistBlueprint {
    pub fn standard() -> Self {
        Self {
            items: standard_items(),
        }
    }

    pub fn items(&self) -> &[ItemTemplate] {
        &self.items
    }
}

fn standard_steps() -> Vec<StepTemplate> {
    vec![
        StepTemplate {
            id: StepId(1),
            title: "Define relocation goals",
            category: "Planning",
            description: "Agree on target cities, budget range, and the latest acceptable move date.",
            week: 0,
        },
        StepTemplate {
            id: StepId(2),
            title: "Compare destination cities",
            category: "Planning",
            description: "Review cost of living, job market, and remote work scores for each shortlisted city.",
            week: 1,
        },
        StepTemplate {
            id: StepId(3),
            title: "Confirm visa route",
            category: "Documentation",
            description: "Pick the visa category that matches the employment situation and check eligibility.",
            week: 2,
        },
        StepTemplate {
            id: StepId(4),
            title: "Gather identity and civil documents",
            category: "Documentation",
            description: "Passports, birth and marriage certificates, and certified translations where required.",
            week: 3,
        },
        StepTemplate {
            id: StepId(5),
            title: "Secure employment or remote work approval",
            category: "Employment",
            description: "Signed offer letter or written employer approval for working from the new location.",
            week: 4,
        },
        StepTemplate {
            id: StepId(6),
            title: "Submit visa application",
            category: "Documentation",
            description: "File the application, pay fees, and book any biometrics appointment.",
            week: 5,
        },
        StepTemplate {
            id: StepId(7),
            title: "Set relocation budget",
            category: "Finances",
            description: "Estimate moving, deposit, and first-month costs; set aside an emergency buffer.",
            week: 5,
        },
        StepTemplate {
            id: StepId(8),
            title: "Find housing",
            category: "Housing",
            description: "Short-list neighbourhoods, arrange viewings, and sign a lease or temporary stay.",
            week: 7,
        },
        StepTemplate {
            id: StepId(9),
            title: "Book moving service",
            category: "Logistics",
            description: "Collect quotes, confirm the moving date, and book insurance for high-value items.",
            week: 8,
        },
        StepTemplate {
            id: StepId(10),
            title: "Open local bank account",
            category: "Finances",
            description: "Open an account that works before arrival or within the first week.",
            week: 9,
        },
        StepTemplate {
            id: StepId(11),
            title: "Move day",
            category: "Logistics",
            description: "Supervise loading, keep essentials with you, and confirm delivery window.",
            week: 10,
        },
        StepTemplate {
            id: StepId(12),
            title: "Register locally",
            category: "Settling In",
            description: "Register address, health coverage, and tax residence after arrival.",
            week: 11,
        },
    ]
}

fn standard_items() -> Vec<ItemTemplate> {
    vec![
        ItemTemplate {
            category: "Documentation",
            title: "Passport validity",
            description: "Passports valid for at least six months beyond the planned move date.",
            priority: "high",
            subtasks: vec![
                "Check expiry dates for every household member",
                "Book renewal appointment if needed",
            ],
        },
        ItemTemplate {
            category: "Documentation",
            title: "Visa paperwork",
            description: "Documents required by the chosen visa route.",
            priority: "high",
            subtasks: vec![
                "Download the official checklist",
                "Collect employment letter",
                "Get certified translations",
            ],
        },
        ItemTemplate {
            category: "Housing",
            title: "Temporary accommodation",
            description: "A place to stay for the first weeks after arrival.",
            priority: "medium",
            subtasks: vec!["Compare short-term rentals", "Book first month"],
        },
        ItemTemplate {
            category: "Housing",
            title: "Long-term lease",
            description: "Permanent rental in the chosen neighbourhood.",
            priority: "medium",
            subtasks: vec![
                "Prepare references",
                "Arrange viewings",
                "Review lease terms",
            ],
        },
        ItemTemplate {
            category: "Finances",
            title: "Moving budget",
            description: "Full cost estimate including deposits and buffer.",
            priority: "high",
            subtasks: vec!["Get three moving quotes", "Set aside deposit funds"],
        },
        ItemTemplate {
            category: "Logistics",
            title: "Moving service booking",
            description: "Movers or self-move plan confirmed for the moving date.",
            priority: "medium",
            subtasks: vec![
                "Inventory belongings",
                "Choose service type",
                "Confirm pickup date",
            ],
        },
        ItemTemplate {
            category: "Employment",
            title: "Remote work arrangement",
            description: "Written confirmation that the role can continue from the new location.",
            priority: "high",
            subtasks: vec!["Discuss with manager", "Check payroll and tax implications"],
        },
        ItemTemplate {
            category: "Settling In",
            title: "Local registrations",
            description: "Address, healthcare, and utilities registered after arrival.",
            priority: "low",
            subtasks: vec![
                "Register address",
                "Enrol in healthcare",
                "Set up utilities",
            ],
        },
    ]
}
