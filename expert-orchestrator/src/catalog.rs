//! Fixed registry of the twelve specialty advisors
//!
//! The rendered prompt, the output schema, and the default decision map all
//! derive from this table; catalog membership is the single source of truth
//! for which decision keys exist.

/// A medical-specialty advisory role evaluated for relevance to a care plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpertDescriptor {
    /// Stable symbolic key used in decision maps and the output schema
    pub id: &'static str,
    /// Display name used in the rendered prompt
    pub display_name: &'static str,
    /// One-line focus description used in the rendered prompt
    pub display_focus: &'static str,
}

/// The fixed, ordered expert catalog. Never mutated.
pub const EXPERT_CATALOG: [ExpertDescriptor; 12] = [
    ExpertDescriptor {
        id: "diabetes_specialist",
        display_name: "Certified Diabetes Care and Education Specialist",
        display_focus: "diabetes management, education, and support",
    },
    ExpertDescriptor {
        id: "allergies_expert",
        display_name: "Allergies Expert",
        display_focus: "allergy diagnosis, treatment, and management",
    },
    ExpertDescriptor {
        id: "kidney_expert",
        display_name: "National Kidney Foundation Expert",
        display_focus: "kidney health, disease prevention, and management",
    },
    ExpertDescriptor {
        id: "insurance_expert",
        display_name: "Insurance Expert",
        display_focus: "healthcare coverage, claims, and financial planning",
    },
    ExpertDescriptor {
        id: "nutritionist",
        display_name: "Registered Dietitian Nutritionist (RDN)",
        display_focus: "nutrition, diet planning, and nutritional therapy",
    },
    ExpertDescriptor {
        id: "ophthalmologist",
        display_name: "Ophthalmologist Expert",
        display_focus: "eye health, vision care, and eye disease management",
    },
    ExpertDescriptor {
        id: "podiatrist",
        display_name: "Podiatrist Expert",
        display_focus: "foot and ankle health, particularly for diabetes-related complications",
    },
    ExpertDescriptor {
        id: "hospital_care_team",
        display_name: "Hospital Care Team",
        display_focus: "inpatient care coordination and management",
    },
    ExpertDescriptor {
        id: "ada_expert",
        display_name: "American Diabetes Association (ADA) Expert",
        display_focus: "diabetes research, guidelines, and best practices",
    },
    ExpertDescriptor {
        id: "social_determinants_expert",
        display_name: "Social Determinants of Health Expert",
        display_focus: "social and environmental factors affecting health",
    },
    ExpertDescriptor {
        id: "physical_therapist",
        display_name: "Physical Therapist Expert",
        display_focus: "mobility, exercise, and rehabilitation",
    },
    ExpertDescriptor {
        id: "pharmacist",
        display_name: "Pharmacist Expert",
        display_focus: "medication management, drug interactions, and adherence",
    },
];

/// Iterate the stable ids in catalog order
pub fn expert_ids() -> impl Iterator<Item = &'static str> {
    EXPERT_CATALOG.iter().map(|expert| expert.id)
}
