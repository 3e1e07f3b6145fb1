//! Prompt rendering for the expert-evaluation call
//!
//! Pure string templating over the care plan and the expert catalog. No
//! branching on plan content, no timestamps, no randomness: identical input
//! renders byte-identical prompt text.

use std::fmt::Write as _;

use crate::care_plan::CarePlan;
use crate::catalog::EXPERT_CATALOG;

/// System text sent alongside every evaluation prompt
pub const SYSTEM_PROMPT: &str = "You are a medical expert system that analyzes care plans \
     holistically to determine which specialized healthcare providers should be consulted \
     to optimize patient care.";

/// Render the evaluation prompt for a care plan.
///
/// Total for any well-formed plan, including the empty one: the plan is
/// embedded as pretty-printed JSON (an empty plan renders as `{}`),
/// followed by the full twelve-expert enumeration, the evaluation
/// instructions, and the output schema.
pub fn render_expert_prompt(care_plan: &CarePlan) -> String {
    let plan_json =
        serde_json::to_string_pretty(care_plan).unwrap_or_else(|_| "{}".to_string());

    let mut prompt = String::new();
    let _ = writeln!(
        prompt,
        "Analyze this care plan and determine which specialized healthcare providers should be consulted."
    );
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "Care Plan:");
    let _ = writeln!(prompt, "{plan_json}");
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "Consider the following experts:");
    for (position, expert) in EXPERT_CATALOG.iter().enumerate() {
        let _ = writeln!(
            prompt,
            "{}. {} (Focus: {})",
            position + 1,
            expert.display_name,
            expert.display_focus
        );
    }
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "For each expert:");
    let _ = writeln!(
        prompt,
        "- Analyze if their expertise would benefit the patient based on the care plan"
    );
    let _ = writeln!(prompt, "- Consider both explicit mentions and implicit needs");
    let _ = writeln!(
        prompt,
        "- Consider potential complications that might need their expertise"
    );
    let _ = writeln!(prompt, "- Think about how they could improve patient outcomes");
    let _ = writeln!(prompt);
    let _ = writeln!(
        prompt,
        "IMPORTANT: For the \"needed\" field, you must ONLY return a boolean value (true or false)."
    );
    let _ = writeln!(
        prompt,
        "Do not use strings, numbers, or any other data type for this field."
    );
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "Return your analysis in this JSON format:");
    let _ = writeln!(prompt, "{{");
    for (position, expert) in EXPERT_CATALOG.iter().enumerate() {
        let trailing = if position + 1 < EXPERT_CATALOG.len() { "," } else { "" };
        if position == 0 {
            let _ = writeln!(prompt, "    \"{}\": {{", expert.id);
            let _ = writeln!(prompt, "        \"needed\": true/false,");
            let _ = writeln!(prompt, "        \"reasons\": [");
            let _ = writeln!(
                prompt,
                "            \"Detailed reason 1 explaining why this expert would benefit the patient\","
            );
            let _ = writeln!(
                prompt,
                "            \"Detailed reason 2 with specific references to the care plan\""
            );
            let _ = writeln!(prompt, "        ]");
            let _ = writeln!(prompt, "    }}{trailing}");
        } else {
            let _ = writeln!(prompt, "    \"{}\": {{ ... }}{trailing}", expert.id);
        }
    }
    let _ = writeln!(prompt, "}}");
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "CRITICAL REQUIREMENTS:");
    let _ = writeln!(prompt, "- The \"needed\" field MUST be a boolean (true or false)");
    let _ = writeln!(prompt, "- Do NOT use strings like \"true\" or \"false\"");
    let _ = writeln!(prompt, "- Do NOT use numbers like 0 or 1");
    let _ = writeln!(prompt, "- Do NOT use any other values besides true or false");
    let _ = writeln!(prompt);
    let _ = write!(
        prompt,
        "Ensure you provide an entry for each expert, even if they are not needed."
    );

    prompt
}
