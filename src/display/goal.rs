//! Goal display formatting

use crate::models::Goal;

/// Format goals with progress, one per line
pub fn format_goal_list(goals: &[Goal]) -> String {
    if goals.is_empty() {
        return "No goals found.".to_string();
    }

    let mut output = String::new();
    for goal in goals {
        let deadline = goal
            .deadline
            .map(|d| format!(" by {}", d.format("%Y-%m-%d")))
            .unwrap_or_default();
        output.push_str(&format!(
            "{}  [{}]\n  {} of {} ({:.1}%){}\n",
            goal.name,
            goal.id,
            goal.current_amount,
            goal.target_amount,
            goal.progress_percent(),
            deadline
        ));
    }
    output
}
