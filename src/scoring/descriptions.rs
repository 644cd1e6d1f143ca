use crate::core::Tendency;

/// Canned interpretation for a (style, tendency) pair. Matching is
/// case-insensitive on the style name. None when no text exists.
pub fn describe(style: &str, tendency: Tendency) -> Option<&'static str> {
    use Tendency::{High, Low, Moderate};

    let text = match (style.trim().to_lowercase().as_str(), tendency) {
        ("transformational", High) => {
            "You naturally inspire people toward a shared vision and push for meaningful change."
        }
        ("transformational", Moderate) => {
            "You can rally people around a vision when the situation calls for it, though it is not your default mode."
        }
        ("transformational", Low) => {
            "You rarely lead through vision or big-picture change; you prefer concrete, immediate concerns."
        }
        ("transactional", High) => {
            "You lead through clear expectations, structured rewards, and accountability for results."
        }
        ("transactional", Moderate) => {
            "You use goals and incentives selectively, balancing structure with flexibility."
        }
        ("transactional", Low) => {
            "Formal targets and reward structures play little part in how you motivate others."
        }
        ("servant", High) => {
            "You put the growth and well-being of your team first and lead by removing obstacles for them."
        }
        ("servant", Moderate) => {
            "You support your team's needs when you can, while keeping your own priorities in view."
        }
        ("servant", Low) => {
            "Serving individual team members' development is not a primary driver of your leadership."
        }
        ("democratic", High) => {
            "You consistently involve the team in decisions and value consensus before acting."
        }
        ("democratic", Moderate) => {
            "You seek input on important decisions but are comfortable deciding alone when needed."
        }
        ("democratic", Low) => {
            "You seldom open decisions up to group input, preferring to keep direction in your own hands."
        }
        ("autocratic", High) => {
            "You take charge decisively, set direction yourself, and expect the team to execute."
        }
        ("autocratic", Moderate) => {
            "You assert direct control in some situations while leaving room for others to steer."
        }
        ("autocratic", Low) => {
            "Unilateral control is rarely your instinct; you distribute authority readily."
        }
        ("laissez-faire", High) => {
            "You give people wide autonomy and step in only when they ask for help."
        }
        ("laissez-faire", Moderate) => {
            "You delegate freely on familiar ground but keep closer oversight where the stakes are high."
        }
        ("laissez-faire", Low) => {
            "Hands-off delegation is uncomfortable for you; you stay actively involved in the work."
        }
        ("charismatic", High) => {
            "Your personal energy and conviction draw people in and carry them through uncertainty."
        }
        ("charismatic", Moderate) => {
            "You can turn on persuasive energy when it matters, without relying on it day to day."
        }
        ("charismatic", Low) => {
            "You persuade through substance rather than personal magnetism."
        }
        ("situational", High) => {
            "You read each person and situation and adjust your leadership approach to fit."
        }
        ("situational", Moderate) => {
            "You adapt your approach for clearly different situations but have a recognizable default style."
        }
        ("situational", Low) => {
            "You apply one consistent approach regardless of the person or the circumstances."
        }
        _ => return None,
    };
    Some(text)
}

/// Clearly-labeled substitute when no canned text exists for the pair.
pub fn placeholder(style: &str, tendency: Tendency) -> String {
    format!(
        "[No interpretation available yet for {} / {}]",
        style,
        tendency.label()
    )
}
