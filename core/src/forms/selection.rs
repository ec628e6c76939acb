use crate::error::ValidationError;
use crate::forms::schema::FieldSpec;

/// Applies a checkbox change to a group, refusing a selection that would go
/// past the group's maximum. The caller reverts the checkbox on `Err`.
pub fn toggle_selection(
    field: &FieldSpec,
    current: &[String],
    option: &str,
    checked: bool,
) -> Result<Vec<String>, ValidationError> {
    let mut next = current.to_vec();
    if !checked {
        next.retain(|item| item != option);
        return Ok(next);
    }
    if next.iter().any(|item| item == option) {
        return Ok(next);
    }
    if let Some(rule) = field.group {
        if next.len() >= rule.max {
            return Err(ValidationError::GroupCardinality {
                group: field.name.to_string(),
                actual: next.len() + 1,
                min: rule.min,
                max: rule.max,
            });
        }
    }
    next.push(option.to_string());
    Ok(next)
}

/// Notice shown when a selection is refused.
pub fn cap_message(field: &FieldSpec) -> String {
    match field.group {
        Some(rule) => format!(
            "You can select up to {} {}.",
            rule.max,
            field.label.to_lowercase()
        ),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::catalog::{REGISTRATION, VOLUNTEER};
    use pretty_assertions::assert_eq;

    fn categories() -> &'static FieldSpec {
        REGISTRATION.field("participantCategories").unwrap()
    }

    fn picked(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_third_selection_is_accepted() {
        let current = picked(&["developer", "designer"]);
        let next = toggle_selection(categories(), &current, "founder", true);
        assert_eq!(next, Ok(picked(&["developer", "designer", "founder"])));
    }

    #[test]
    fn test_fourth_selection_is_refused() {
        let current = picked(&["developer", "designer", "founder"]);
        let err = toggle_selection(categories(), &current, "student", true).unwrap_err();

        assert_eq!(
            err,
            ValidationError::GroupCardinality {
                group: "participantCategories".to_string(),
                actual: 4,
                min: 1,
                max: 3,
            }
        );
        assert_eq!(cap_message(categories()), "You can select up to 3 participant categories.");
    }

    #[test]
    fn test_unchecking_keeps_order() {
        let current = picked(&["developer", "designer", "founder"]);
        let next = toggle_selection(categories(), &current, "designer", false).unwrap();
        assert_eq!(next, picked(&["developer", "founder"]));

        let again = toggle_selection(categories(), &next, "investor", true).unwrap();
        assert_eq!(again, picked(&["developer", "founder", "investor"]));
    }

    #[test]
    fn test_uncapped_groups_accept_everything() {
        let availability = VOLUNTEER.field("availability").unwrap();
        let current = picked(&["setup", "day1"]);
        let next = toggle_selection(availability, &current, "day2", true).unwrap();
        assert_eq!(next.len(), 3);
        assert_eq!(cap_message(availability), "");
    }

    #[test]
    fn test_rechecking_is_a_no_op() {
        let current = picked(&["developer"]);
        let next = toggle_selection(categories(), &current, "developer", true).unwrap();
        assert_eq!(next, current);
    }
}
