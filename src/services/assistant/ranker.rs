use crate::models::Tool;

pub const MAX_ALTERNATIVES: usize = 3;

/// Primary pick plus up to three runners-up, taken in retrieval order.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<'a> {
    pub primary: &'a Tool,
    pub alternatives: &'a [Tool],
}

/// Slice the already sorted candidates. Ordering belongs to retrieval; nothing is
/// re-sorted here. `None` iff there are no candidates.
pub fn select(candidates: &[Tool], max_alternatives: usize) -> Option<Selection<'_>> {
    let (primary, rest) = candidates.split_first()?;
    let count = rest.len().min(max_alternatives.min(MAX_ALTERNATIVES));
    Some(Selection {
        primary,
        alternatives: &rest[..count],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(names: &[&str]) -> Vec<Tool> {
        names
            .iter()
            .map(|name| Tool {
                name: name.to_string(),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn empty_candidates_select_nothing() {
        assert!(select(&[], MAX_ALTERNATIVES).is_none());
    }

    #[test]
    fn single_candidate_has_no_alternatives() {
        let tools = named(&["Solo"]);
        let selection = select(&tools, MAX_ALTERNATIVES).unwrap();
        assert_eq!(selection.primary.name, "Solo");
        assert!(selection.alternatives.is_empty());
    }

    #[test]
    fn alternatives_never_exceed_three() {
        let tools = named(&["A", "B", "C", "D", "E", "F"]);
        let selection = select(&tools, 10).unwrap();
        assert_eq!(selection.primary.name, "A");
        let names: Vec<&str> = selection.alternatives.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["B", "C", "D"]);
    }

    #[test]
    fn order_is_preserved() {
        let tools = named(&["Z", "A"]);
        let selection = select(&tools, MAX_ALTERNATIVES).unwrap();
        assert_eq!(selection.primary.name, "Z");
        assert_eq!(selection.alternatives[0].name, "A");
    }
}
