//! Section ordering.
//!
//! Every function here leaves `order` as a dense 0-based sequence that
//! matches the position in the vector.

use crate::ids::SectionId;
use crate::section::{Direction, Section, SectionKind};

/// Move a section one step up or down, returning the reordered list.
///
/// Moving the first section up or the last section down returns the input
/// unchanged, as does an unknown id.
pub fn reorder(sections: &[Section], id: &SectionId, direction: Direction) -> Vec<Section> {
    let mut sections = sections.to_vec();
    move_section(&mut sections, id, direction);
    sections
}

/// Remove a section, returning the remaining sections reindexed from 0.
pub fn remove(sections: &[Section], id: &SectionId) -> Vec<Section> {
    let mut sections = sections.to_vec();
    remove_section(&mut sections, id);
    sections
}

/// In-place move. Returns `true` if the list changed.
pub fn move_section(sections: &mut Vec<Section>, id: &SectionId, direction: Direction) -> bool {
    normalize(sections);

    let Some(index) = sections.iter().position(|s| &s.id == id) else {
        return false;
    };

    let target = match direction {
        Direction::Up if index > 0 => index - 1,
        Direction::Down if index + 1 < sections.len() => index + 1,
        _ => return false,
    };

    sections.swap(index, target);
    reindex(sections);
    true
}

/// In-place removal. Returns `true` if a section was removed.
pub fn remove_section(sections: &mut Vec<Section>, id: &SectionId) -> bool {
    let before = sections.len();
    sections.retain(|s| &s.id != id);
    let removed = sections.len() != before;
    normalize(sections);
    removed
}

/// Append an empty section of the given kind and return its id.
pub fn add_section(sections: &mut Vec<Section>, kind: SectionKind) -> SectionId {
    normalize(sections);
    let section = Section::new(kind, sections.len());
    let id = section.id.clone();
    sections.push(section);
    id
}

/// Sort by `order` and reassign dense indices.
///
/// The sort is stable, so duplicate orders keep their relative position.
pub fn normalize(sections: &mut [Section]) {
    sections.sort_by_key(|s| s.order);
    reindex(sections);
}

/// Assign `order` from array position.
pub fn reindex(sections: &mut [Section]) {
    for (index, section) in sections.iter_mut().enumerate() {
        section.order = index;
    }
}

/// Sections sorted by `order`, without assuming the input is sorted.
pub fn sorted_by_order(sections: &[Section]) -> Vec<&Section> {
    let mut sorted: Vec<&Section> = sections.iter().collect();
    sorted.sort_by_key(|s| s.order);
    sorted
}

/// Whether `order` values match array positions exactly.
pub fn is_dense(sections: &[Section]) -> bool {
    sections.iter().enumerate().all(|(i, s)| s.order == i)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str, order: usize) -> Section {
        let mut s = Section::new(SectionKind::Text, order);
        s.id = SectionId::new(id);
        s
    }

    fn ids(sections: &[Section]) -> Vec<&str> {
        sections.iter().map(|s| s.id.as_str()).collect()
    }

    fn abc() -> Vec<Section> {
        vec![section("a", 0), section("b", 1), section("c", 2)]
    }

    #[test]
    fn test_reorder_up() {
        let result = reorder(&abc(), &SectionId::new("b"), Direction::Up);
        assert_eq!(ids(&result), ["b", "a", "c"]);
        assert_eq!(
            result.iter().map(|s| s.order).collect::<Vec<_>>(),
            [0, 1, 2]
        );
    }

    #[test]
    fn test_reorder_down() {
        let result = reorder(&abc(), &SectionId::new("a"), Direction::Down);
        assert_eq!(ids(&result), ["b", "a", "c"]);
        assert!(is_dense(&result));
    }

    #[test]
    fn test_boundaries_are_noops() {
        let original = abc();
        assert_eq!(reorder(&original, &SectionId::new("a"), Direction::Up), original);
        assert_eq!(reorder(&original, &SectionId::new("c"), Direction::Down), original);
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let original = abc();
        assert_eq!(reorder(&original, &SectionId::new("zz"), Direction::Up), original);
    }

    #[test]
    fn test_reorder_uses_current_order_not_array_position() {
        // Array is shuffled but orders are dense: c(0), a(1), b(2).
        let shuffled = vec![section("a", 1), section("b", 2), section("c", 0)];
        let result = reorder(&shuffled, &SectionId::new("a"), Direction::Up);
        assert_eq!(ids(&result), ["a", "c", "b"]);
        assert!(is_dense(&result));
    }

    #[test]
    fn test_remove_reindexes() {
        let result = remove(&abc(), &SectionId::new("a"));
        assert_eq!(ids(&result), ["b", "c"]);
        assert!(is_dense(&result));
    }

    #[test]
    fn test_remove_missing_reports_false() {
        let mut sections = abc();
        assert!(!remove_section(&mut sections, &SectionId::new("nope")));
        assert_eq!(sections.len(), 3);
    }

    #[test]
    fn test_add_appends_at_end() {
        let mut sections = abc();
        let id = add_section(&mut sections, SectionKind::Divider);
        assert_eq!(sections.len(), 4);
        assert_eq!(sections[3].id, id);
        assert_eq!(sections[3].order, 3);
        assert_eq!(sections[3].kind, SectionKind::Divider);
    }

    #[test]
    fn test_normalize_repairs_sparse_orders() {
        let mut sections = vec![section("a", 10), section("b", 3), section("c", 3)];
        normalize(&mut sections);
        assert_eq!(ids(&sections), ["b", "c", "a"]);
        assert!(is_dense(&sections));
    }

    #[test]
    fn test_dense_after_every_operation() {
        let mut sections = Vec::new();
        let mut added = Vec::new();
        for kind in SectionKind::SELECTABLE {
            added.push(add_section(&mut sections, kind));
            assert!(is_dense(&sections));
        }

        for id in &added {
            move_section(&mut sections, id, Direction::Down);
            assert!(is_dense(&sections));
            move_section(&mut sections, id, Direction::Up);
            assert!(is_dense(&sections));
        }

        for id in &added {
            remove_section(&mut sections, id);
            assert!(is_dense(&sections));
        }
        assert!(sections.is_empty());
    }
}
