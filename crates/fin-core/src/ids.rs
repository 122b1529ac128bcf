//! Record identifiers.
//!
//! Client-side tags for income entries. Uniqueness is probabilistic; these are
//! not security tokens.

use uuid::Uuid;

/// Generate a random version-4 GUID in lowercase `8-4-4-4-12` form.
#[must_use]
pub fn generate_guid() -> String {
    Uuid::new_v4().hyphenated().to_string()
}

/// Check that `value` has the shape produced by [`generate_guid`].
#[must_use]
pub fn is_guid(value: &str) -> bool {
    const GROUPS: [usize; 5] = [8, 4, 4, 4, 12];

    let groups: Vec<&str> = value.split('-').collect();
    if groups.len() != GROUPS.len() {
        return false;
    }
    let shaped = groups.iter().zip(GROUPS).all(|(group, len)| {
        group.len() == len
            && group
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
    });

    shaped && groups[2].starts_with('4') && groups[3].starts_with(['8', '9', 'a', 'b'])
}
