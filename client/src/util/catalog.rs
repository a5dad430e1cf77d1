//! Fixed option lists for the record forms.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

/// One `<option>`: the submitted value and its label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

const fn choice(value: &'static str, label: &'static str) -> Choice {
    Choice { value, label }
}

pub const SPECIES_TYPES: &[Choice] = &[
    choice("Whale", "Whale"),
    choice("Dolphin", "Dolphin"),
    choice("Seal", "Seal"),
    choice("Sea Lion", "Sea Lion"),
    choice("Sea Turtle", "Sea Turtle"),
    choice("Shark", "Shark"),
    choice("Ray", "Ray"),
    choice("Fish", "Fish"),
    choice("Seabird", "Seabird"),
    choice("Other", "Other"),
];

pub const ACTION_TYPES: &[Choice] = &[
    choice("beach_cleanup", "Beach Cleanup"),
    choice("citizen_science", "Citizen Science"),
    choice("education", "Education"),
    choice("restoration", "Restoration"),
    choice("monitoring", "Monitoring"),
    choice("policy_advocacy", "Policy Advocacy"),
];

pub const WILDLIFE_ACTIVITY_LEVELS: &[Choice] = &[
    choice("high", "High"),
    choice("medium", "Medium"),
    choice("low", "Low"),
    choice("none", "None"),
];

pub const QUALITY_SCALE: &[Choice] = &[
    choice("1", "1 - Poor"),
    choice("2", "2 - Fair"),
    choice("3", "3 - Good"),
    choice("4", "4 - Very Good"),
    choice("5", "5 - Excellent"),
];

/// Display label for an action type; unknown values are title-cased.
pub fn action_type_label(value: &str) -> String {
    ACTION_TYPES
        .iter()
        .find(|c| c.value == value)
        .map_or_else(|| title_case(value), |c| c.label.to_owned())
}

/// Label for a 1-5 quality rating.
pub fn quality_label(rating: u8) -> &'static str {
    QUALITY_SCALE
        .get(usize::from(rating.clamp(1, 5)) - 1)
        .map_or("", |c| c.label)
}

fn title_case(raw: &str) -> String {
    raw.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
