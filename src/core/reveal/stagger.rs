//! Stagger position of a DOM element among its revealing siblings

use super::RevealOptions;

/// What an element's parent contributes to its stagger
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiblingGroup<'a> {
    /// For each sibling before the element, in document order, whether it
    /// carries `data-reveal`
    pub preceding: Vec<bool>,
    /// Raw `data-reveal-stagger` value of the parent
    pub stagger_attr: Option<&'a str>,
}

impl<'a> SiblingGroup<'a> {
    pub fn new(preceding: impl IntoIterator<Item = bool>, stagger_attr: Option<&'a str>) -> Self {
        Self {
            preceding: preceding.into_iter().collect(),
            stagger_attr,
        }
    }
}

/// Parse a `data-reveal-stagger` value: a whole number of milliseconds
pub fn parse_stagger_step(raw: &str) -> Option<u32> {
    match raw.trim().parse::<u32>() {
        Ok(step) => Some(step),
        Err(_) => {
            tracing::warn!(value = raw, "ignoring invalid stagger step");
            None
        }
    }
}

/// Stagger index and effective options for an element.
///
/// The index counts only revealing siblings before the element. A valid
/// parent stagger step replaces `options.stagger_step_ms`; an element
/// without a parent sits at index 0 with `options` unchanged.
pub fn stagger_for(parent: Option<&SiblingGroup<'_>>, options: &RevealOptions) -> (usize, RevealOptions) {
    let Some(parent) = parent else {
        return (0, options.clone());
    };

    let index = parent.preceding.iter().filter(|reveals| **reveals).count();
    let options = match parent.stagger_attr.and_then(parse_stagger_step) {
        Some(step) => options.clone().stagger_step_ms(step),
        None => options.clone(),
    };
    (index, options)
}
