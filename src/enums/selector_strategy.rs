/// One element-location strategy in a cascade. Cascades are ordered lists of
/// these, evaluated in sequence until one yields a match, so new fallback
/// strategies can be appended without touching existing ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorStrategy {
    /// Plain CSS selector.
    Css(&'static str),
    /// Elements matching `selector` whose own text nodes contain `needle`.
    TextContains {
        selector: &'static str,
        needle: &'static str,
    },
}
