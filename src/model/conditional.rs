//! Conditional styles - row predicates mapped to style overrides

use ratatui::style::Style;
use std::fmt;
use std::rc::Rc;

/// Predicate over a row
pub type RowPredicate<T> = Rc<dyn Fn(&T) -> bool>;

/// Where a conditional style gets its style from
pub enum StyleSource<T> {
    Fixed(Style),
    Derived(Rc<dyn Fn(&T) -> Style>),
}

impl<T> Clone for StyleSource<T> {
    fn clone(&self) -> Self {
        match self {
            StyleSource::Fixed(style) => StyleSource::Fixed(*style),
            StyleSource::Derived(f) => StyleSource::Derived(Rc::clone(f)),
        }
    }
}

/// A rule applied to every row (or cell) it matches
pub struct ConditionalStyle<T> {
    when: RowPredicate<T>,
    style: StyleSource<T>,
}

impl<T> Clone for ConditionalStyle<T> {
    fn clone(&self) -> Self {
        Self {
            when: Rc::clone(&self.when),
            style: self.style.clone(),
        }
    }
}

impl<T> fmt::Debug for ConditionalStyle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = match &self.style {
            StyleSource::Fixed(style) => format!("{:?}", style),
            StyleSource::Derived(_) => "<derived>".to_string(),
        };
        f.debug_struct("ConditionalStyle")
            .field("style", &style)
            .finish_non_exhaustive()
    }
}

impl<T> ConditionalStyle<T> {
    pub fn new(when: impl Fn(&T) -> bool + 'static, style: Style) -> Self {
        Self {
            when: Rc::new(when),
            style: StyleSource::Fixed(style),
        }
    }

    /// Rule whose style is computed from the matched row
    pub fn derived(
        when: impl Fn(&T) -> bool + 'static,
        style: impl Fn(&T) -> Style + 'static,
    ) -> Self {
        Self {
            when: Rc::new(when),
            style: StyleSource::Derived(Rc::new(style)),
        }
    }

    pub fn matches(&self, row: &T) -> bool {
        (self.when)(row)
    }

    pub fn style_for(&self, row: &T) -> Style {
        match &self.style {
            StyleSource::Fixed(style) => *style,
            StyleSource::Derived(f) => f(row),
        }
    }
}

/// Resolve the conditional style for a row
///
/// Rules are evaluated in order and the last matching rule wins. A row that
/// matches nothing gets the empty style.
pub fn get_conditional_style<T>(row: &T, rules: &[ConditionalStyle<T>]) -> Style {
    rules
        .iter()
        .filter(|rule| rule.matches(row))
        .last()
        .map(|rule| rule.style_for(row))
        .unwrap_or_default()
}
