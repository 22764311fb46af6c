//! Declarative pattern rules over averaged question responses.
//!
//! A rule fires only when every one of its bounds holds and, if it is scoped to
//! particular organization sizes, the respondent falls in one of them. Rule
//! tables are plain statics so each row can be audited and tested on its own.

use super::aggregate::ResponseSheet;
use super::domain::CompanySize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    AtLeast(f64),
    AtMost(f64),
}

impl Bound {
    fn holds(self, value: f64) -> bool {
        match self {
            Bound::AtLeast(min) => value >= min,
            Bound::AtMost(max) => value <= max,
        }
    }
}

/// Average of `questions` compared against `bound`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold {
    pub questions: &'static [&'static str],
    pub bound: Bound,
}

impl Threshold {
    pub const fn at_least(questions: &'static [&'static str], min: f64) -> Self {
        Self {
            questions,
            bound: Bound::AtLeast(min),
        }
    }

    pub const fn at_most(questions: &'static [&'static str], max: f64) -> Self {
        Self {
            questions,
            bound: Bound::AtMost(max),
        }
    }

    pub fn holds(&self, sheet: &ResponseSheet) -> bool {
        self.bound.holds(sheet.average(self.questions))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternRule {
    pub name: &'static str,
    pub sizes: Option<&'static [CompanySize]>,
    pub all_of: &'static [Threshold],
    pub text: &'static str,
}

impl PatternRule {
    pub fn matches(&self, sheet: &ResponseSheet, size: CompanySize) -> bool {
        let size_applies = self
            .sizes
            .map(|sizes| sizes.contains(&size))
            .unwrap_or(true);
        size_applies && self.all_of.iter().all(|threshold| threshold.holds(sheet))
    }
}

/// Texts of matching rules in declaration order, at most `limit` of them.
pub fn fire<'a>(
    rules: &'a [PatternRule],
    sheet: &'a ResponseSheet,
    size: CompanySize,
    limit: usize,
) -> impl Iterator<Item = &'static str> + 'a {
    rules
        .iter()
        .filter(move |rule| rule.matches(sheet, size))
        .map(|rule| rule.text)
        .take(limit)
}
