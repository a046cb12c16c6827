//! Run detection over a style array.

use crate::model::attributes::StyleMark;
use std::ops::Range;

/// Maximal `[start, end)` range sharing one style mark.
///
/// Every newline is a run of its own, so consecutive newlines never merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleRun {
    pub start: usize,
    pub end: usize,
    pub mark: StyleMark,
}

impl StyleRun {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

pub fn style_runs(marks: &[StyleMark]) -> Vec<StyleRun> {
    let mut runs: Vec<StyleRun> = Vec::new();
    for (index, &mark) in marks.iter().enumerate() {
        match runs.last_mut() {
            Some(run) if run.mark == mark && !mark.is_newline() => run.end = index + 1,
            _ => runs.push(StyleRun {
                start: index,
                end: index + 1,
                mark,
            }),
        }
    }
    runs
}
