//! Input grid types, shaped like the TestGrid state export.
//!
//! A grid is one dashboard tab: columns are builds ordered by time, rows are tests.
//! Row results are run-length encoded as a flat `[code, count, code, count, ...]` list.

use serde::{Deserialize, Serialize};

use crate::rle::RunLengthResults;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(default)]
    pub rows: Vec<Row>,
}

/// One build/run event. `started` shares its unit with the analysis window (ms in TestGrid).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Column {
    #[serde(default)]
    pub started: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub name: String,
    #[serde(default)]
    pub results: Vec<i32>,
    /// One entry per decoded position; empty when there is nothing to report.
    #[serde(default)]
    pub messages: Vec<String>,
}

impl Row {
    pub fn decoded_results(&self) -> RunLengthResults<'_> {
        RunLengthResults::new(&self.results)
    }

    pub fn message(&self, index: usize) -> &str {
        self.messages.get(index).map(String::as_str).unwrap_or("")
    }
}

/// Row result codes as stored in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowResult {
    NoResult,
    Pass,
    PassWithErrors,
    PassWithSkips,
    Running,
    CategorizedAbort,
    Unknown,
    Cancel,
    Blocked,
    TimedOut,
    CategorizedFail,
    BuildFail,
    Fail,
    Flaky,
    ToolFail,
    BuildPassed,
}

impl RowResult {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::NoResult,
            1 => Self::Pass,
            2 => Self::PassWithErrors,
            3 => Self::PassWithSkips,
            4 => Self::Running,
            5 => Self::CategorizedAbort,
            7 => Self::Cancel,
            8 => Self::Blocked,
            9 => Self::TimedOut,
            10 => Self::CategorizedFail,
            11 => Self::BuildFail,
            12 => Self::Fail,
            13 => Self::Flaky,
            14 => Self::ToolFail,
            15 => Self::BuildPassed,
            _ => Self::Unknown,
        }
    }

    pub fn code(self) -> i32 {
        match self {
            Self::NoResult => 0,
            Self::Pass => 1,
            Self::PassWithErrors => 2,
            Self::PassWithSkips => 3,
            Self::Running => 4,
            Self::CategorizedAbort => 5,
            Self::Unknown => 6,
            Self::Cancel => 7,
            Self::Blocked => 8,
            Self::TimedOut => 9,
            Self::CategorizedFail => 10,
            Self::BuildFail => 11,
            Self::Fail => 12,
            Self::Flaky => 13,
            Self::ToolFail => 14,
            Self::BuildPassed => 15,
        }
    }

    /// Reduces any result to `Pass`, `Fail`, `Flaky` or `NoResult`.
    pub fn coalesce(self, ignore_running: bool) -> Self {
        use RowResult::*;
        match self {
            NoResult | Unknown | Cancel | Blocked => NoResult,
            Running if ignore_running => NoResult,
            Flaky => Flaky,
            Pass | PassWithErrors | PassWithSkips | BuildPassed => Pass,
            Running | Fail | TimedOut | CategorizedFail | BuildFail | ToolFail
            | CategorizedAbort => Fail,
        }
    }
}
