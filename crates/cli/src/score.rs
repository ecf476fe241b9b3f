// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scoring.

use serde::Serialize;

/// Points lost per error.
pub const ERROR_PENALTY: i64 = 15;

/// Points lost per warning.
pub const WARNING_PENALTY: i64 = 5;

/// Score in `[0, 100]` from finding counts.
pub fn score(errors: usize, warnings: usize) -> u8 {
    let count = |n: usize| i64::try_from(n).unwrap_or(i64::MAX);
    let penalty = count(errors)
        .saturating_mul(ERROR_PENALTY)
        .saturating_add(count(warnings).saturating_mul(WARNING_PENALTY));
    100i64.saturating_sub(penalty).clamp(0, 100) as u8
}

/// Status tier shown next to the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Below 50.
    NeedsImprovement,
    /// 50 to 79.
    Good,
    /// 80 and above.
    Strong,
}

impl Status {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..50 => Status::NeedsImprovement,
            50..80 => Status::Good,
            _ => Status::Strong,
        }
    }

    /// Status line text.
    pub fn label(self) -> &'static str {
        match self {
            Status::NeedsImprovement => "Needs improvement (fix errors first, then warnings)",
            Status::Good => "Good - address warnings to reach 80+",
            Status::Strong => "Strong",
        }
    }
}

#[cfg(test)]
#[path = "score_tests.rs"]
mod tests;
