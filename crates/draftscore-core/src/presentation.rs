//! Score presentation: letter grade, display color and label.
//!
//! Boundaries are inclusive on the lower edge (`grade(90)` is `A`).

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ScoreColor {
    Green,
    Yellow,
    Orange,
    Red,
}

impl fmt::Display for ScoreColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ScoreColor::Green => "green",
            ScoreColor::Yellow => "yellow",
            ScoreColor::Orange => "orange",
            ScoreColor::Red => "red",
        };
        f.write_str(s)
    }
}

pub fn grade(score: u32) -> Grade {
    match score {
        90.. => Grade::A,
        80..=89 => Grade::B,
        70..=79 => Grade::C,
        60..=69 => Grade::D,
        _ => Grade::F,
    }
}

pub fn score_color(score: u32) -> ScoreColor {
    match score {
        70.. => ScoreColor::Green,
        50..=69 => ScoreColor::Yellow,
        30..=49 => ScoreColor::Orange,
        _ => ScoreColor::Red,
    }
}

pub fn score_label(score: u32) -> &'static str {
    match score {
        80.. => "Excellent",
        70..=79 => "Ready",
        50..=69 => "Needs Work",
        30..=49 => "Draft",
        _ => "Incomplete",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(grade(100), Grade::A);
        assert_eq!(grade(95), Grade::A);
        assert_eq!(grade(90), Grade::A);
        assert_eq!(grade(89), Grade::B);
        assert_eq!(grade(80), Grade::B);
        assert_eq!(grade(70), Grade::C);
        assert_eq!(grade(60), Grade::D);
        assert_eq!(grade(59), Grade::F);
        assert_eq!(grade(55), Grade::F);
        assert_eq!(grade(0), Grade::F);
    }

    #[test]
    fn test_color_boundaries() {
        assert_eq!(score_color(70), ScoreColor::Green);
        assert_eq!(score_color(69), ScoreColor::Yellow);
        assert_eq!(score_color(50), ScoreColor::Yellow);
        assert_eq!(score_color(30), ScoreColor::Orange);
        assert_eq!(score_color(29), ScoreColor::Red);
        assert_eq!(score_color(20), ScoreColor::Red);
    }

    #[test]
    fn test_label_boundaries() {
        assert_eq!(score_label(80), "Excellent");
        assert_eq!(score_label(79), "Ready");
        assert_eq!(score_label(70), "Ready");
        assert_eq!(score_label(50), "Needs Work");
        assert_eq!(score_label(30), "Draft");
        assert_eq!(score_label(29), "Incomplete");
    }

    #[test]
    fn test_serialized_names() {
        assert_eq!(serde_json::to_string(&Grade::B).unwrap(), "\"B\"");
        assert_eq!(serde_json::to_string(&ScoreColor::Orange).unwrap(), "\"orange\"");
        assert_eq!(ScoreColor::Red.to_string(), "red");
    }
}
