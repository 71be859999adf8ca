//! Text rendering for tool results
//!
//! Numbers are shown with thousands separators and a fixed number of
//! decimals; the libraries never round.

use tangga_quiz::{GradeResult, QuizProblem};
use tangga_units::{Comparison, Quantity};

/// Format with `decimals` places and comma thousands separators
pub fn format_number(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // Skip the sign when rounding leaves only zeros.
    let negative = value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0');

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// The question shown to the learner
pub fn problem_prompt(problem: &QuizProblem) -> String {
    format!(
        "What is {} {} in {}?",
        problem.source_value, problem.source.name, problem.target.name
    )
}

/// Feedback line after grading
pub fn grade_feedback(problem: &QuizProblem, grade: &GradeResult, decimals: usize) -> String {
    let answer = format!("{} {}", format_number(grade.expected, decimals), problem.target.name);
    if grade.correct {
        format!("Correct! The answer is {}.", answer)
    } else {
        format!("Not quite. The correct answer is {}.", answer)
    }
}

/// "5 km is roughly 47.6 × football pitch"
pub fn comparison_sentence(quantity: &Quantity, comparison: &Comparison, decimals: usize) -> String {
    format!(
        "{} {} is roughly {} × {}",
        format_number(quantity.value, decimals),
        quantity.unit.name,
        format_number(comparison.count, 1),
        comparison.reference
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tangga_units::{compare, Domain};

    #[test]
    fn test_format_number_grouping() {
        assert_eq!(format_number(5000.0, 4), "5,000.0000");
        assert_eq!(format_number(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_number(999.0, 0), "999");
        assert_eq!(format_number(0.001, 4), "0.0010");
    }

    #[test]
    fn test_format_number_negative() {
        assert_eq!(format_number(-1500.5, 1), "-1,500.5");
        assert_eq!(format_number(-0.00001, 4), "0.0000");
    }

    #[test]
    fn test_problem_prompt() {
        assert_eq!(problem_prompt(&QuizProblem::default()), "What is 5 km in m?");
    }

    #[test]
    fn test_grade_feedback() {
        let p = QuizProblem::default();
        assert_eq!(
            grade_feedback(&p, &p.grade(5000.0), 4),
            "Correct! The answer is 5,000.0000 m."
        );
        assert_eq!(
            grade_feedback(&p, &p.grade(1.0), 0),
            "Not quite. The correct answer is 5,000 m."
        );
    }

    #[test]
    fn test_comparison_sentence() {
        let q = Quantity::new(Domain::Length, "km", 2.1).unwrap();
        let c = compare(Domain::Length, "km", 2.1).unwrap();
        assert_eq!(comparison_sentence(&q, &c, 1), "2.1 km is roughly 20.0 × football pitch");
    }
}
