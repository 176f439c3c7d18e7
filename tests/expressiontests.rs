use MathQuizMini::core::expression::{self, Difficulty, Expression, Operator};

const SAMPLES: usize = 500;

fn add_sub_bound(difficulty: Difficulty) -> i64 {
    match difficulty {
        Difficulty::Easy => 100,
        Difficulty::Medium => 500,
        Difficulty::Hard => 1000,
    }
}

fn mul_bounds(difficulty: Difficulty) -> (i64, i64) {
    match difficulty {
        Difficulty::Easy => (12, 10),
        Difficulty::Medium => (20, 10),
        Difficulty::Hard => (32, 12),
    }
}

fn div_bounds(difficulty: Difficulty) -> (i64, i64) {
    match difficulty {
        Difficulty::Easy => (100, 10),
        Difficulty::Medium => (300, 14),
        Difficulty::Hard => (500, 20),
    }
}

#[test]
fn test_generated_operands_stay_in_range() {
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        for _ in 0..SAMPLES {
            let expr = expression::generate(difficulty);
            let (left, right) = (expr.left(), expr.right());
            assert!(left >= 1 && right >= 1, "operands must be positive: {}", expr);
            match expr.operator() {
                Operator::Add | Operator::Sub => {
                    let bound = add_sub_bound(difficulty);
                    assert!(left <= bound && right <= bound, "out of range: {}", expr);
                }
                Operator::Mul => {
                    let (left_bound, right_bound) = mul_bounds(difficulty);
                    assert!(left <= left_bound, "out of range: {}", expr);
                    assert!(right <= right_bound, "out of range: {}", expr);
                }
                Operator::Div => {
                    // operands may have been swapped, so either bound can apply
                    let (left_bound, _) = div_bounds(difficulty);
                    assert!(left <= left_bound, "out of range: {}", expr);
                    assert!(right <= left_bound, "out of range: {}", expr);
                }
            }
        }
    }
}

#[test]
fn test_subtraction_never_goes_negative() {
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        for _ in 0..SAMPLES {
            let expr = expression::generate(difficulty);
            if expr.operator() == Operator::Sub {
                assert!(expr.left() >= expr.right(), "bad ordering: {}", expr);
                assert!(expr.evaluate() >= 0);
            }
        }
    }
}

#[test]
fn test_division_is_always_defined() {
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        for _ in 0..SAMPLES {
            let expr = expression::generate(difficulty);
            if expr.operator() == Operator::Div {
                assert!(expr.right() >= 1, "zero divisor: {}", expr);
                assert!(expr.left() >= expr.right(), "bad ordering: {}", expr);
                assert!(expr.evaluate() >= 1);
            }
        }
    }
}

#[test]
fn test_evaluate_per_operator() {
    assert_eq!(Expression::new(7, Operator::Add, 5).evaluate(), 12);
    assert_eq!(Expression::new(7, Operator::Sub, 5).evaluate(), 2);
    assert_eq!(Expression::new(7, Operator::Mul, 5).evaluate(), 35);
    assert_eq!(Expression::new(35, Operator::Div, 5).evaluate(), 7);
}

#[test]
fn test_division_truncates_remainder() {
    assert_eq!(Expression::new(7, Operator::Div, 2).evaluate(), 3);
    assert_eq!(Expression::new(100, Operator::Div, 9).evaluate(), 11);
}

#[test]
fn test_display_format() {
    let expr = Expression::new(7, Operator::Add, 5);
    assert_eq!(expr.to_string(), "7 + 5");
    assert_eq!(Expression::new(9, Operator::Div, 4).to_string(), "9 / 4");
}

#[test]
fn test_difficulty_from_level() {
    assert_eq!(Difficulty::from_level(1), Some(Difficulty::Easy));
    assert_eq!(Difficulty::from_level(2), Some(Difficulty::Medium));
    assert_eq!(Difficulty::from_level(3), Some(Difficulty::Hard));
    assert_eq!(Difficulty::from_level(0), None);
    assert_eq!(Difficulty::from_level(4), None);
}
