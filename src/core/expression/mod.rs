use std::fmt::{Display, Formatter};
use rand::Rng;

/// Arithmetic operator of an expression
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
        };
        write!(f, "{}", symbol)
    }
}

/// Session difficulty, chosen once at startup and passed explicitly
/// into every generator call
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Map the CLI level (1/2/3) to a difficulty
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Difficulty::Easy),
            2 => Some(Difficulty::Medium),
            3 => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// One quiz question, immutable once generated
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Expression {
    left: i64,
    operator: Operator,
    right: i64,
}

impl Expression {
    pub fn new(left: i64, operator: Operator, right: i64) -> Self {
        Self { left, operator, right }
    }

    pub fn left(&self) -> i64 {
        self.left
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn right(&self) -> i64 {
        self.right
    }

    /// Evaluate the expression; division is a truncating integer quotient
    pub fn evaluate(&self) -> i64 {
        match self.operator {
            Operator::Add => self.left + self.right,
            Operator::Sub => self.left - self.right,
            Operator::Mul => self.left * self.right,
            Operator::Div => self.left / self.right,
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.left, self.operator, self.right)
    }
}

/// Generate a random expression for the given difficulty.
/// Subtraction keeps left >= right so results stay non-negative;
/// division keeps left >= right >= 1 so the quotient is defined.
pub fn generate(difficulty: Difficulty) -> Expression {
    let mut rng = rand::thread_rng();
    match rng.gen_range(0..4) {
        0 => generate_add_sub(&mut rng, difficulty, Operator::Add),
        1 => generate_add_sub(&mut rng, difficulty, Operator::Sub),
        2 => generate_mul(&mut rng, difficulty),
        _ => generate_div(&mut rng, difficulty),
    }
}

fn generate_add_sub(rng: &mut impl Rng, difficulty: Difficulty, operator: Operator) -> Expression {
    let bound = match difficulty {
        Difficulty::Easy => 100,
        Difficulty::Medium => 100 + 400,
        Difficulty::Hard => 100 + 900,
    };
    let mut left = rng.gen_range(1..=bound);
    let mut right = rng.gen_range(1..=bound);
    if operator == Operator::Sub && left < right {
        std::mem::swap(&mut left, &mut right);
    }
    Expression::new(left, operator, right)
}

fn generate_mul(rng: &mut impl Rng, difficulty: Difficulty) -> Expression {
    let (left_bound, right_bound) = match difficulty {
        Difficulty::Easy => (12, 10),
        Difficulty::Medium => (12 + 8, 10),
        Difficulty::Hard => (12 + 20, 10 + 2),
    };
    let left = rng.gen_range(1..=left_bound);
    let right = rng.gen_range(1..=right_bound);
    Expression::new(left, Operator::Mul, right)
}

fn generate_div(rng: &mut impl Rng, difficulty: Difficulty) -> Expression {
    let (left_bound, right_bound) = match difficulty {
        Difficulty::Easy => (100, 10),
        Difficulty::Medium => (100 + 200, 10 + 4),
        Difficulty::Hard => (100 + 400, 10 + 10),
    };
    let mut left = rng.gen_range(1..=left_bound);
    let mut right = rng.gen_range(1..=right_bound);
    if left < right {
        std::mem::swap(&mut left, &mut right);
    }
    Expression::new(left, Operator::Div, right)
}
