pub mod clock;
pub mod expression;
pub mod log;
pub mod queue;
pub mod session;
