use crate::error::RuntimeError;

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// [`RuntimeError`] describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// A binary arithmetic operator.
///
/// Each variant corresponds to one of the four infix operators the grammar
/// recognizes. The parser maps tokens to operators; the evaluator gives each
/// operator its numeric meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`).
    Add,
    /// Subtraction (`-`).
    Sub,
    /// Multiplication (`*`).
    Mul,
    /// Division (`/`), truncating towards zero.
    Div,
}

/// Combines two integer operands with a binary operator.
///
/// All operations use checked 64-bit arithmetic. Division truncates towards
/// zero; the divisor is tested before the divide, never after.
///
/// # Errors
/// - [`RuntimeError::DivisionByZero`] if `op` is [`BinaryOperator::Div`] and
///   `right` is zero.
/// - [`RuntimeError::Overflow`] if the result does not fit in an `i64`. For
///   division this only happens for `i64::MIN / -1`.
///
/// # Example
/// ```
/// use calcr::interpreter::evaluator::{BinaryOperator, eval_binary_op};
///
/// let product = eval_binary_op(BinaryOperator::Mul, 6, 7).unwrap();
/// assert_eq!(product, 42);
///
/// // Truncating division.
/// let quotient = eval_binary_op(BinaryOperator::Div, 7, 2).unwrap();
/// assert_eq!(quotient, 3);
/// ```
pub fn eval_binary_op(op: BinaryOperator, left: i64, right: i64) -> EvalResult<i64> {
    let result = match op {
        BinaryOperator::Add => left.checked_add(right),
        BinaryOperator::Sub => left.checked_sub(right),
        BinaryOperator::Mul => left.checked_mul(right),
        BinaryOperator::Div => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            left.checked_div(right)
        },
    };

    result.ok_or(RuntimeError::Overflow)
}

/// Negates an integer operand.
///
/// # Errors
/// Returns [`RuntimeError::Overflow`] when negating `i64::MIN`, which has no
/// positive counterpart.
pub fn eval_negate(value: i64) -> EvalResult<i64> {
    value.checked_neg().ok_or(RuntimeError::Overflow)
}
