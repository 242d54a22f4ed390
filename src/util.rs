/// Numeric result helpers.
///
/// This module holds the checks applied to floating-point values once
/// evaluation has produced them, and the formatting used when a result is
/// shown to a user.
pub mod num;
