//! Centralized limits and thresholds.
//!
//! # Categories
//!
//! - **Numeric Limits**: bounds enforced when constructing literal nodes
//! - **Recursion Depths**: limits that turn pathological nesting into errors
//!   instead of stack overflows

// =============================================================================
// Numeric Limits
// =============================================================================

/// Largest integer an IEEE-754 double represents exactly (`2^53 - 1`).
///
/// Binary, octal and hex integer literals above this value cannot be emitted
/// back in their original radix without losing digits, so the AST factory
/// rejects them.
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

// =============================================================================
// Recursion Depth Limits (Parser)
// =============================================================================

/// Maximum nesting depth of expressions, types and statements.
///
/// Every nested construct adds several frames to the recursive-descent call
/// stack; past this depth the parser reports a syntax error.
///
/// ```typescript
/// const x = ((((((((((((((((((((((((1))))))))))))))))))))))));
/// ```
pub const MAX_PARSER_DEPTH: u32 = 128;
