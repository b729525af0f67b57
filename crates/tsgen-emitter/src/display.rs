//! Rendering nodes with default emit options.

use crate::{Emit, EmitOptions, emit};

/// Source text of a node as written with [`EmitOptions::default`].
///
/// ```
/// use tsgen_emitter::CodeDisplay;
/// use tsgen_parser::ast::BinaryOperator;
/// use tsgen_parser::ast::factory as f;
///
/// # fn main() -> Result<(), tsgen_parser::ConstructionError> {
/// let sum = f::binary(f::identifier_expression("a")?, BinaryOperator::Add, f::number(1.0)?);
/// assert_eq!(sum.code_display(), "a + 1");
/// # Ok(())
/// # }
/// ```
pub trait CodeDisplay {
    fn code_display(&self) -> String;
}

impl<T: Emit + ?Sized> CodeDisplay for T {
    fn code_display(&self) -> String {
        emit(self, &EmitOptions::default())
    }
}
