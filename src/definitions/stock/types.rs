//! Error types of the `stock` library.

use crate::define_error_types;

// -----------------------------------------------------------------------------
// STOCK (1-12) - General-purpose kinds
// -----------------------------------------------------------------------------
// Logic kinds (1-6) signal a defect in the calling code; runtime kinds
// (7-12) signal a condition only detectable while running.
define_error_types! {
    "stock" => {
        LOGIC = LogicException(),
        DOMAIN = DomainException(),
        INVALID_ARGUMENT = InvalidArgumentException(),
        LENGTH = LengthException(),
        BAD_FUNCTION_CALL = BadFunctionCallException(),
        BAD_METHOD_CALL = BadMethodCallException(),
        RUNTIME = RuntimeException(),
        RANGE = RangeException(),
        OVERFLOW = OverflowException(),
        UNDERFLOW = UnderflowException(),
        OUT_OF_BOUNDS = OutOfBoundsException(),
        UNEXPECTED_VALUE = UnexpectedValueException(),
    }
}
