/// [AnySequence] struct declaration and implementations.
pub mod any_sequence;
/// [AnyStep] struct declaration and implementations.
pub mod any_step;
/// [Empty] struct declaration and implementations.
pub mod empty;
/// [FromFn] struct declaration and implementations.
pub mod from_fn;
/// [Successors] struct declaration and implementations.
pub mod successors;
/// [Unfold] struct declaration and implementations.
pub mod unfold;
