use crate::{structs::any_step::AnyStep, traits::sequence::Sequence};

type MakeStep<Item, Error> = dyn Fn() -> AnyStep<Item, Error>;

/// A concrete, storable sequence that hides its underlying implementation.
///
/// An [AnySequence] owns a single step-producing function and nothing else;
/// every [make_step](Sequence::make_step) hands out a fresh, independent
/// [AnyStep].
/// # Examples
/// ```
/// # use misstep::{convert, AnySequence, Sequence, Step};
/// let numbers = AnySequence::new(convert::<_, anyhow::Error>(1..4));
///
/// let first: Vec<u32> = numbers.make_step().collect().unwrap();
/// let second: Vec<u32> = numbers.make_step().collect().unwrap();
/// assert_eq!(first, second);
/// ```
pub struct AnySequence<Item, Error> {
	make: Box<MakeStep<Item, Error>>,
}

impl<Item, Error> AnySequence<Item, Error> {
	/// Erases an existing sequence.
	pub fn new<S>(from: S) -> Self
	where
		S: Sequence<Item = Item, Error = Error> + 'static,
		S::Step: 'static,
	{
		AnySequence {
			make: Box::new(move || AnyStep::new(from.make_step())),
		}
	}
	/// Builds a sequence from a closure that makes fresh traversals.
	pub fn from_fn(make: impl Fn() -> AnyStep<Item, Error> + 'static) -> Self {
		AnySequence {
			make: Box::new(make),
		}
	}
	/// Creates a sequence with no elements and no failures.
	pub fn empty() -> Self
	where
		Item: 'static,
		Error: 'static,
	{
		AnySequence::from_fn(AnyStep::empty)
	}
}

impl<Item, Error> Sequence for AnySequence<Item, Error> {
	type Item = Item;
	type Error = Error;
	type Step = AnyStep<Item, Error>;
	fn make_step(&self) -> AnyStep<Item, Error> {
		(self.make)()
	}
}
