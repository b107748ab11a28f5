use std::fmt::Debug;

use crate::traits::step::Step;

/// A struct that turns a fallible traversal into an ordinary iterator by
/// treating any failure as an unrecoverable fault.
/// You can create a [PanicOnError] with
/// [Compose::panic_on_error](crate::Compose::panic_on_error).
///
/// Use it when failures have been proven impossible, or when there is
/// nothing sensible left to do with one. Unlike
/// [SkipErrors](crate::ops::skip_errors::SkipErrors) nothing is discarded: a
/// failure aborts the program.
pub struct PanicOnError<Previous> {
	from: Previous,
}

impl<Previous> PanicOnError<Previous> {
	pub(crate) fn new(from: Previous) -> Self {
		PanicOnError { from }
	}
}

impl<Previous> Iterator for PanicOnError<Previous>
where
	Previous: Step,
	Previous::Error: Debug,
{
	type Item = Previous::Item;
	fn next(&mut self) -> Option<Previous::Item> {
		match self.from.advance() {
			Ok(item) => item,
			Err(error) => panic!("advance failed: {error:?}"),
		}
	}
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.from.size_hint()
	}
}
