macro_rules! unwrap_or_return {
	( $e:expr ) => {
		match $e {
			Some(x) => x,
			None => return Ok(None),
		}
	};
}
pub(crate) use unwrap_or_return;
