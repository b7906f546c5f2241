//! Type aliases for operations that support partial success/failure patterns.
//! These represent graceful error handling where some parts of an operation may fail
//! while others succeed, allowing partial completion rather than total failure.

/// Represents a successful operation where some parts failed but didn't prevent overall success.
/// The `Vec<E>` contains errors from the failed parts that were handled gracefully.
pub type PartialSuccess<T, E> = ( T, Vec<E> );

/// Concatenates error lists collected by separate stages of the same operation.
pub(crate) trait Merge<T> {
	fn merge( self, other: T ) -> Self ;
	fn merge_all( self, other: impl IntoIterator<Item = T> ) -> Self ;
}

impl<T> Merge<T> for Vec<T> {
	#[inline] fn merge( mut self, other: T ) -> Self {
		self.push( other );
		self
	}
	#[inline] fn merge_all( mut self, other: impl IntoIterator<Item = T> ) -> Self {
		self.extend( other );
		self
	}
}
