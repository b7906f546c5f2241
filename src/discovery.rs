//! Candidate discovery.

use std::convert::Infallible ;

use crate::Candidate ;



/// Supplies the plugin candidates for one chainload run.
///
/// The order of the returned candidates matters only for duplicate GUIDs: the
/// first candidate claiming a GUID wins.
pub trait Discovery {
	type Candidate: Candidate ;
	type Error: std::error::Error + Send + Sync + 'static ;

	/// Enumerates every candidate.
	///
	/// # Errors
	/// An error here means no candidates could be obtained at all, which aborts
	/// the chainload.
	fn discover( self ) -> Result<Vec<Self::Candidate>, Self::Error> ;
}

/// Candidates that were already discovered by other means.
impl<C: Candidate> Discovery for Vec<C> {
	type Candidate = C ;
	type Error = Infallible ;
	fn discover( self ) -> Result<Vec<C>, Infallible> { Ok( self ) }
}
