//! Plugin identifiers.

use std::borrow::Borrow ;
use std::ops::Deref ;



/// Globally unique plugin identifier, stable across every version of a plugin.
///
/// Ordering is plain lexicographic ordering of the underlying string. Every pass
/// of the resolver iterates plugins in this order, which is what makes load plans
/// independent of discovery order.
#[derive( Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash )]
pub struct Guid( String );

impl Guid {
	/// Creates a GUID from any string-like value. No normalisation is applied.
	pub fn new( guid: impl Into<String> ) -> Self { Self( guid.into() )}

	/// The GUID as a string slice.
	#[inline] pub fn as_str( &self ) -> &str { &self.0 }
}

impl std::fmt::Display for Guid {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		f.write_str( &self.0 )
	}
}

impl Deref for Guid {
	type Target = str ;
	fn deref( &self ) -> &str { &self.0 }
}

impl Borrow<str> for Guid {
	fn borrow( &self ) -> &str { &self.0 }
}

impl AsRef<str> for Guid {
	fn as_ref( &self ) -> &str { &self.0 }
}

impl From<&str> for Guid {
	fn from( guid: &str ) -> Self { Self( guid.to_string() )}
}

impl From<String> for Guid {
	fn from( guid: String ) -> Self { Self( guid )}
}

impl From<Guid> for String {
	fn from( guid: Guid ) -> Self { guid.0 }
}
