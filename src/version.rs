//! Lenient plugin version parsing.
//!
//! Plugin authors write versions the way their host tooling taught them to: `"1"`,
//! `"1.4"`, `"1.4.2"`, full semver, or four-component `major.minor.build.revision`.
//! All of these are accepted and normalised into a [`semver::Version`].

use semver::{ BuildMetadata, Version };
use thiserror::Error ;



/// Error produced when a version string can't be normalised.
#[derive( Debug, Error, Clone, PartialEq, Eq )]
pub enum VersionError {
	/// The version string was empty or whitespace.
	#[error( "Empty version string" )] Empty,
	/// The version string is neither semver nor 1-4 numeric components.
	#[error( "Invalid version '{0}': {1}" )] Invalid( String, String ),
}

/// Parses a version string leniently.
///
/// Missing minor/patch components are padded with zeros. A fourth numeric component
/// is kept as build metadata, so `1.2.3.4` ranks just above `1.2.3`.
///
/// # Errors
/// Returns [`VersionError`] when the string is empty or has a non-numeric component.
pub fn parse_version( raw: &str ) -> Result<Version, VersionError> {

	let raw = raw.trim();
	if raw.is_empty() { return Err( VersionError::Empty ) }

	if let Ok( version ) = Version::parse( raw ) { return Ok( version ) }

	let components = raw.split( '.' )
		.map( str::parse::<u64> )
		.collect::<Result<Vec<_>, _>>()
		.map_err(| err | VersionError::Invalid( raw.to_string(), err.to_string() ))?;

	match components.as_slice() {
		[ major ] => Ok( Version::new( *major, 0, 0 )),
		[ major, minor ] => Ok( Version::new( *major, *minor, 0 )),
		[ major, minor, patch ] => Ok( Version::new( *major, *minor, *patch )),
		[ major, minor, patch, revision ] => {
			let mut version = Version::new( *major, *minor, *patch );
			version.build = BuildMetadata::new( &revision.to_string() )
				.map_err(| err | VersionError::Invalid( raw.to_string(), err.to_string() ))?;
			Ok( version )
		},
		_ => Err( VersionError::Invalid( raw.to_string(), "expected 1 to 4 numeric components".to_string() )),
	}

}

#[cfg( test )]
mod tests {

	use super::* ;

	#[test]
	fn pads_short_versions() {
		assert_eq!( parse_version( "1" ), Ok( Version::new( 1, 0, 0 )));
		assert_eq!( parse_version( "1.4" ), Ok( Version::new( 1, 4, 0 )));
		assert_eq!( parse_version( " 2.0.1 " ), Ok( Version::new( 2, 0, 1 )));
	}

	#[test]
	fn keeps_semver_prerelease() {
		let version = parse_version( "1.0.0-beta.2" ).unwrap();
		assert!( version < Version::new( 1, 0, 0 ));
	}

	#[test]
	fn revision_ranks_above_three_component_version() {
		let version = parse_version( "1.2.3.4" ).unwrap();
		assert!( version > Version::new( 1, 2, 3 ));
		assert!( version < Version::new( 1, 2, 4 ));
	}

	#[test]
	fn rejects_garbage() {
		assert_eq!( parse_version( "" ), Err( VersionError::Empty ));
		assert!( matches!( parse_version( "one.two" ), Err( VersionError::Invalid( .. ))));
		assert!( matches!( parse_version( "1.2.3.4.5" ), Err( VersionError::Invalid( .. ))));
	}

}
