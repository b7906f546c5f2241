use chainload::{ ChainloadError, Declared, Discovery };
use crate::units::{ loader, Constructor };

struct UnreadableDirectory ;

impl Discovery for UnreadableDirectory {
	type Candidate = Declared<Constructor> ;
	type Error = std::io::Error ;
	fn discover( self ) -> Result<Vec<Self::Candidate>, Self::Error> {
		Err( std::io::Error::new( std::io::ErrorKind::PermissionDenied, "plugins directory is not readable" ))
	}
}

#[test]
fn chainloader_discovery_failure_is_fatal() {

	let dir = tempfile::tempdir().unwrap();

	match loader( dir.path() ).run( UnreadableDirectory ) {
		Err( ChainloadError::Discovery( source )) => {
			assert_eq!( source.to_string(), "plugins directory is not readable" );
		},
		Ok( _ ) => panic!( "Expected discovery failure" ),
	}

}

#[test]
fn chainloader_empty_discovery_is_not_an_error() {

	let dir = tempfile::tempdir().unwrap();

	let outcome = loader( dir.path() ).run( Vec::<Declared<Constructor>>::new() ).unwrap();

	assert!( outcome.plugins().is_empty() );
	assert!( outcome.plan.order().is_empty() );
	assert_eq!( outcome.summary.loaded_count() + outcome.summary.rejected_count() + outcome.summary.skipped_count(), 0 );

}
