use chainload::{ extract, extract_all, Declared, ExtractionError, IdentityError, VersionError };

#[test]
fn extraction_missing_identity() {

	let candidate = Declared::new( "anonymous.dll", () ).depends_on( "something" );

	match extract( candidate ) {
		Err( ExtractionError::MissingIdentity { location }) => assert_eq!( location, "anonymous.dll" ),
		Err( err ) => panic!( "Unexpected error: {}", err ),
		Ok( _ ) => panic!( "Expected failure" ),
	}

}

#[test]
fn extraction_invalid_identity() {

	let cases = [
		( Declared::new( "a.dll", () ).plugin( "", "A", "1.0" ), IdentityError::EmptyGuid ),
		( Declared::new( "b.dll", () ).plugin( "b", "  ", "1.0" ), IdentityError::EmptyName ),
		( Declared::new( "c.dll", () ).plugin( "c", "C", "" ), IdentityError::Version( VersionError::Empty )),
	];

	for ( candidate, expected ) in cases {
		match extract( candidate ) {
			Err( ExtractionError::InvalidIdentity { reason, .. }) => assert_eq!( reason, expected ),
			Err( err ) => panic!( "Unexpected error: {}", err ),
			Ok( _ ) => panic!( "Expected failure for {:?}", expected ),
		}
	}

}

#[test]
fn extraction_unidentified_candidates_do_not_block_others() {

	let extracted = extract_all( vec![
		Declared::new( "anonymous.dll", () ),
		Declared::new( "named.dll", () ).plugin( "named", "Named", "0.1" ),
	]);

	assert_eq!( extracted.records.len(), 1 );
	assert_eq!( extracted.records[0].guid().as_str(), "named" );
	assert_eq!( extracted.unidentified.len(), 1 );
	assert_eq!( extracted.unidentified[0].location(), "anonymous.dll" );

}
