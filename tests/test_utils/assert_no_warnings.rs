/// Fails with every dropped declaration or unidentified candidate listed on its own line.
#[macro_export]
macro_rules! assert_no_warnings {
	( $warnings:expr ) => {{
		let warnings = &$warnings ;
		if !warnings.is_empty() {
			let listed = warnings.iter().map(| warning | format!( "  {}", warning )).collect::<Vec<_>>();
			panic!( "Produced {} warnings:\n{}", listed.len(), listed.join( "\n" ));
		}
	}};
}
