use crate::fixtures::{ plan, plugin };

#[test]
fn resolution_linear_chain_discovered_backwards() {

	let plan = plan( vec![
		plugin( "c" ).depends_on_version( "b", "1.0" ),
		plugin( "b" ).depends_on_version( "a", "1.0" ),
		plugin( "a" ),
	]);

	assert_order!( plan, [ "a", "b", "c" ]);
	assert!( plan.rejected().is_empty() );
	assert!( plan.skipped().is_empty() );

}

#[test]
fn resolution_independent_plugins_ordered_by_guid() {

	let plan = plan( vec![ plugin( "zeta" ), plugin( "alpha" ), plugin( "mu" )]);

	assert_order!( plan, [ "alpha", "mu", "zeta" ]);

}

#[test]
fn resolution_diamond_dependency() {

	let plan = plan( vec![
		plugin( "top" ).depends_on( "left" ).depends_on( "right" ),
		plugin( "left" ).depends_on( "base" ),
		plugin( "right" ).depends_on( "base" ),
		plugin( "base" ),
	]);

	assert_order!( plan, [ "base", "left", "right", "top" ]);

}

#[test]
fn resolution_dependency_beats_guid_order() {

	let plan = plan( vec![
		plugin( "a" ).depends_on( "z" ),
		plugin( "b" ),
		plugin( "z" ),
	]);

	// "a" is smallest but has to wait for "z"; "b" is free and goes first
	assert_order!( plan, [ "b", "z", "a" ]);

}

#[test]
fn resolution_very_long_chain() {

	const LENGTH: usize = 10_000 ;

	// discovered leaves-last, so nothing about the input order helps
	let plan = plan(( 0..LENGTH )
		.map(| index | match index {
			0 => plugin( "n000000" ),
			_ => plugin( &format!( "n{:06}", index )).depends_on( format!( "n{:06}", index - 1 )),
		})
		.rev()
		.collect()
	);

	assert_eq!( plan.order().len(), LENGTH );
	assert!( plan.order().iter().enumerate().all(| ( index, guid ) | guid.as_str() == format!( "n{:06}", index )));

}
