use chainload::{ Guid, RejectionReason };

use crate::fixtures::{ plan, plugin };

fn cyclic( members: &[&str] ) -> RejectionReason {
	RejectionReason::CyclicDependency { cycle: members.iter().copied().map( Guid::from ).collect() }
}

/// `count` plugins where each one depends on the next.
fn chain( prefix: &str, count: usize ) -> Vec<chainload::Declared<()>> {
	( 0..count )
		.map(| index | plugin( &format!( "{}{:06}", prefix, index )).depends_on( format!( "{}{:06}", prefix, index + 1 )))
		.collect()
}

#[test]
fn resolution_two_plugin_cycle() {

	let plan = plan( vec![
		plugin( "a" ).depends_on( "b" ),
		plugin( "b" ).depends_on( "a" ),
		plugin( "unrelated" ),
	]);

	assert_order!( plan, [ "unrelated" ]);

	let expected = cyclic( &[ "a", "b" ]);
	assert_eq!( plan.rejection( "a" ), Some( &expected ));
	assert_eq!( plan.rejection( "b" ), Some( &expected ));
	assert!( plan.rejection( "unrelated" ).is_none() );

}

#[test]
fn resolution_cycle_dependents_are_rejected_as_dependents() {

	let plan = plan( vec![
		plugin( "x" ).depends_on( "y" ),
		plugin( "y" ).depends_on( "z" ),
		plugin( "z" ).depends_on( "x" ),
		plugin( "fan" ).depends_on( "y" ),
		plugin( "fan-of-fan" ).depends_on( "fan" ),
	]);

	assert!( plan.order().is_empty() );

	let cycle = cyclic( &[ "x", "y", "z" ]);
	assert_eq!( plan.rejection( "x" ), Some( &cycle ));
	assert_eq!( plan.rejection( "y" ), Some( &cycle ));
	assert_eq!( plan.rejection( "z" ), Some( &cycle ));
	assert_eq!(
		plan.rejection( "fan" ),
		Some( &RejectionReason::DependencyRejected { dependency: "y".into() }),
	);
	assert_eq!(
		plan.rejection( "fan-of-fan" ),
		Some( &RejectionReason::DependencyRejected { dependency: "fan".into() }),
	);

}

#[test]
fn resolution_two_separate_cycles() {

	let plan = plan( vec![
		plugin( "a1" ).depends_on( "a2" ),
		plugin( "a2" ).depends_on( "a1" ),
		plugin( "b1" ).depends_on( "b2" ),
		plugin( "b2" ).depends_on( "b1" ),
		plugin( "free" ).soft_depends_on( "a1" ),
	]);

	assert_order!( plan, [ "free" ]);
	assert_eq!(
		plan.rejection( "b2" ),
		Some( &cyclic( &[ "b1", "b2" ])),
	);

}

#[test]
fn resolution_cycle_through_dependency_with_missing_target() {

	// "b" is rejected before the cycle is examined, which breaks the cycle
	let plan = plan( vec![
		plugin( "a" ).depends_on( "b" ),
		plugin( "b" ).depends_on( "a" ).depends_on( "ghost" ),
	]);

	assert_eq!(
		plan.rejection( "b" ),
		Some( &RejectionReason::MissingHardDependency { dependency: "ghost".into() }),
	);
	assert_eq!(
		plan.rejection( "a" ),
		Some( &RejectionReason::DependencyRejected { dependency: "b".into() }),
	);

}

#[test]
fn resolution_very_long_cycle() {

	const LENGTH: usize = 10_000 ;

	// the last link points back at the first plugin instead of a further one
	let mut candidates = chain( "p", LENGTH - 1 );
	candidates.push( plugin( &format!( "p{:06}", LENGTH - 1 )).depends_on( "p000000" ));

	let plan = plan( candidates );

	assert!( plan.order().is_empty() );
	assert_eq!( plan.rejected().len(), LENGTH );
	match plan.rejection( "p004321" ) {
		Some( RejectionReason::CyclicDependency { cycle }) => {
			assert_eq!( cycle.len(), LENGTH );
			assert_eq!( cycle[0].as_str(), "p000000" );
		},
		other => panic!( "Unexpected rejection: {:?}", other ),
	}

}

#[test]
fn resolution_very_long_chain_into_cycle() {

	const LENGTH: usize = 10_000 ;

	// q000000 -> ... -> q009999 -> loop-a <-> loop-b
	let mut candidates = chain( "q", LENGTH - 1 );
	candidates.push( plugin( &format!( "q{:06}", LENGTH - 1 )).depends_on( "loop-a" ));
	candidates.push( plugin( "loop-a" ).depends_on( "loop-b" ));
	candidates.push( plugin( "loop-b" ).depends_on( "loop-a" ));
	candidates.push( plugin( "bystander" ));

	let plan = plan( candidates );

	assert_order!( plan, [ "bystander" ]);
	assert_eq!( plan.rejection( "loop-a" ), Some( &cyclic( &[ "loop-a", "loop-b" ])));
	assert_eq!(
		plan.rejection( "q009999" ),
		Some( &RejectionReason::DependencyRejected { dependency: "loop-a".into() }),
	);
	assert_eq!(
		plan.rejection( "q000000" ),
		Some( &RejectionReason::DependencyRejected { dependency: "q000001".into() }),
	);

}
