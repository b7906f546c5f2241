use crate::fixtures::{ plan, plugin, plugin_at };

#[test]
fn resolution_soft_dependency_orders_when_present() {

	let plan = plan( vec![
		plugin( "a" ).soft_depends_on( "b" ),
		plugin( "b" ),
	]);

	assert_order!( plan, [ "b", "a" ]);

}

#[test]
fn resolution_soft_dependency_absent_is_ignored() {

	let plan = plan( vec![
		plugin( "a" ).soft_depends_on( "ghost" ),
	]);

	assert_order!( plan, [ "a" ]);
	assert!( plan.rejected().is_empty() );

}

#[test]
fn resolution_outdated_soft_dependency_does_not_block_or_order() {

	let plan = plan( vec![
		plugin( "early" ).soft_depends_on_version( "late", "5.0" ),
		plugin_at( "late", "1.0" ),
	]);

	// without an edge from "early" to "late", GUID order decides
	assert_order!( plan, [ "early", "late" ]);
	assert!( plan.rejected().is_empty() );

}

#[test]
fn resolution_soft_cycle_is_broken_deterministically() {

	let plan = plan( vec![
		plugin( "b" ).soft_depends_on( "a" ),
		plugin( "a" ).soft_depends_on( "b" ),
	]);

	assert_order!( plan, [ "a", "b" ]);
	assert!( plan.rejected().is_empty() );

}

#[test]
fn resolution_soft_cycle_respects_hard_edges() {

	let plan = plan( vec![
		plugin( "a" ).depends_on( "b" ),
		plugin( "b" ).soft_depends_on( "a" ),
	]);

	assert_order!( plan, [ "b", "a" ]);

}
