use chainload::RejectionReason ;

use crate::fixtures::{ plan, plugin };

#[test]
fn resolution_incompatible_plugin_present() {

	let plan = plan( vec![
		plugin( "picky" ).incompatible_with( "rival" ),
		plugin( "rival" ),
	]);

	assert_order!( plan, [ "rival" ]);
	assert_eq!(
		plan.rejection( "picky" ),
		Some( &RejectionReason::Incompatible { plugin: "rival".into() }),
	);

}

#[test]
fn resolution_incompatible_plugin_absent() {

	let plan = plan( vec![
		plugin( "picky" ).incompatible_with( "rival" ),
	]);

	assert_order!( plan, [ "picky" ]);

}
