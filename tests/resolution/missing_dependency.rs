use chainload::RejectionReason ;

use crate::fixtures::{ plan, plugin };

#[test]
fn resolution_missing_hard_dependency() {

	let plan = plan( vec![
		plugin( "needy" ).depends_on( "ghost" ),
		plugin( "bystander" ),
	]);

	assert_order!( plan, [ "bystander" ]);
	assert_eq!(
		plan.rejection( "needy" ),
		Some( &RejectionReason::MissingHardDependency { dependency: "ghost".into() }),
	);

}

#[test]
fn resolution_missing_dependency_cascades() {

	let plan = plan( vec![
		plugin( "top" ).depends_on( "middle" ),
		plugin( "middle" ).depends_on( "ghost" ),
		plugin( "other" ),
	]);

	assert_order!( plan, [ "other" ]);
	assert_eq!(
		plan.rejection( "middle" ),
		Some( &RejectionReason::MissingHardDependency { dependency: "ghost".into() }),
	);
	assert_eq!(
		plan.rejection( "top" ),
		Some( &RejectionReason::DependencyRejected { dependency: "middle".into() }),
	);

}

#[test]
fn resolution_first_failing_dependency_is_reported() {

	let plan = plan( vec![
		plugin( "needy" ).depends_on( "first-ghost" ).depends_on( "second-ghost" ),
	]);

	assert_eq!(
		plan.rejection( "needy" ),
		Some( &RejectionReason::MissingHardDependency { dependency: "first-ghost".into() }),
	);

}
