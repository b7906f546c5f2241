use crate::units::{ instances, loader, plugin };

#[test]
fn chainloader_loads_in_dependency_order() {

	let dir = tempfile::tempdir().unwrap();
	let candidates = vec![
		plugin( "c" ).depends_on_version( "b", "1.0" ),
		plugin( "b" ).depends_on_version( "a", "1.0" ),
		plugin( "a" ),
	];

	let outcome = loader( dir.path() ).run( candidates ).unwrap();

	assert_eq!( instances( outcome.plugins() ), [ "a", "b", "c" ]);
	assert_eq!( outcome.summary.loaded(), outcome.plan.order() );
	assert!( outcome.summary.rejected().is_empty() );
	assert_no_warnings!( outcome.summary.warnings() );

}

#[test]
fn chainloader_constructs_soft_dependencies_first() {

	let dir = tempfile::tempdir().unwrap();
	let candidates = vec![
		plugin( "addon" ).soft_depends_on( "zzz.core" ).soft_depends_on( "not.installed" ),
		plugin( "zzz.core" ),
	];

	let outcome = loader( dir.path() ).run( candidates ).unwrap();

	assert_eq!( instances( outcome.plugins() ), [ "zzz.core", "addon" ]);

}

#[test]
fn chainloader_loads_nothing_for_foreign_process() {

	let dir = tempfile::tempdir().unwrap();
	let candidates = vec![
		plugin( "editor.tools" ).process( "editor.exe" ),
		plugin( "everywhere" ),
	];

	let outcome = loader( dir.path() ).run( candidates ).unwrap();

	assert_eq!( instances( outcome.plugins() ), [ "everywhere" ]);
	assert!( outcome.summary.skipped().contains_key( "editor.tools" ));

}
