use crate::units::{ candidate, instances, loader, plugin, unit };

#[test]
fn chainloader_context_is_queryable_during_construction() {

	let dir = tempfile::tempdir().unwrap();

	let inspector = unit(| init | {
		let context = init.context ;
		let dependency = context.plugin( "a" ).ok_or( "dependency metadata missing" )?;
		Ok( format!(
			"{} {} {} {} {}",
			dependency.metadata().name(),
			context.is_loaded( "a" ),
			context.is_loaded( init.info.guid().as_str() ),
			context.plugin( "broken" ).is_some(),
			context.host_process(),
		))
	});

	let candidates = vec![
		candidate( "b", inspector ).depends_on( "a" ),
		plugin( "a" ),
		plugin( "broken" ).depends_on( "nowhere" ),
	];

	let outcome = loader( dir.path() ).run( candidates ).unwrap();

	assert_eq!( instances( outcome.plugins() ), [ "a", "A true false true game.exe" ]);
	assert_eq!( outcome.context.loaded_guids().map( chainload::Guid::as_str ).collect::<Vec<_>>(), [ "a", "b" ]);
	assert_eq!( outcome.context.plugins().count(), 3 );

}

#[test]
fn chainloader_dependency_instances_are_reachable_during_construction() {

	let dir = tempfile::tempdir().unwrap();

	let service = unit(| _ | Ok( "service handle".to_string() ));
	let client = unit(| init | {
		let service = init.context.instance( "com.example.service" ).ok_or( "service not constructed yet" )?;
		Ok( format!( "client using {}", service ))
	});
	let early = unit(| init | match init.context.instance( "com.example.service" ) {
		Some( _ ) => Err( "saw an instance that loads later".to_string() ),
		None => Ok( "early".to_string() ),
	});

	let candidates = vec![
		candidate( "com.example.client", client ).depends_on( "com.example.service" ),
		candidate( "com.example.service", service ),
		candidate( "com.example.aaa", early ),
	];

	let outcome = loader( dir.path() ).run( candidates ).unwrap();

	assert_eq!( instances( outcome.plugins() ), [ "early", "service handle", "client using service handle" ]);
	assert_eq!( outcome.context.instance( "com.example.client" ).map( String::as_str ), Some( "client using service handle" ));
	assert_eq!( outcome.context.instance( "com.example.missing" ), None );

	let plugins = outcome.into_plugins();
	assert_eq!( plugins[1].guid.as_str(), "com.example.service" );

}
