#[macro_export]
macro_rules! assert_order {
	( $plan:expr, [ $( $guid:literal ),* $(,)? ] ) => {{
		let expected: Vec<&str> = vec![ $( $guid ),* ];
		assert_eq!( $crate::fixtures::order( &$plan ), expected, "Unexpected load order" )
	}};
}

#[allow( dead_code )]
mod fixtures {

	use chainload::{ Declared, DependencyGraph, LoadPlan, extract_all, resolve };

	pub const HOST: &str = "game.exe" ;

	/// A plugin with no declarations beyond its identity, at version 1.0.
	pub fn plugin( guid: &str ) -> Declared<()> {
		plugin_at( guid, "1.0" )
	}

	pub fn plugin_at( guid: &str, version: &str ) -> Declared<()> {
		Declared::new( format!( "plugins/{}.dll", guid ), () ).plugin( guid, guid.to_uppercase(), version )
	}

	/// Extracts, builds and resolves `candidates` for [`HOST`], asserting that no
	/// declaration was dropped along the way.
	pub fn plan( candidates: Vec<Declared<()>> ) -> LoadPlan {
		plan_in( candidates, HOST )
	}

	pub fn plan_in( candidates: Vec<Declared<()>>, host: &str ) -> LoadPlan {
		let extracted = extract_all( candidates );
		assert_no_warnings!( extracted.warnings );
		assert_no_warnings!( extracted.unidentified );
		let ( mut graph, _ ) = DependencyGraph::build( extracted.records );
		resolve( &mut graph, host )
	}

	pub fn order( plan: &LoadPlan ) -> Vec<&str> {
		plan.order().iter().map(| guid | guid.as_str() ).collect()
	}

}
