mod partial_success ;

pub use partial_success::PartialSuccess ;
pub(crate) use partial_success::Merge ;
