pub mod bundle;
pub mod compile;
