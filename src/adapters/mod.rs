pub mod exporters;
pub mod parsers;
