pub mod env_parser;
