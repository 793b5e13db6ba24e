pub mod diff_result;
pub mod parsed_env;
