pub mod diff_service;
