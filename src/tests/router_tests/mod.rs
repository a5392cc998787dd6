mod home_tests;
mod properties_tests;
mod search_tests;
