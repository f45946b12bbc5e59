//! Integration test suite (requires a running server and database)

mod integration {
    mod api_tests;
}
