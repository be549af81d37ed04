mod config_tests;
mod ingest_tests;
