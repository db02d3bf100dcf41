pub mod create_release_builder;
