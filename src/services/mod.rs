pub mod data_provider;
