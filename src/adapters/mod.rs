// Adapters layer: concrete implementations for external systems (file storage).

pub mod csv_storage;

pub use csv_storage::CsvFileStorage;
