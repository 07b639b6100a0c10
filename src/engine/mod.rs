mod importer;

pub use importer::{import_from_reader, import_transactions};
