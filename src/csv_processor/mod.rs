pub mod batch;
pub mod converter;
pub mod reader;
pub mod scalar;

pub use batch::{collect_csv_inputs, convert_all, output_path_for, run_conversion, BatchReport};
pub use converter::{convert_csv_to_json, read_csv_records, row_to_record};
pub use reader::{CsvRecordIterator, CsvStreamReader};
pub use scalar::{parse_scalar, ScalarValue};
