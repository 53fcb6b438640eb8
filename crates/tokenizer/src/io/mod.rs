//! Reading and writing frequency table files.
//!
//! Each table lives in its own gzip-compressed JSON file named after the
//! wordlist and language, e.g. `combined_en.cbpack.gz`.

pub mod format;
pub mod load;
pub mod save;

pub use format::{
    parse_table_filename, table_filename, SerializedBucket, SerializedTable, DEFAULT_WORDLIST,
    FORMAT_NAME, FORMAT_VERSION, TABLE_EXTENSION,
};
pub use load::TableLoader;
pub use save::TableSaver;
