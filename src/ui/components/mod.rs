mod file_picker;
mod report_table;

pub use file_picker::FilePicker;
pub use report_table::ReportTable;
