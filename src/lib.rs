pub mod record;
pub mod report;

pub use record::{FaceRecord, write_records_jsonl};
pub use report::{Face, ReportConfig, select_faces, write_report};
