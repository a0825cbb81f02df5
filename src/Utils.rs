/// Loading calculation tasks from files: a plain-text format with SPECIES and
/// TASK sections, a JSON form of the same request, and a template generator.
pub mod task_file;
