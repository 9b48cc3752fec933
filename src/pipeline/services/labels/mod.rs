mod candidates;
mod categorizer;
mod descriptions;
mod formatter;

pub use candidates::{label_candidates, HYPOTHESIS_TEMPLATE};
pub use categorizer::{categorize_label, CATEGORY_KEYWORDS};
pub use descriptions::describe_label;
pub use formatter::format_label;
