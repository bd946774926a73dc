pub mod formatter;

pub use formatter::{
    format_ranked_table, format_result_detail, format_score, format_tsv, should_use_colors,
};
