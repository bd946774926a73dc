pub mod storage;

pub use storage::{
    get_history_path, load_history, save_history, update_history, ScoreHistory, ScoreRecord,
};
