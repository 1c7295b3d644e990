use std::sync::Arc;

use crate::db::RecordStore;

pub struct AppState {
    pub store: Arc<dyn RecordStore>,
}
