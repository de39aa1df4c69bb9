use std::sync::Arc;

use crate::repository::funnel::Repository;

pub struct AppState {
    pub repo: Arc<dyn Repository>,
}
