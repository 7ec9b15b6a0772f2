use std::sync::Arc;

use karyakarta_db::Store;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub store: Store,
}

impl AppStateInner {
    pub fn new(store: Store) -> AppState {
        Arc::new(Self { store })
    }
}
