use crate::client::ClassificationClient;
use crate::controller::Dashboard;

#[derive(Clone)]
pub struct AppState {
    pub dashboard: Dashboard,
}

impl AppState {
    pub fn new(client: ClassificationClient) -> Self {
        Self {
            dashboard: Dashboard::new(client),
        }
    }
}
