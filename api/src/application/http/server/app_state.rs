use std::sync::Arc;

use mindscope_core::application::MindscopeService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: MindscopeService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: MindscopeService) -> Self {
        Self { args, service }
    }
}
