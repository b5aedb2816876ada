use crate::models::AppData;
use chrono::{Local, NaiveDate};
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub data: Arc<Mutex<AppData>>,
    pub fixed_today: Option<NaiveDate>,
}

impl AppState {
    pub fn new(data_path: PathBuf, data: AppData) -> Self {
        Self {
            data_path,
            data: Arc::new(Mutex::new(data)),
            fixed_today: None,
        }
    }

    pub fn with_today(mut self, today: Option<NaiveDate>) -> Self {
        self.fixed_today = today;
        self
    }

    /// The reference date every calculation and admission is made against.
    pub fn today(&self) -> NaiveDate {
        self.fixed_today
            .unwrap_or_else(|| Local::now().date_naive())
    }
}
