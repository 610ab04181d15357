use std::fmt;

use crate::config::ConfigError;
use crate::planning::projector::PlanningError;
use crate::store::seed::SeedError;
use crate::store::StoreError;

#[derive(Debug)]
pub enum WardstatError {
    Store(StoreError),
    Planning(PlanningError),
    Config(ConfigError),
    Seed(SeedError),
}

impl fmt::Display for WardstatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WardstatError::Store(err) => write!(f, "Store error: {}", err),
            WardstatError::Planning(err) => write!(f, "Planning error: {}", err),
            WardstatError::Config(err) => write!(f, "Config error: {}", err),
            WardstatError::Seed(err) => write!(f, "Seed error: {}", err),
        }
    }
}

impl std::error::Error for WardstatError {}

impl From<StoreError> for WardstatError {
    fn from(err: StoreError) -> Self {
        WardstatError::Store(err)
    }
}

impl From<PlanningError> for WardstatError {
    fn from(err: PlanningError) -> Self {
        WardstatError::Planning(err)
    }
}

impl From<ConfigError> for WardstatError {
    fn from(err: ConfigError) -> Self {
        WardstatError::Config(err)
    }
}

impl From<SeedError> for WardstatError {
    fn from(err: SeedError) -> Self {
        WardstatError::Seed(err)
    }
}
