use crate::cache::SessionCacheManager;
use crate::config::Config;
use crate::search::CreatorSearch;

pub struct AppState {
    pub config: Config,
    pub search: CreatorSearch,
    pub sessions: SessionCacheManager,
}
