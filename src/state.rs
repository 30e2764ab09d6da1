//! Shared application state injected into every handler.

use chrono::Duration;
use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{
    AuthService, LocationService, PostService, UserService, WeatherService,
};
use crate::infrastructure::http::NwsClient;
use crate::infrastructure::persistence::{
    PgLocationRepository, PgPostRepository, PgSessionRepository, PgUserRepository,
};
use crate::infrastructure::storage::UploadStore;
use crate::utils::cookie::CookieSettings;

pub type AppAuthService = AuthService<PgSessionRepository, PgUserRepository>;
pub type AppPostService = PostService<PgPostRepository, PgLocationRepository, UploadStore>;

/// Session-related settings taken from configuration.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub secret: String,
    pub ttl: Duration,
    pub cookie_secure: bool,
}

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AppAuthService>,
    pub user_service: Arc<UserService<PgUserRepository>>,
    pub post_service: Arc<AppPostService>,
    pub location_service: Arc<LocationService<PgLocationRepository>>,
    pub weather_service: Arc<WeatherService<NwsClient>>,
    pub uploads: Arc<UploadStore>,
    pub cookie: CookieSettings,
    pub max_upload_bytes: usize,
}

impl AppState {
    /// Wires repositories and services over one pool.
    pub fn new(
        pool: Arc<PgPool>,
        uploads: UploadStore,
        weather: NwsClient,
        session: SessionSettings,
        max_upload_bytes: usize,
    ) -> Self {
        let users = Arc::new(PgUserRepository::new(pool.clone()));
        let sessions = Arc::new(PgSessionRepository::new(pool.clone()));
        let posts = Arc::new(PgPostRepository::new(pool.clone()));
        let locations = Arc::new(PgLocationRepository::new(pool));
        let uploads = Arc::new(uploads);

        let cookie = CookieSettings {
            secure: session.cookie_secure,
            max_age_secs: session.ttl.num_seconds(),
        };

        Self {
            auth_service: Arc::new(AuthService::new(
                sessions,
                users.clone(),
                session.secret,
                session.ttl,
            )),
            user_service: Arc::new(UserService::new(users)),
            post_service: Arc::new(PostService::new(posts, locations.clone(), uploads.clone())),
            location_service: Arc::new(LocationService::new(locations)),
            weather_service: Arc::new(WeatherService::new(Arc::new(weather))),
            uploads,
            cookie,
            max_upload_bytes,
        }
    }
}
