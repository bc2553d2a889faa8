#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicU64, Ordering},
};

use async_trait::async_trait;
use axum::{Router, middleware, routing::get};
use axum_test::TestServer;
use chrono::{DateTime, Duration, Utc};
use serde_json::json;

use linkstash::api::handlers::{health_handler, hello_handler};
use linkstash::api::middleware::auth;
use linkstash::api::routes;
use linkstash::application::services::{AuthService, LinkService, UserService};
use linkstash::domain::entities::{Link, NewLink, NewUser, User};
use linkstash::domain::repositories::{LinkRepository, UserRepository};
use linkstash::error::AppError;
use linkstash::infrastructure::shortener::{Shortened, ShortenerError, ShortenerService};
use linkstash::state::AppState;

/// Signing secret shared by every test server; tests that hand-craft tokens
/// must sign with this value.
pub const TEST_SECRET: &str = "test-signing-secret";

/// In-memory [`UserRepository`] enforcing the same email uniqueness the
/// database schema does.
pub struct MemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut users = self.users.lock().unwrap();

        if users.iter().any(|u| u.email == new_user.email) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "users_email_key" }),
            ));
        }

        let user = User::new(
            users.len() as i64 + 1,
            new_user.name,
            new_user.last_name,
            new_user.email,
            new_user.password_hash,
            Utc::now(),
        );
        users.push(user.clone());

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        let mut users = self.users.lock().unwrap().clone();
        users.sort_by(|a, b| (b.register_date, b.id).cmp(&(a.register_date, a.id)));
        Ok(users)
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.users.lock().unwrap().len() as i64)
    }
}

/// In-memory [`LinkRepository`] with strictly increasing creation dates so
/// ordering assertions are deterministic.
pub struct MemoryLinkRepository {
    links: Mutex<Vec<Link>>,
    base: DateTime<Utc>,
}

impl MemoryLinkRepository {
    pub fn new() -> Self {
        Self {
            links: Mutex::new(Vec::new()),
            base: Utc::now(),
        }
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut links = self.links.lock().unwrap();

        let id = links.len() as i64 + 1;
        let link = Link::new(
            id,
            new_link.user_id,
            new_link.name,
            new_link.url,
            new_link.short_link,
            self.base + Duration::seconds(id),
        );
        links.push(link.clone());

        Ok(link)
    }

    async fn list_by_owner(&self, user_id: i64) -> Result<Vec<Link>, AppError> {
        let mut links: Vec<Link> = self
            .links
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.user_id == user_id)
            .cloned()
            .collect();

        links.sort_by(|a, b| (b.creation_date, b.id).cmp(&(a.creation_date, a.id)));

        Ok(links)
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.links.lock().unwrap().len() as i64)
    }
}

/// Fake shortener handing out sequential rel.ink-style short URLs.
pub struct FakeShortener {
    counter: AtomicU64,
}

impl FakeShortener {
    pub fn new() -> Self {
        Self {
            counter: AtomicU64::new(0),
        }
    }
}

#[async_trait]
impl ShortenerService for FakeShortener {
    async fn shorten(&self, url: &str) -> Result<Shortened, ShortenerError> {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);

        Ok(Shortened {
            url: url.to_string(),
            short_url: format!("https://rel.ink/t{n:05}"),
        })
    }
}

/// Shortener that always fails, for exercising the 502 path.
pub struct FailingShortener;

#[async_trait]
impl ShortenerService for FailingShortener {
    async fn shorten(&self, _url: &str) -> Result<Shortened, ShortenerError> {
        Err(ShortenerError::Api {
            status: 500,
            body: "shortening backend down".to_string(),
        })
    }
}

/// Builds a test server over the real routes and auth middleware, backed by
/// in-memory repositories and the given shortener.
///
/// Rate limiting layers are omitted; they key on the socket peer address,
/// which `TestServer` requests do not carry.
pub fn create_test_server_with(shortener: Arc<dyn ShortenerService>) -> TestServer {
    let users: Arc<dyn UserRepository> = Arc::new(MemoryUserRepository::new());
    let links: Arc<dyn LinkRepository> = Arc::new(MemoryLinkRepository::new());

    let auth_service = Arc::new(AuthService::new(
        users.clone(),
        TEST_SECRET.to_string(),
        86_400,
    ));
    let user_service = Arc::new(UserService::new(users));
    let link_service = Arc::new(LinkService::new(links, shortener));

    let state = AppState::new(auth_service, user_service, link_service);

    let protected = routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let app = Router::new()
        .route("/", get(hello_handler))
        .route("/health", get(health_handler))
        .merge(protected)
        .merge(routes::credential_routes())
        .with_state(state);

    TestServer::new(app).unwrap()
}

/// Builds a test server with the default fake shortener.
pub fn create_test_server() -> TestServer {
    create_test_server_with(Arc::new(FakeShortener::new()))
}

/// Registers a user through `/sing-up` and returns the issued token.
pub async fn register(server: &TestServer, name: &str, email: &str, password: &str) -> String {
    let response = server
        .post("/sing-up")
        .json(&json!({ "name": name, "email": email, "password": password }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    body["token"].as_str().unwrap().to_string()
}
