//! Application Startup
//!
//! Storage selection, service wiring and server initialization.

use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;

use crate::application::security::{AuthenticationTokenManager, PasswordHash};
use crate::application::services::{
    AuthService, AuthServiceImpl, CommentService, CommentServiceImpl, ReplyService,
    ReplyServiceImpl, ThreadService, ThreadServiceImpl, UserService, UserServiceImpl,
};
use crate::config::{CorsSettings, Settings, StorageBackend};
use crate::domain::{
    AuthenticationRepository, CommentRepository, ReplyRepository, ThreadRepository,
    UserRepository,
};
use crate::infrastructure::database;
use crate::infrastructure::memory::MemoryStore;
use crate::infrastructure::repositories::{
    PgAuthenticationRepository, PgCommentRepository, PgReplyRepository, PgThreadRepository,
    PgUserRepository,
};
use crate::infrastructure::security::{Argon2PasswordHash, JwtTokenManager};
use crate::presentation::http::routes;
use crate::presentation::middleware::{cors, logging};
use crate::shared::id::{IdGenerator, UuidGenerator};

/// One implementation of every repository trait.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub authentications: Arc<dyn AuthenticationRepository>,
    pub threads: Arc<dyn ThreadRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub replies: Arc<dyn ReplyRepository>,
}

impl Repositories {
    /// PostgreSQL-backed repositories sharing one pool
    pub fn postgres(pool: PgPool, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            users: Arc::new(PgUserRepository::new(pool.clone(), ids.clone())),
            authentications: Arc::new(PgAuthenticationRepository::new(pool.clone())),
            threads: Arc::new(PgThreadRepository::new(pool.clone(), ids.clone())),
            comments: Arc::new(PgCommentRepository::new(pool.clone(), ids.clone())),
            replies: Arc::new(PgReplyRepository::new(pool, ids)),
        }
    }

    /// All repositories served by one in-memory store
    pub fn memory(store: Arc<MemoryStore>) -> Self {
        Self {
            users: store.clone(),
            authentications: store.clone(),
            threads: store.clone(),
            comments: store.clone(),
            replies: store,
        }
    }
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserService>,
    pub auth: Arc<dyn AuthService>,
    pub threads: Arc<dyn ThreadService>,
    pub comments: Arc<dyn CommentService>,
    pub replies: Arc<dyn ReplyService>,
    pub token_manager: Arc<dyn AuthenticationTokenManager>,
}

impl AppState {
    /// Wire every use case to the given repositories and security collaborators
    pub fn new(
        repositories: &Repositories,
        password_hash: Arc<dyn PasswordHash>,
        token_manager: Arc<dyn AuthenticationTokenManager>,
    ) -> Self {
        Self {
            users: Arc::new(UserServiceImpl::new(
                repositories.users.clone(),
                password_hash.clone(),
            )),
            auth: Arc::new(AuthServiceImpl::new(
                repositories.users.clone(),
                repositories.authentications.clone(),
                password_hash,
                token_manager.clone(),
            )),
            threads: Arc::new(ThreadServiceImpl::new(
                repositories.threads.clone(),
                repositories.comments.clone(),
                repositories.replies.clone(),
            )),
            comments: Arc::new(CommentServiceImpl::new(
                repositories.threads.clone(),
                repositories.comments.clone(),
            )),
            replies: Arc::new(ReplyServiceImpl::new(
                repositories.threads.clone(),
                repositories.comments.clone(),
                repositories.replies.clone(),
            )),
            token_manager,
        }
    }
}

/// Router with request tracing and CORS applied
pub fn build_router(state: AppState, cors_settings: &CorsSettings) -> Router {
    routes::create_router(state)
        .layer(logging::create_trace_layer())
        .layer(cors::create_cors_layer(cors_settings))
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
    pool: Option<PgPool>,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        let ids: Arc<dyn IdGenerator> = Arc::new(UuidGenerator);

        let (repositories, pool) = match settings.storage.backend {
            StorageBackend::Postgres => {
                let pool = database::create_pool(&settings.database).await?;
                tracing::info!("Database connection pool created");

                database::run_migrations(&pool).await?;
                tracing::info!("Database migrations applied");

                (Repositories::postgres(pool.clone(), ids), Some(pool))
            }
            StorageBackend::Memory => {
                tracing::warn!("Using in-memory storage; data is lost on shutdown");
                (Repositories::memory(Arc::new(MemoryStore::new(ids))), None)
            }
        };

        let state = AppState::new(
            &repositories,
            Arc::new(Argon2PasswordHash::new()),
            Arc::new(JwtTokenManager::new(&settings.tokens)),
        );

        let router = build_router(state, &settings.cors);

        let addr = settings.server_addr();
        let listener = TcpListener::bind(&addr).await?;
        tracing::info!("Listening on {}", addr);

        Ok(Self {
            listener,
            router,
            pool,
        })
    }

    /// Run the server until a shutdown signal arrives, then release the store
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        if let Some(pool) = self.pool {
            database::close_pool(&pool).await;
        }

        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<std::net::SocketAddr> {
        self.listener.local_addr()
    }
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();

    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => tokio::select! {
                _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
                _ = sigterm.recv() => tracing::info!("Received SIGTERM, shutting down..."),
            },
            Err(e) => {
                tracing::warn!(error = %e, "Failed to install SIGTERM handler");
                ctrl_c.await.ok();
                tracing::info!("Received Ctrl+C, shutting down...");
            }
        }
    }

    #[cfg(not(unix))]
    {
        ctrl_c.await.ok();
        tracing::info!("Received Ctrl+C, shutting down...");
    }
}
