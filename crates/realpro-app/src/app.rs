//! Application facade: one store handle wired into the auth and
//! ticket services, plus the theme slot for the rendering layer.

use std::time::Duration;

use chrono::Utc;
use realpro_auth::{AuthConfig, AuthService, LoginInput, SignupInput};
use realpro_core::error::{RealProError, RealProResult};
use realpro_core::models::session::Session;
use realpro_core::models::theme::Theme;
use realpro_core::models::ticket::{Ticket, TicketDraft, TicketStats};
use realpro_core::store::{KeyValueStore, keys};
use realpro_tickets::TicketStore;

/// Facade configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub auth: AuthConfig,
    /// Fixed artificial delay applied to signup, login, ticket
    /// creation, and dashboard loads. It never fails — there is no
    /// real I/O behind it. Zero in tests.
    pub simulated_latency: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            auth: AuthConfig::default(),
            simulated_latency: Duration::from_millis(1500),
        }
    }
}

/// Data the dashboard renders: counters plus the freshest tickets.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub stats: TicketStats,
    pub recent: Vec<Ticket>,
}

/// The application facade the rendering layer calls into.
#[derive(Clone)]
pub struct App<S: KeyValueStore> {
    store: S,
    auth: AuthService<S>,
    tickets: TicketStore<S>,
    simulated_latency: Duration,
}

impl<S: KeyValueStore> App<S> {
    pub fn new(store: S, config: AppConfig) -> Self {
        Self {
            auth: AuthService::new(store.clone(), config.auth),
            tickets: TicketStore::new(store.clone()),
            store,
            simulated_latency: config.simulated_latency,
        }
    }

    pub fn auth(&self) -> &AuthService<S> {
        &self.auth
    }

    pub fn tickets(&self) -> &TicketStore<S> {
        &self.tickets
    }

    async fn simulate_request(&self) {
        if !self.simulated_latency.is_zero() {
            tokio::time::sleep(self.simulated_latency).await;
        }
    }

    /// Create an account and sign it in.
    pub async fn signup(&self, input: SignupInput) -> RealProResult<Session> {
        self.simulate_request().await;
        self.auth.signup(input).await
    }

    /// Authenticate and issue a session.
    pub async fn login(&self, input: LoginInput) -> RealProResult<Session> {
        self.simulate_request().await;
        self.auth.login(input).await
    }

    /// Drop the persisted session.
    pub async fn logout(&self) -> RealProResult<()> {
        self.auth.logout().await
    }

    /// Whether a valid session exists right now.
    pub async fn is_authenticated(&self) -> RealProResult<bool> {
        self.auth.is_authenticated().await
    }

    /// Create a ticket on behalf of the signed-in user.
    ///
    /// The session gates access and stamps `created_by`; without a
    /// valid session the rendering layer redirects to login instead.
    pub async fn create_ticket(&self, draft: TicketDraft) -> RealProResult<Ticket> {
        self.simulate_request().await;
        let session = self
            .auth
            .sessions()
            .get()
            .await?
            .filter(|s| s.is_valid_at(Utc::now()))
            .ok_or_else(|| RealProError::AuthenticationFailed {
                reason: "sign in to create tickets".into(),
            })?;
        self.tickets.create(draft, &session.email).await
    }

    /// Counters and recent tickets, from a single list read.
    pub async fn dashboard(&self) -> RealProResult<Dashboard> {
        self.simulate_request().await;
        let all = self.tickets.list().await?;
        Ok(Dashboard {
            stats: realpro_tickets::stats(&all),
            recent: realpro_tickets::recent(&all),
        })
    }

    /// The stored theme preference, defaulting to light.
    pub async fn theme(&self) -> RealProResult<Theme> {
        let raw = self.store.get(keys::THEME).await?;
        Ok(raw.as_deref().and_then(Theme::parse).unwrap_or_default())
    }

    /// Persist the theme preference as its literal slot value.
    pub async fn set_theme(&self, theme: Theme) -> RealProResult<()> {
        self.store.set(keys::THEME, theme.as_str().to_string()).await
    }
}
