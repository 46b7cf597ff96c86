//! End-to-end tests for the application facade.

use std::time::Duration;

use realpro_app::{App, AppConfig};
use realpro_auth::{LoginInput, SignupInput};
use realpro_core::error::RealProError;
use realpro_core::models::theme::Theme;
use realpro_core::models::ticket::TicketDraft;
use realpro_store::MemoryStore;

fn test_config() -> AppConfig {
    AppConfig {
        simulated_latency: Duration::ZERO,
        ..AppConfig::default()
    }
}

fn setup() -> App<MemoryStore> {
    App::new(MemoryStore::new(), test_config())
}

fn ann() -> SignupInput {
    SignupInput {
        name: "Ann".into(),
        email: "a@x.com".into(),
        password: "secret".into(),
        confirm_password: "secret".into(),
    }
}

#[tokio::test]
async fn signup_create_and_dashboard_flow() {
    let app = setup();

    app.signup(ann()).await.unwrap();
    assert!(app.is_authenticated().await.unwrap());

    let ticket = app
        .create_ticket(TicketDraft {
            title: "Cannot print".into(),
            description: "Printer fails on page 2 every time".into(),
            ..TicketDraft::default()
        })
        .await
        .unwrap();

    // The session email is stamped onto the ticket.
    assert_eq!(ticket.created_by, "a@x.com");

    let dashboard = app.dashboard().await.unwrap();
    assert_eq!(dashboard.stats.total, 1);
    assert_eq!(dashboard.stats.open, 1);
    assert_eq!(dashboard.recent.len(), 1);
    assert_eq!(dashboard.recent[0].id, ticket.id);
}

#[tokio::test]
async fn ticket_creation_requires_a_session() {
    let app = setup();

    let err = app
        .create_ticket(TicketDraft {
            title: "Cannot print".into(),
            description: "Printer fails on page 2 every time".into(),
            ..TicketDraft::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, RealProError::AuthenticationFailed { .. }));

    // Logging out closes the door again.
    app.signup(ann()).await.unwrap();
    app.logout().await.unwrap();
    let err = app
        .create_ticket(TicketDraft {
            title: "Cannot print".into(),
            description: "Printer fails on page 2 every time".into(),
            ..TicketDraft::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, RealProError::AuthenticationFailed { .. }));
}

#[tokio::test]
async fn login_after_logout_restores_access() {
    let app = setup();
    app.signup(ann()).await.unwrap();
    app.logout().await.unwrap();
    assert!(!app.is_authenticated().await.unwrap());

    app.login(LoginInput {
        email: "a@x.com".into(),
        password: "secret".into(),
    })
    .await
    .unwrap();
    assert!(app.is_authenticated().await.unwrap());
}

#[tokio::test]
async fn theme_defaults_to_light_and_roundtrips() {
    let app = setup();
    assert_eq!(app.theme().await.unwrap(), Theme::Light);

    app.set_theme(Theme::Dark).await.unwrap();
    assert_eq!(app.theme().await.unwrap(), Theme::Dark);

    // Another facade over the same store sees the preference.
    let store = MemoryStore::new();
    let first = App::new(store.clone(), test_config());
    let second = App::new(store, test_config());
    first.set_theme(Theme::Dark).await.unwrap();
    assert_eq!(second.theme().await.unwrap(), Theme::Dark);
}
