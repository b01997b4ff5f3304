use portfolio_api::achievement::adapter::outgoing::{
    AchievementQueryFallback, AchievementQueryPostgres,
};
use portfolio_api::achievement::application::service::GetAchievementsService;
use portfolio_api::api::openapi::ApiDoc;
use portfolio_api::config::{AppConfig, NotificationConfig};
use portfolio_api::contact::adapter::outgoing::{ContactQueryPostgres, ContactRepositoryPostgres};
use portfolio_api::contact::application::contact_use_cases::ContactUseCases;
use portfolio_api::contact::application::service::{
    ListContactMessagesService, SubmitContactService,
};
use portfolio_api::education::adapter::outgoing::EducationQueryPostgres;
use portfolio_api::education::application::service::GetEducationService;
use portfolio_api::email::adapter::outgoing::SmtpEmailSender;
use portfolio_api::email::application::ports::outgoing::{ContactNotifier, EmailSender};
use portfolio_api::email::application::service::ContactEmailNotifier;
use portfolio_api::experience::adapter::outgoing::ExperienceQueryPostgres;
use portfolio_api::experience::application::service::GetExperiencesService;
use portfolio_api::project::adapter::outgoing::{ProjectQueryFallback, ProjectQueryPostgres};
use portfolio_api::project::application::project_use_cases::ProjectUseCases;
use portfolio_api::project::application::service::{GetProjectsService, GetSingleProjectService};
use portfolio_api::shared::api::custom_json_config;
use portfolio_api::shared::store::{AvailabilityGate, StoreHandle, StoreStatus};
use portfolio_api::skill::adapter::outgoing::SkillQueryPostgres;
use portfolio_api::skill::application::service::GetSkillsService;
use portfolio_api::{init_routes, AppState};

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;

    // Store: lazy pool plus heartbeat, never blocks startup
    let store = StoreHandle::open(&config.store).await;
    let _heartbeat = store.spawn_heartbeat(config.store.heartbeat_interval);
    let db = store.connection();
    let store_status: Arc<dyn StoreStatus> = Arc::new(store.clone());
    let gate = AvailabilityGate::new(Arc::clone(&store_status));

    // Projects
    let project_query = ProjectQueryPostgres::new(Arc::clone(&db));
    let project = ProjectUseCases {
        get_list: Arc::new(GetProjectsService::new(
            project_query.clone(),
            ProjectQueryFallback::new(),
            gate.clone(),
        )),
        get_single: Arc::new(GetSingleProjectService::new(
            project_query,
            ProjectQueryFallback::new(),
            gate.clone(),
        )),
    };

    // Profile collections
    let skill = Arc::new(GetSkillsService::new(
        SkillQueryPostgres::new(Arc::clone(&db)),
        gate.clone(),
    ));
    let education = Arc::new(GetEducationService::new(
        EducationQueryPostgres::new(Arc::clone(&db)),
        gate.clone(),
    ));
    let experience = Arc::new(GetExperiencesService::new(
        ExperienceQueryPostgres::new(Arc::clone(&db)),
        gate.clone(),
    ));
    let achievement = Arc::new(GetAchievementsService::new(
        AchievementQueryPostgres::new(Arc::clone(&db)),
        AchievementQueryFallback::new(),
        gate.clone(),
    ));

    // Contact
    let notifier = config.notification.as_ref().and_then(build_notifier);
    let contact = ContactUseCases {
        submit: Arc::new(SubmitContactService::new(
            ContactRepositoryPostgres::new(Arc::clone(&db)),
            gate.clone(),
            notifier,
        )),
        list: Arc::new(ListContactMessagesService::new(
            ContactQueryPostgres::new(Arc::clone(&db)),
            gate,
        )),
    };

    let state = AppState {
        store_status,
        project,
        skill,
        education,
        experience,
        achievement,
        contact,
    };

    let server_url = config.bind_address();
    info!("Server running on: {}", server_url);

    let openapi = ApiDoc::openapi();

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "POST"])
                    .allow_any_header(),
            )
            .app_data(web::Data::new(state.clone()))
            .app_data(custom_json_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn build_notifier(config: &NotificationConfig) -> Option<Arc<dyn ContactNotifier + Send + Sync>> {
    match SmtpEmailSender::relay(&config.smtp_server, &config.username, &config.password) {
        Ok(sender) => {
            info!(recipient = %config.recipient, "Contact notifications enabled");
            let sender: Arc<dyn EmailSender + Send + Sync> = Arc::new(sender);
            Some(Arc::new(ContactEmailNotifier::new(sender, &config.recipient)))
        }
        Err(e) => {
            error!(error = %e, "Invalid SMTP relay, contact notifications disabled");
            None
        }
    }
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
        std::process::exit(1);
    }
}
