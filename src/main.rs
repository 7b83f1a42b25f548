use actix_files as fs;
use actix_web::{App, HttpServer, middleware::Logger, web};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use szamlakezelo::{
  adapters::http::{
    RequestIdMiddleware, TemplateEngine, configure_client_routes, configure_invoice_routes,
    configure_web_routes,
  },
  application::client::{DeleteClientUseCase, ListClientsUseCase, RegisterClientUseCase},
  application::invoice::{
    CancelInvoiceUseCase, CreateInvoiceUseCase, GetInvoiceDetailsUseCase, ListInvoicesUseCase,
    UpdateInvoiceUseCase,
  },
  domain::client::ClientRegistry,
  domain::invoice::InvoiceCatalog,
  infrastructure::{
    config::Config,
    persistence::{
      seed::seed_demo_data,
      sqlite::{self, SqliteClientRepository, SqliteInvoiceRepository},
    },
  },
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize environment variables from .env file
  dotenvy::dotenv().ok();

  // Initialize tracing subscriber for logging
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "szamlakezelo=debug,actix_web=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::info!("Starting Számlakezelő");

  // Load configuration
  let config = Config::load().map_err(|e| {
    tracing::error!("Failed to load configuration: {}", e);
    std::io::Error::other(format!("Configuration error: {}", e))
  })?;
  tracing::info!("Configuration loaded successfully");

  // Set up database connection pool with timeout
  tracing::info!("Opening database: {}", config.database.url);

  let db_pool = tokio::time::timeout(
    Duration::from_secs(config.database.connect_timeout_seconds),
    sqlite::connect(&config.database),
  )
  .await
  .map_err(|_| {
    tracing::error!(
      "Database connection timed out after {} seconds",
      config.database.connect_timeout_seconds
    );
    std::io::Error::new(
      std::io::ErrorKind::TimedOut,
      format!(
        "Database connection timed out after {} seconds",
        config.database.connect_timeout_seconds
      ),
    )
  })?
  .map_err(|e| {
    tracing::error!("Failed to open database: {}", e);
    std::io::Error::other(format!("Database error: {}", e))
  })?;

  tracing::info!("Database connection pool created");

  // Run database migrations
  tracing::info!("Running database migrations");
  sqlite::MIGRATOR.run(&db_pool).await.map_err(|e| {
    tracing::error!("Failed to run database migrations: {}", e);
    std::io::Error::other(format!("Migration error: {}", e))
  })?;
  tracing::info!("Database migrations completed");

  // Initialize repositories
  let client_repo = Arc::new(SqliteClientRepository::new(db_pool.clone()));
  let invoice_repo = Arc::new(SqliteInvoiceRepository::new(db_pool.clone()));

  // Initialize domain services
  let client_registry = Arc::new(ClientRegistry::new(client_repo));
  let invoice_catalog = Arc::new(InvoiceCatalog::new(invoice_repo, client_registry.clone()));

  if config.seed.demo_data {
    match seed_demo_data(&client_registry, &invoice_catalog).await {
      Ok(0) => {}
      Ok(count) => tracing::info!("Demo data seeded with {} invoices", count),
      Err(e) => tracing::warn!("Demo data seeding failed: {}", e),
    }
  }

  // Initialize use cases
  let register_client_use_case = Arc::new(RegisterClientUseCase::new(client_registry.clone()));
  let list_clients_use_case = Arc::new(ListClientsUseCase::new(client_registry.clone()));
  let delete_client_use_case = Arc::new(DeleteClientUseCase::new(client_registry.clone()));

  let create_invoice_use_case = Arc::new(CreateInvoiceUseCase::new(invoice_catalog.clone()));
  let update_invoice_use_case = Arc::new(UpdateInvoiceUseCase::new(invoice_catalog.clone()));
  let cancel_invoice_use_case = Arc::new(CancelInvoiceUseCase::new(invoice_catalog.clone()));
  let get_invoice_details_use_case =
    Arc::new(GetInvoiceDetailsUseCase::new(invoice_catalog.clone()));
  let list_invoices_use_case = Arc::new(ListInvoicesUseCase::new(invoice_catalog.clone()));

  // Initialize template engine
  let templates = TemplateEngine::new().map_err(|e| {
    tracing::error!("Failed to load templates: {}", e);
    std::io::Error::other(format!("Template error: {}", e))
  })?;
  tracing::info!("Template engine initialized");

  let (server_host, server_port) = config.bind_address();
  tracing::info!("Starting HTTP server on {}:{}", server_host, server_port);

  HttpServer::new(move || {
    App::new()
      // Add request ID middleware
      .wrap(RequestIdMiddleware::new())
      // Add logging middleware
      .wrap(Logger::default())
      // Configure web UI routes
      .configure(|cfg| {
        configure_web_routes(
          cfg,
          templates.clone(),
          list_invoices_use_case.clone(),
          get_invoice_details_use_case.clone(),
        )
      })
      // Configure invoice API routes
      .service(web::scope("/api/invoices").configure(|cfg| {
        configure_invoice_routes(
          cfg,
          list_invoices_use_case.clone(),
          create_invoice_use_case.clone(),
          get_invoice_details_use_case.clone(),
          update_invoice_use_case.clone(),
          cancel_invoice_use_case.clone(),
        )
      }))
      // Configure client API routes
      .service(web::scope("/api/clients").configure(|cfg| {
        configure_client_routes(
          cfg,
          list_clients_use_case.clone(),
          register_client_use_case.clone(),
          delete_client_use_case.clone(),
        )
      }))
      // Static files
      .service(fs::Files::new("/static", "./static"))
      // Health check endpoint
      .route("/health", web::get().to(health_check))
  })
  .bind((server_host.as_str(), server_port))?
  .run()
  .await
}

/// Health check endpoint
async fn health_check() -> &'static str {
  "OK"
}
