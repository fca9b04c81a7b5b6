use anyhow::Result;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use vextor_grid::config::database::{run_migrations, DatabaseConfig};
use vextor_grid::config::environment::EnvironmentConfig;
use vextor_grid::{create_app_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenvy::dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("vextor_grid=debug,tower_http=info")),
        )
        .init();

    info!("🛰️ VextorGrid - Fleet Readiness API");
    info!("================================================");

    let config = EnvironmentConfig::from_env()?;
    let db_config = DatabaseConfig::from_env()?;

    let pool = match db_config.create_pool().await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };
    info!("✅ Base de datos conectada");

    if config.run_migrations {
        run_migrations(&pool).await?;
        info!("✅ Migraciones aplicadas");
    } else {
        warn!("⚠️ RUN_MIGRATIONS desactivado, se asume el esquema existente");
    }

    let addr: SocketAddr = config.server_url().parse()?;
    let app_state = AppState::new(pool, config)?;
    let app = create_app_router(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🚗 Vehículos:");
    info!("   POST/GET /api/vehicles - Crear / listar vehículos");
    info!("   GET/PUT/DELETE /api/vehicles/:id - Vehículo");
    info!("   POST /api/vehicles/:id/oil-change - Registrar cambio de aceite");
    info!("⛽ Combustible:");
    info!("   POST/GET /api/fuel-logs - Registrar / listar cargas");
    info!("   PUT/DELETE /api/fuel-logs/:id - Editar / eliminar carga");
    info!("📦 Misiones:");
    info!("   POST/GET /api/missions - Crear / listar misiones");
    info!("   POST /api/missions/quote - Cotizar una oferta");
    info!("   POST /api/missions/:id/complete|proof|reassign|toggle-paid");
    info!("💸 Gastos:");
    info!("   POST/GET /api/expenses, DELETE /api/expenses/:id");
    info!("📊 Analítica:");
    info!("   GET  /api/analytics/readiness - Preparación de la flota");
    info!("   GET  /api/analytics/vehicles/:id - Analítica por vehículo");
    info!("   GET  /api/analytics/earnings - Ganancias");
    info!("📸 Intel:");
    info!("   POST/GET /api/field-reports - Reportes de campo");
    info!("   GET  /api/intel/queue, POST /api/intel/:id/publish|hold (admin)");
    info!("   GET  /public/intel/:slug, GET /public/leaderboard");
    info!("🌦️ Clima:");
    info!("   POST /api/weather - Clima actual por código postal");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo escuchar Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
