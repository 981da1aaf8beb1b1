use anyhow::{Context, Result};
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};
use dotenvy::dotenv;

use fleet_insights::config::environment::EnvironmentConfig;
use fleet_insights::create_app;
use fleet_insights::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env().context("Configuración inválida")?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("🚘 Fleet Insights - Analítica de flota (datos simulados)");
    info!("=======================================================");
    info!("⚙️  Entorno: {}", config.environment);
    info!(
        "🎲 Semilla: {}",
        config.rng_seed.map(|s| s.to_string()).unwrap_or_else(|| "aleatoria".to_string())
    );
    info!("🔎 Política de búsqueda: {:?}", config.lookup_policy);
    info!("📸 Modo de snapshot: {}", config.snapshot_mode.as_str());

    let addr: SocketAddr = config
        .server_url()
        .parse()
        .with_context(|| format!("Dirección inválida: {}", config.server_url()))?;

    let app = create_app(AppState::new(config));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("   GET  /api/oem/overview - KPIs de la flota");
    info!("   GET  /api/oem/models - Resumen por modelo");
    info!("   GET  /api/oem/models/:model_id - Rendimiento de un modelo");
    info!("   GET  /api/oem/service-centers - Centros de servicio");
    info!("   GET  /api/oem/service-centers/:id - Detalle de un centro");
    info!("   POST /api/oem/chat - Asistente conversacional");
    info!("   GET  /api/oem/snapshot - Estado del snapshot");
    info!("   POST /api/oem/snapshot/refresh - Regenerar snapshot");

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
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
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
