//! Stickers - 贴纸 CRUD 服务
//!
//! 启动流程: 配置 → 日志 → 存储 → HTTP 服务器

use std::sync::Arc;

use stickers::application::StickerRepositoryPort;
use stickers::config::{load_config, print_config, LogConfig, StorageBackend};
use stickers::infrastructure::http::{AppState, HttpServer, ServerConfig};
use stickers::infrastructure::memory::InMemoryStickerRepository;
use stickers::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteStickerRepository,
};
use tracing_subscriber::EnvFilter;

/// 初始化日志（`RUST_LOG` 优先于配置文件）
fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},stickers={},tower_http=debug", log.level, log.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("Stickers service v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    // 创建 Repository 适配器
    let sticker_repo: Arc<dyn StickerRepositoryPort> = match config.database.backend {
        StorageBackend::Sqlite => {
            if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
                tokio::fs::create_dir_all(parent).await?;
            }

            let db_config = DatabaseConfig {
                database_url: config.database.database_url(),
                max_connections: config.database.max_connections,
            };
            let pool = create_pool(&db_config).await?;
            run_migrations(&pool).await?;

            Arc::new(SqliteStickerRepository::new(pool))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage, data will be lost on shutdown");
            Arc::new(InMemoryStickerRepository::new())
        }
    };

    let state = AppState::new(sticker_repo, config.database.backend.as_str());
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let server = HttpServer::new(server_config, state);

    server
        .run_with_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
