use nz_walks_api::infra::config::{AppConfig, StoreBackend};
use nz_walks_api::DatabaseService;

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight\n\
         \n\
         Checks configuration, connects to Postgres, creates the catalog tables\n\
         if missing and prints their row counts.\n\
         \n\
         Reads env vars (or .env):\n\
           STORE_BACKEND, DATABASE_URL, DB_MAX_CONNECTIONS, BIND_ADDR,\n\
           WALK_FIELD_VALIDATION, REFERENCE_DELETE_POLICY\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }

    // Force-read config (nice error messages if missing)
    let app_config = AppConfig::from_env()?;

    println!("> Preflight:");
    println!("  STORE_BACKEND={:?}", app_config.backend);
    println!("  BIND_ADDR={}", app_config.bind_addr);
    println!(
        "  WALK_FIELD_VALIDATION={:?}",
        app_config.policies.field_validation
    );
    println!(
        "  REFERENCE_DELETE_POLICY={:?}",
        app_config.policies.reference_delete
    );

    if app_config.backend == StoreBackend::Memory {
        println!("> In-memory backend selected; nothing to check.");
        return Ok(());
    }

    let Some(database) = app_config.database else {
        anyhow::bail!("postgres backend selected without database settings");
    };
    println!("  DB_MAX_CONNECTIONS={}", database.max_connections);

    let service = DatabaseService::connect(&database)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to connect to DATABASE_URL: {}", e))?;
    println!("> Postgres reachable; catalog tables ensured.");

    for (table, count) in service.table_counts().await? {
        println!("  {:<18} {} row(s)", table, count);
    }

    println!("> Preflight OK.");
    Ok(())
}
