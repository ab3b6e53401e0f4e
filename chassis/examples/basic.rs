//! Basic example of the Chassis service container.

use std::sync::Arc;

use chassis::container::Container;
use chassis::error::Result;
use chassis::key::ServiceKey;
use chassis::provider::{ServiceFactory, ServiceInstance, ServiceParams, ServiceProvider};

// === Define your services ===

trait Logger: Send + Sync {
    fn log(&self, msg: &str);
}

struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn log(&self, msg: &str) {
        println!("[LOG] {msg}");
    }
}

struct Database {
    dsn: String,
    logger: Arc<dyn Logger>,
}

impl Database {
    fn query(&self, sql: &str) -> String {
        self.logger.log(&format!("Executing: {sql}"));
        format!("Results from {}", self.dsn)
    }
}

// === Providers ===

/// Eager singleton: instantiated at bind time.
struct LoggerProvider;

impl ServiceProvider for LoggerProvider {
    fn name(&self) -> ServiceKey {
        ServiceKey::new("logger")
    }

    fn deferred(&self) -> bool {
        false
    }

    fn register(&self, _container: &Container) -> ServiceFactory {
        Box::new(|_params| {
            Ok(Arc::new(Arc::new(ConsoleLogger) as Arc<dyn Logger>) as ServiceInstance)
        })
    }
}

/// Deferred singleton: built on first resolution, with a default dsn that
/// `make_new` can override per instance.
struct DatabaseProvider;

impl ServiceProvider for DatabaseProvider {
    fn name(&self) -> ServiceKey {
        ServiceKey::new("database")
    }

    fn deferred(&self) -> bool {
        true
    }

    fn params(&self, _container: &Container) -> ServiceParams {
        vec![Box::new(String::from("postgres://localhost/myapp"))]
    }

    fn register(&self, container: &Container) -> ServiceFactory {
        let logger: Arc<Arc<dyn Logger>> = container
            .resolve("logger")
            .expect("logger is bound before database");
        Box::new(move |mut params| {
            let dsn = *params
                .pop()
                .ok_or("missing dsn parameter")?
                .downcast::<String>()
                .map_err(|_| "dsn parameter must be a String")?;
            Ok(Arc::new(Database {
                dsn,
                logger: (*logger).clone(),
            }) as ServiceInstance)
        })
    }
}

fn main() -> Result<()> {
    // Initialize tracing (logging)
    tracing_subscriber::fmt()
        .with_env_filter("chassis=debug")
        .init();

    let container = Container::new();
    container.bind(LoggerProvider)?;
    container.bind(DatabaseProvider)?;

    println!("{container:?}");

    // Singleton resolution: built once, cached
    let db: Arc<Database> = container.resolve("database")?;
    println!("{}", db.query("SELECT * FROM users"));

    let db_again: Arc<Database> = container.resolve("database")?;
    assert!(Arc::ptr_eq(&db, &db_again));

    // Fresh instance with explicit parameters; the singleton is untouched
    let replica = container.make_new(
        "database",
        vec![Box::new(String::from("postgres://replica/myapp"))],
    )?;
    let replica = replica
        .downcast::<Database>()
        .expect("database instance");
    println!("{}", replica.query("SELECT * FROM reports"));

    let still_primary: Arc<Database> = container.resolve("database")?;
    assert!(Arc::ptr_eq(&db, &still_primary));

    Ok(())
}
