use mongodb::{
    bson::doc,
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client, Collection,
};
use std::time::Duration;

use crate::{config::Config, errors::AppResult};

#[derive(Clone)]
pub struct Database {
    client: Client,
    db_name: String,
}

impl Database {
    pub async fn connect(config: &Config) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(&config.mongo_conn_string).await?;

        let server_api = ServerApi::builder().version(ServerApiVersion::V1).build();
        client_options.server_api = Some(server_api);
        client_options.max_pool_size = Some(10);
        client_options.min_pool_size = Some(2);
        client_options.connect_timeout = Some(Duration::from_secs(5));
        client_options.server_selection_timeout = Some(Duration::from_secs(5));

        let client = Client::with_options(client_options)?;

        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;

        log::info!("connected to MongoDB at {}", config.mongo_conn_string);

        Ok(Self {
            client,
            db_name: config.mongo_db_name.clone(),
        })
    }

    pub fn get_collection<T>(&self, collection_name: &str) -> Collection<T>
    where
        T: Send + Sync,
    {
        self.client
            .database(&self.db_name)
            .collection(collection_name)
    }

    pub async fn health_check(&self) -> AppResult<()> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }

    /// Handle whose pings always fail, and fail fast. Lets tests wire
    /// application state without a running store.
    #[cfg(any(test, feature = "test-support"))]
    pub fn detached() -> Self {
        use mongodb::options::ServerAddress;

        let mut client_options = ClientOptions::default();
        // Port 1 is never served; the short timeouts keep readiness probes
        // in tests from stalling.
        client_options.hosts = vec![ServerAddress::Tcp {
            host: "127.0.0.1".to_string(),
            port: Some(1),
        }];
        client_options.connect_timeout = Some(Duration::from_millis(100));
        client_options.server_selection_timeout = Some(Duration::from_millis(100));

        let client = Client::with_options(client_options)
            .unwrap_or_else(|err| panic!("detached client options are static: {}", err));

        Self {
            client,
            db_name: "quizbar-test".to_string(),
        }
    }
}
