#[derive(clap::Parser, Clone, Debug)]
pub struct WalletApiConfig {
    /// Specify the hostname of the PostgreSQL server to connect to.
    #[arg(env = "DB_HOST", long, value_name = "HOST", default_value = "localhost")]
    pub db_host: String,
    /// Specify the port of the PostgreSQL server to connect to.
    #[arg(env = "DB_PORT", long, value_name = "PORT", default_value = "5432")]
    pub db_port: u16,
    /// Specify the user to connect to the database as.
    #[arg(env = "DB_USER", long, value_name = "USER", default_value = "user")]
    pub db_user: String,
    /// Specify the password to connect to the database with.
    #[arg(
        env = "DB_PASSWORD",
        long,
        value_name = "PASSWORD",
        default_value = "password"
    )]
    pub db_password: String,
    /// Specify the name of the database to connect to.
    #[arg(env = "DB_NAME", long, value_name = "NAME", default_value = "wallet_db")]
    pub db_name: String,
    /// Specify the sslmode parameter of the database connection, e.g. "disable",
    /// "prefer", "require".
    #[arg(
        env = "DB_SSLMODE",
        long,
        value_name = "SSLMODE",
        default_value = "disable"
    )]
    pub db_sslmode: String,
    /// Specify the port on which the service will listen for HTTP requests.
    #[arg(env = "PORT", long, value_name = "PORT", default_value = "8080")]
    pub port: u16,
    /// Specify the maximum number of connections to the database.
    #[arg(
        name = "database-max-connections",
        env = "DATABASE_MAX_CONNECTIONS",
        long,
        value_name = "CONNECTIONS",
        default_value = "10"
    )]
    pub database_max_connections: u32,
}

impl WalletApiConfig {
    /// Assemble the database connection URL from its parts.
    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}?sslmode={}",
            self.db_user, self.db_password, self.db_host, self.db_port, self.db_name, self.db_sslmode,
        )
    }
}
