use clap::Parser;
use clap::builder::NonEmptyStringValueParser;

/// Tracking pixel endpoint storing one record per visit in MongoDB.
#[derive(Parser, Debug, Clone)]
#[command(name = "trck", version, about)]
pub struct Args {
    /// HTTP port
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Address to bind the HTTP listener to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// MongoDB address, `host:port` or a full connection string
    #[arg(long = "mongoAddr", env = "MONGO_ADDR", value_parser = NonEmptyStringValueParser::new())]
    pub mongo_addr: String,

    /// MongoDB database
    #[arg(long = "mongoDatabase", env = "MONGO_DATABASE", value_parser = NonEmptyStringValueParser::new())]
    pub mongo_database: String,

    /// MongoDB collection
    #[arg(long = "mongoCollection", env = "MONGO_COLLECTION", value_parser = NonEmptyStringValueParser::new())]
    pub mongo_collection: String,
}

/// Where records go. Fixed for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct MongoConfig {
    pub addr: String,
    pub database: String,
    pub collection: String,
}

impl Args {
    pub fn mongo(&self) -> MongoConfig {
        MongoConfig {
            addr: self.mongo_addr.clone(),
            database: self.mongo_database.clone(),
            collection: self.mongo_collection.clone(),
        }
    }
}
