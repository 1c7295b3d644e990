pub mod mongodb;
pub mod store;

#[cfg(test)]
pub mod mock;

pub use self::mongodb::MongoStore;
pub use self::store::RecordStore;
