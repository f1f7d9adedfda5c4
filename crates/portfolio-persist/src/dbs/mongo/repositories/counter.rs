use mongodb::options::ReturnDocument;
use mongodb::{bson::doc, Client, Collection};
use serde::Deserialize;

use crate::error::{PersistError, Result};

#[derive(Debug, Deserialize)]
struct Counter {
    seq: i64,
}

/// Sequential numeric ids, one counter document per collection.
#[derive(Clone)]
pub struct CounterRepository {
    collection: Collection<Counter>,
}

impl CounterRepository {
    pub fn new(client: &Client, db_name: &str) -> Self {
        let collection = client.database(db_name).collection("counters");
        Self { collection }
    }

    /// Atomically increment and return the counter named `name`
    pub async fn next_id(&self, name: &str) -> Result<i64> {
        let counter = self
            .collection
            .find_one_and_update(doc! { "_id": name }, doc! { "$inc": { "seq": 1_i64 } })
            .upsert(true)
            .return_document(ReturnDocument::After)
            .await?
            .ok_or_else(|| PersistError::Internal(format!("counter {name} was not created")))?;
        Ok(counter.seq)
    }
}
