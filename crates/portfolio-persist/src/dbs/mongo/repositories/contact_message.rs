use futures::TryStreamExt;
use mongodb::options::ReturnDocument;
use mongodb::{bson::doc, bson::Document, Client, Collection};
use portfolio_types::ListMessagesOptions;

use crate::dbs::mongo::models::MongoContactMessage;
use crate::error::Result;

#[derive(Clone)]
pub struct MongoContactMessageRepository {
    collection: Collection<MongoContactMessage>,
}

impl MongoContactMessageRepository {
    pub fn new(client: &Client, db_name: &str) -> Self {
        let collection = client.database(db_name).collection("contact_messages");
        Self { collection }
    }

    /// Save a single message
    pub async fn insert_message(&self, message: MongoContactMessage) -> Result<MongoContactMessage> {
        self.collection.insert_one(&message).await?;
        Ok(message)
    }

    /// Inbox listing, newest first
    pub async fn list_messages(
        &self,
        options: &ListMessagesOptions,
    ) -> Result<Vec<MongoContactMessage>> {
        let mut filter = Document::new();
        if options.unread_only {
            filter.insert("read", false);
        }

        let messages = self
            .collection
            .find(filter)
            .sort(doc! { "created_at": -1, "_id": -1 })
            .await?
            .try_collect()
            .await?;
        Ok(messages)
    }

    /// Set the read flag, returning the updated message if it exists
    pub async fn set_read(&self, id: i64, read: bool) -> Result<Option<MongoContactMessage>> {
        let filter = doc! { "_id": id };
        let update = doc! { "$set": { "read": read } };
        let updated = self
            .collection
            .find_one_and_update(filter, update)
            .return_document(ReturnDocument::After)
            .await?;
        Ok(updated)
    }
}
